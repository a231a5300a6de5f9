use reqwest::Client;

use crate::config::debug_enabled;
use crate::data::{build_dataset, export_url, fetch_csv, TickDataset};
use crate::error::DataError;

/// Owns the HTTP client and the refresh pipeline: fetch the export, rebuild
/// the dataset. Each refresh re-fetches and re-parses the full export; the
/// previous dataset is replaced wholesale on success.
#[derive(Debug, Clone)]
pub struct AppActions {
    client: Client,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Handle for spawning a refresh onto a background task.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub async fn refresh(&self, profile_url: &str) -> Result<TickDataset, DataError> {
        Self::refresh_with(self.client.clone(), profile_url.to_string()).await
    }

    /// Owned-argument variant of [`Self::refresh`] for `tokio::spawn`.
    pub async fn refresh_with(
        client: Client,
        profile_url: String,
    ) -> Result<TickDataset, DataError> {
        if debug_enabled() {
            if let Some(url) = export_url(&profile_url) {
                eprintln!("getting data from {url}");
            }
        }

        match fetch_csv(&client, &profile_url).await? {
            Some(csv_text) => build_dataset(&csv_text),
            // Empty profile URL: an empty dataset with the canonical
            // columns, not an error.
            None => Ok(TickDataset::default()),
        }
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refresh_with_empty_url_yields_an_empty_dataset() {
        let actions = AppActions::new();
        let dataset = actions.refresh("").await.unwrap();
        assert!(dataset.is_empty());
    }
}
