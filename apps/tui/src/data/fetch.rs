//! Retrieval of the raw CSV tick export.

use crate::error::DataError;

/// Path segment appended to the profile URL to reach the CSV export.
const TICK_EXPORT_PATH: &str = "/tick-export";

/// Build the export URL for a profile URL, or `None` when the input is
/// empty or whitespace (the "no profile loaded" state, not an error).
pub fn export_url(profile_url: &str) -> Option<String> {
    let trimmed = profile_url.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(
        "{}{TICK_EXPORT_PATH}",
        trimmed.trim_end_matches('/')
    ))
}

/// Fetch the raw CSV text of a profile's tick export.
///
/// Returns `Ok(None)` for an empty profile URL. A network or non-2xx HTTP
/// response is a [`DataError::Fetch`]; the body is not inspected further
/// here.
pub async fn fetch_csv(
    client: &reqwest::Client,
    profile_url: &str,
) -> Result<Option<String>, DataError> {
    let Some(url) = export_url(profile_url) else {
        return Ok(None);
    };

    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(Some(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_url_appends_the_export_path() {
        assert_eq!(
            export_url("https://example.com/user/123/jane-doe").as_deref(),
            Some("https://example.com/user/123/jane-doe/tick-export")
        );
    }

    #[test]
    fn export_url_tolerates_a_trailing_slash() {
        assert_eq!(
            export_url("https://example.com/user/123/jane-doe/ ").as_deref(),
            Some("https://example.com/user/123/jane-doe/tick-export")
        );
    }

    #[test]
    fn empty_or_blank_profile_url_means_no_export() {
        assert_eq!(export_url(""), None);
        assert_eq!(export_url("   "), None);
    }

    #[tokio::test]
    async fn empty_url_fetch_is_not_an_error() {
        let client = reqwest::Client::new();
        let body = fetch_csv(&client, "  ").await.unwrap();
        assert_eq!(body, None);
    }
}
