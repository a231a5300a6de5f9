use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "ticklog-tui", version, about = "Tick Dashboard TUI")]
pub struct CliArgs {
    /// Fetch once, print stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the profile URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Pre-set the route type filter for first sends
    #[arg(long = "route-type", value_name = "TYPE")]
    pub route_type: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.url {
            std::env::set_var("PROFILE_URL", url);
        }
        if let Some(route_type) = &self.route_type {
            std::env::set_var("ROUTE_TYPE_FILTER", route_type);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_flags() {
        let args = CliArgs::parse_from(["ticklog-tui", "--headless", "--json"]);
        assert!(args.headless);
        assert!(args.json);
        assert!(args.url.is_none());
    }

    #[test]
    fn parses_url_and_route_type() {
        let args = CliArgs::parse_from([
            "ticklog-tui",
            "--url",
            "https://example.com/user/1/jane",
            "--route-type",
            "sport",
        ]);
        assert_eq!(args.url.as_deref(), Some("https://example.com/user/1/jane"));
        assert_eq!(args.route_type.as_deref(), Some("sport"));
    }
}
