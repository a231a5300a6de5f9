use dotenv::dotenv;
use std::env;

/// Initializes the application configuration.
/// Returns the profile URL and route-type filter defaults, either of which
/// may be empty when nothing is configured.
pub fn init_app_config() -> (String, String) {
    // Load environment variables from .env file
    dotenv().ok();

    let profile_url = env::var("PROFILE_URL").unwrap_or_default();
    let route_type_filter = env::var("ROUTE_TYPE_FILTER").unwrap_or_default();

    if profile_url.trim().is_empty() {
        eprintln!("No PROFILE_URL configured; starting with an empty dashboard");
    } else {
        eprintln!("Using configured profile URL: {profile_url}");
    }

    (profile_url, route_type_filter)
}

/// Whether debug diagnostics are enabled (DEBUG=1)
pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| value == "1")
}
