use std::env;

/// Theme app extension id registered for the storefront currency selector.
/// Used to build the theme-editor deep link; overridable per environment.
pub const DEFAULT_THEME_EXTENSION_ID: &str = "010de1f3-20a8-4c27-8078-9d5535ccae26";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Shopify Admin API
    pub shopify_access_token: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Merchant login
    pub admin_password: String,
    pub session_secret: String,

    // Theme editor deep link
    pub theme_extension_id: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            shopify_access_token: required_env("SHOPIFY_ACCESS_TOKEN"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
            admin_password: required_env("ADMIN_PASSWORD"),
            session_secret: env::var("SESSION_SECRET").unwrap_or_default(),
            theme_extension_id: env::var("THEME_EXTENSION_ID")
                .unwrap_or_else(|_| DEFAULT_THEME_EXTENSION_ID.to_string()),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
