use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service-account email used as the JWT issuer.
    pub google_client_email: String,
    /// Service-account RSA private key (PEM). `\n` escapes are restored
    /// before the key is parsed.
    pub google_private_key: String,
    /// Target spreadsheet. `None` provisions a new spreadsheet at startup.
    pub google_sheet_id: Option<String>,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_client_email: require_env("GOOGLE_CLIENT_EMAIL")?,
            google_private_key: require_env("GOOGLE_PRIVATE_KEY")?,
            google_sheet_id: std::env::var("GOOGLE_SHEET_ID")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
