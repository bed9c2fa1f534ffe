use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_username: String,
    pub admin_password: String,
    pub port: u16,
    pub rust_log: String,
    /// Upload size ceiling in bytes. Requests above it are rejected before parsing.
    pub max_upload_bytes: usize,
    /// Page-count ceiling for uploaded documents, bounds extraction work.
    pub max_pages: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            admin_username: require_env("ADMIN_USERNAME")?,
            admin_password: require_env("ADMIN_PASSWORD")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            max_pages: std::env::var("MAX_PAGES")
                .unwrap_or_else(|_| "50".to_string())
                .parse::<usize>()
                .context("MAX_PAGES must be a page count")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
