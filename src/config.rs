use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    /// Exact origin allowed by CORS; None means any origin.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok(); // Load .env file if present

        Ok(Config {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            database_url: env::var("DATABASE_URL")?,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
        })
    }
}
