use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub allowed_origin: String,
    pub session_ttl_hours: i64,
}

const DEFAULT_SESSION_TTL_HOURS: i64 = 720;

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            session_ttl_hours: match std::env::var("SESSION_TTL_HOURS") {
                Ok(value) => value
                    .parse()
                    .context("SESSION_TTL_HOURS must be a number")?,
                Err(_) => DEFAULT_SESSION_TTL_HOURS,
            },
        })
    }
}
