//! Server Configuration
//!
//! Read once at startup from environment variables (optionally via `.env`).

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::DEFAULT_SESSION_TTL;
use axum::http::HeaderValue;
use platform::crypto::{SECRET_LENGTH, from_base64};

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Default connection pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Origins allowed by CORS when `FRONTEND_ORIGINS` is unset
pub const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Load through an arbitrary variable lookup
    ///
    /// `development` relaxes the cookie `Secure` flag and lets a missing
    /// `SESSION_SECRET` fall back to a random one.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = parse_origins(
            &lookup("FRONTEND_ORIGINS").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string()),
        );

        let mut auth = if development {
            AuthConfig::development()
        } else {
            AuthConfig::with_random_secret()
        };

        match lookup("SESSION_SECRET") {
            Some(secret) => auth.session_secret = decode_secret(&secret)?,
            None if development => {
                tracing::warn!("SESSION_SECRET not set, using a random secret");
            }
            None => bail!("SESSION_SECRET must be set in production"),
        }

        auth.session_ttl = match lookup("SESSION_TTL_SECS") {
            Some(v) => Duration::from_secs(
                v.trim()
                    .parse()
                    .context("SESSION_TTL_SECS must be a number of seconds")?,
            ),
            None => DEFAULT_SESSION_TTL,
        };

        auth.password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|p| !p.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

/// Comma-separated origins; unparsable entries are skipped
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

fn decode_secret(encoded: &str) -> anyhow::Result<[u8; SECRET_LENGTH]> {
    let bytes = from_base64(encoded.trim()).context("SESSION_SECRET must be base64")?;

    <[u8; SECRET_LENGTH]>::try_from(bytes.as_slice()).map_err(|_| {
        anyhow::anyhow!(
            "SESSION_SECRET must decode to {} bytes, got {}",
            SECRET_LENGTH,
            bytes.len()
        )
    })
}
