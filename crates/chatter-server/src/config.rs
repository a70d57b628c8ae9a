use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Start with the default conversation instead of an empty store.
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CHATTER_HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = match lookup("CHATTER_PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("CHATTER_PORT is not a valid port: {:?}", raw))?,
            None => DEFAULT_PORT,
        };
        let seed = match lookup("CHATTER_SEED") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("CHATTER_SEED is not a boolean: {:?}", raw))?,
            None => true,
        };

        Ok(Self { host, port, seed })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
