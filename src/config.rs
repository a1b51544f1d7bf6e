use std::{
    env,
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
    time::Duration,
};

use log::{debug, error, info};

use crate::error::{BotError, Result};
use crate::responder::ResponderOptions;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REPLY_DELAY_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Simulated thinking time before each reply.
    pub reply_delay: Duration,
    pub responder: ResponderOptions,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Missing keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", DEFAULT_HOST)?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let reply_delay_ms = parse_or(&lookup, "REPLY_DELAY_MS", DEFAULT_REPLY_DELAY_MS)?;
        let strip_punctuation = parse_flag(&lookup, "STRIP_PUNCTUATION", true)?;
        let keyword_triggers = parse_flag(&lookup, "KEYWORD_TRIGGERS", true)?;

        info!("Configuration loaded successfully");
        debug!("Listen address: {host}:{port}");
        debug!("Reply delay: {reply_delay_ms} ms");
        debug!("Strip punctuation: {strip_punctuation}, keyword triggers: {keyword_triggers}");

        Ok(Self {
            host,
            port,
            reply_delay: Duration::from_millis(reply_delay_ms),
            responder: ResponderOptions {
                strip_punctuation,
                keyword_triggers,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            error!("Failed to parse {key}={raw:?}: {e}");
            BotError::Config(format!("invalid value for {key}: {e}"))
        }),
        None => Ok(default),
    }
}

fn parse_flag<F>(lookup: &F, key: &str, default: bool) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => {
            error!("Failed to parse {key}={raw:?}: expected a boolean");
            Err(BotError::Config(format!("invalid value for {key}: {raw:?}")))
        }
    }
}
