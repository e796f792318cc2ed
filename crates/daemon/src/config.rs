//! Server configuration from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `SLEEPWELL_MODE` | `all` (`rest`, `rpc`) |
//! | `SLEEPWELL_REST_HOST` | `0.0.0.0` |
//! | `SLEEPWELL_REST_PORT`, then `PORT` | `8000` |
//! | `SLEEPWELL_RPC_HOST` | `127.0.0.1` |
//! | `SLEEPWELL_RPC_PORT` | `9528` |
//! | `SLEEPWELL_PICKER_SEED` | unset (random picks) |
//! | `SLEEPWELL_LOG_FORMAT` | `pretty` (`json`) |

use anyhow::{bail, Context, Result};
use sleepwell_api_rest::RestServerConfig;
use sleepwell_api_rpc::RpcServerConfig;
use std::str::FromStr;

/// Which transports to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeMode {
    All,
    Rest,
    Rpc,
}

impl ServeMode {
    pub fn serves_rest(self) -> bool {
        matches!(self, ServeMode::All | ServeMode::Rest)
    }

    pub fn serves_rpc(self) -> bool {
        matches!(self, ServeMode::All | ServeMode::Rpc)
    }
}

impl FromStr for ServeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "both" => Ok(ServeMode::All),
            "rest" | "http" => Ok(ServeMode::Rest),
            "rpc" => Ok(ServeMode::Rpc),
            other => bail!("unknown SLEEPWELL_MODE '{}' (expected all, rest or rpc)", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub mode: ServeMode,
    pub rest: RestServerConfig,
    pub rpc: RpcServerConfig,
    pub picker_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mode = match var("SLEEPWELL_MODE") {
            Some(raw) => raw.parse()?,
            None => ServeMode::All,
        };

        let mut rest = RestServerConfig::default();
        if let Some(host) = var("SLEEPWELL_REST_HOST") {
            rest.host = host;
        }
        if let Some((key, raw)) = var("SLEEPWELL_REST_PORT")
            .map(|v| ("SLEEPWELL_REST_PORT", v))
            .or_else(|| var("PORT").map(|v| ("PORT", v)))
        {
            rest.port = parse_number(key, &raw)?;
        }

        let mut rpc = RpcServerConfig::default();
        if let Some(host) = var("SLEEPWELL_RPC_HOST") {
            rpc.host = host;
        }
        if let Some(raw) = var("SLEEPWELL_RPC_PORT") {
            rpc.port = parse_number("SLEEPWELL_RPC_PORT", &raw)?;
        }

        let picker_seed = var("SLEEPWELL_PICKER_SEED")
            .map(|raw| parse_number("SLEEPWELL_PICKER_SEED", &raw))
            .transpose()?;

        let log_format = match var("SLEEPWELL_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            mode,
            rest,
            rpc,
            picker_seed,
            log_format,
        })
    }
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid {} value '{}'", key, raw))
}
