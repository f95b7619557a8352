use crate::common::net::parse_endpoint_url;
use crate::config::ServiceConfig;
use clap::Parser;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default service address baked into the client; `--endpoint` overrides it.
const DEFAULT_ENDPOINT: &str = "https://sho.rt";

#[derive(Parser, Debug)]
#[command(name = "shortwire")]
#[command(about = "Interactive terminal client for URL shortening services", long_about = None)]
pub struct CliArgs {
    /// Shortening service endpoint
    #[arg(short, long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// UI refresh rate (Hz)
    #[arg(long, default_value_t = 10)]
    refresh_hz: u16,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("endpoint is not a valid URL: {value}")]
    InvalidEndpoint { value: String },
    #[error("request timeout must be greater than zero (got {value})")]
    InvalidTimeout { value: u64 },
    #[error("ui refresh rate must be greater than zero (got {value})")]
    InvalidRefreshHz { value: u16 },
}

#[derive(Clone, Debug)]
pub struct AppSettings {
    pub endpoint: Url,
    pub timeout: Duration,
    pub refresh_hz: u16,
}

impl AppSettings {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    let args = CliArgs::parse();
    from_args(args)
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    if args.timeout == 0 {
        return Err(SettingsError::InvalidTimeout { value: args.timeout });
    }
    if args.refresh_hz == 0 {
        return Err(SettingsError::InvalidRefreshHz {
            value: args.refresh_hz,
        });
    }

    let endpoint =
        parse_endpoint_url(&args.endpoint).ok_or_else(|| SettingsError::InvalidEndpoint {
            value: args.endpoint.clone(),
        })?;

    Ok(AppSettings {
        endpoint,
        timeout: Duration::from_secs(args.timeout),
        refresh_hz: args.refresh_hz,
    })
}
