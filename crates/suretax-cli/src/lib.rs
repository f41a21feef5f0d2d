//! # suretax-cli: SureTax Command-Line Interface
//!
//! ## Subcommands
//!
//! - `send`: submit a tax calculation request read from a JSON file
//! - `cancel`: cancel a previously submitted transaction
//!
//! Connection settings come from the `SURETAX_*` environment variables and
//! may be overridden per invocation with the global flags. Responses are
//! printed to stdout as pretty JSON in the service's own field spelling.

pub mod cancel;
pub mod send;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use suretax_client::{SuretaxClient, SuretaxConfig};
use url::Url;

/// Connection flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Tax calculation endpoint. Overrides `SURETAX_URL`.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Cancellation endpoint. Overrides `SURETAX_CANCEL_URL`.
    #[arg(long, global = true)]
    pub cancel_url: Option<String>,

    /// Overall request timeout in seconds. Overrides `SURETAX_TIMEOUT_SECS`.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl ConnectionArgs {
    /// Resolve the client configuration. Each setting comes from its flag
    /// when given, otherwise from its `SURETAX_*` variable, otherwise from
    /// the built-in default.
    pub fn config(&self) -> anyhow::Result<SuretaxConfig> {
        let url = resolve_url(self.url.as_deref(), "--url", "SURETAX_URL")?;
        let cancel_url =
            resolve_url(self.cancel_url.as_deref(), "--cancel-url", "SURETAX_CANCEL_URL")?;

        let mut config = SuretaxConfig::new(url, cancel_url).with_env_timeouts();
        if let Some(timeout) = self.timeout_secs {
            config.request_timeout_secs = timeout;
        }
        Ok(config)
    }

    pub fn client(&self) -> anyhow::Result<SuretaxClient> {
        Ok(SuretaxClient::new(self.config()?))
    }
}

fn resolve_url(flag_value: Option<&str>, flag: &str, var: &str) -> anyhow::Result<Url> {
    let raw = match flag_value {
        Some(value) => value.to_string(),
        None => std::env::var(var)
            .with_context(|| format!("SureTax endpoint missing: pass {flag} or set {var}"))?,
    };
    raw.parse()
        .with_context(|| format!("invalid {flag} / {var} value {raw}"))
}

/// Print a response document as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
