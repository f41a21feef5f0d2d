//! # Cancel Subcommand
//!
//! Cancels a previously submitted transaction by its `TransId`.

use anyhow::Context;
use clap::Args;
use suretax_client::{CancelRequest, CancelResponse, SuretaxClient};

/// Arguments for the cancel subcommand.
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Client ID number assigned by SureTax.
    #[arg(long)]
    pub client_number: String,

    /// Transaction ID returned by the original request.
    #[arg(long)]
    pub trans_id: String,

    /// Validation key assigned by SureTax.
    #[arg(long, env = "SURETAX_VALIDATION_KEY", hide_env_values = true)]
    pub validation_key: String,

    /// Optional tracking value echoed in the response.
    #[arg(long, default_value = "")]
    pub client_tracking: String,
}

impl CancelArgs {
    pub fn to_request(&self) -> CancelRequest {
        CancelRequest::new(&self.client_number, &self.trans_id, &self.validation_key)
            .with_client_tracking(&self.client_tracking)
    }
}

pub async fn run(client: &SuretaxClient, args: &CancelArgs) -> anyhow::Result<CancelResponse> {
    let request = args.to_request();
    tracing::info!(trans_id = %request.trans_id, "cancelling SureTax transaction");

    let response = client
        .cancel(&request)
        .await
        .with_context(|| format!("SureTax cancel of {} failed", request.trans_id))?;
    tracing::info!(
        trans_id = response.trans_id,
        response_code = %response.response_code,
        header_message = %response.header_message,
        "SureTax cancel completed"
    );
    Ok(response)
}
