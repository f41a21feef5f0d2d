//! # Send Subcommand
//!
//! Submits a tax calculation request. The request file holds a `TaxRequest`
//! in wire form (PascalCase keys), e.g. one captured from a previous call.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use suretax_client::{SuretaxClient, TaxRequest, TaxResponse};

/// Arguments for the send subcommand.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Path to the request JSON, or `-` to read stdin.
    pub request_file: PathBuf,
}

/// Read a request document from a file, or stdin when the path is `-`.
pub fn read_request(path: &Path) -> anyhow::Result<TaxRequest> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading request file {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("parsing request {}", path.display()))
}

pub async fn run(client: &SuretaxClient, args: &SendArgs) -> anyhow::Result<TaxResponse> {
    let request = read_request(&args.request_file)?;
    tracing::info!(
        client_number = %request.client_number,
        items = request.item_list.len(),
        "submitting SureTax request"
    );

    let response = client.send(&request).await.context("SureTax send failed")?;
    tracing::info!(
        trans_id = response.trans_id,
        response_code = %response.response_code,
        header_message = %response.header_message,
        "SureTax request completed"
    );
    Ok(response)
}
