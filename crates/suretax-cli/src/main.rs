//! # suretax CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use suretax_cli::ConnectionArgs;

/// Submit SureTax tax calculation requests and cancel transactions.
#[derive(Parser, Debug)]
#[command(name = "suretax", version, about)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Submit a tax calculation request.
    Send(suretax_cli::send::SendArgs),
    /// Cancel a previously submitted transaction.
    Cancel(suretax_cli::cancel::CancelArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = cli.connection.client()?;

    match cli.command {
        Commands::Send(args) => {
            let response = suretax_cli::send::run(&client, &args).await?;
            suretax_cli::print_json(&response)?;
        }
        Commands::Cancel(args) => {
            let response = suretax_cli::cancel::run(&client, &args).await?;
            suretax_cli::print_json(&response)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_send_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "suretax",
            "send",
            "request.json",
            "--url",
            "https://api.example.com/PostRequest",
        ])
        .unwrap();
        assert_eq!(
            cli.connection.url.as_deref(),
            Some("https://api.example.com/PostRequest")
        );
        assert!(matches!(cli.command, Commands::Send(ref a) if a.request_file.to_str() == Some("request.json")));
    }

    #[test]
    fn parses_cancel() {
        let cli = Cli::try_parse_from([
            "suretax",
            "cancel",
            "--client-number",
            "000000001",
            "--trans-id",
            "616039832",
            "--validation-key",
            "KEY",
        ])
        .unwrap();
        match cli.command {
            Commands::Cancel(args) => {
                assert_eq!(args.trans_id, "616039832");
                assert_eq!(args.client_tracking, "");
            }
            other => panic!("expected cancel, got {other:?}"),
        }
    }

    #[test]
    fn cancel_requires_trans_id() {
        let result = Cli::try_parse_from([
            "suretax",
            "cancel",
            "--client-number",
            "000000001",
            "--validation-key",
            "KEY",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
