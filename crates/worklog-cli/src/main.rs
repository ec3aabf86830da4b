use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod client;
mod commands;

use cli::{Cli, Commands};
use client::ApiClient;
use worklog_api::ServerConfig;

const CLIENT_LOG_FILTER: &str = "worklog_cli=info,worklog_api=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = log_filter(&cli.command)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ApiClient::new(cli.api_url.clone());
    commands::execute(cli.command, &client).await
}

/// A hosted server logs with the server's configured filter; client
/// commands stay quiet.
fn log_filter(command: &Commands) -> Result<String> {
    match command {
        Commands::Serve { .. } => Ok(ServerConfig::from_env()?.log_filter),
        _ => Ok(CLIENT_LOG_FILTER.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_uses_server_log_filter() {
        let serve = Cli::try_parse_from(["worklog", "serve"]).unwrap();
        let expected = ServerConfig::from_env().unwrap().log_filter;
        assert_eq!(log_filter(&serve.command).unwrap(), expected);
    }

    #[test]
    fn test_client_commands_use_client_filter() {
        let stats = Cli::try_parse_from(["worklog", "stats"]).unwrap();
        assert_eq!(log_filter(&stats.command).unwrap(), CLIENT_LOG_FILTER);
    }
}
