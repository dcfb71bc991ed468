// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;
use walletscan::aggregate::TokenKeyPolicy;
use walletscan::config::constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL};
use walletscan::{LookupState, WalletScanner, WalletscanConfigBuilder};

#[derive(Parser)]
#[command(
    name = "walletscan",
    version,
    about = "Summarizes an Ethereum wallet: balance, token holdings and token movements",
    long_about = None
)]
struct Cli {
    /// Wallet address (0x followed by 40 hex digits)
    address: String,

    /// Print the report as JSON instead of the text view
    #[arg(long)]
    json: bool,

    /// Upstream API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Upstream endpoint
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// Deadline for the whole lookup, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Field that identifies a token when aggregating
    #[arg(long, value_enum, default_value_t = TokenKey::Name)]
    token_key: TokenKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TokenKey {
    /// Token display name
    Name,
    /// Token contract address
    Contract,
}

impl From<TokenKey> for TokenKeyPolicy {
    fn from(key: TokenKey) -> Self {
        match key {
            TokenKey::Name => TokenKeyPolicy::DisplayName,
            TokenKey::Contract => TokenKeyPolicy::ContractAddress,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; real environment variables still apply
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = WalletscanConfigBuilder::new()
        .maybe_api_key(cli.api_key)
        .base_url(cli.base_url)
        .request_timeout(Duration::from_secs(cli.timeout_secs))
        .token_key_policy(cli.token_key.into())
        .build();
    debug!(?config, "Loaded configuration");

    let scanner = WalletScanner::from_config(&config).context("Failed to create upstream client")?;

    if !cli.json {
        print!("{}", LookupState::Loading);
    }

    let result = scanner.scan(&cli.address).await;
    let failed = result.is_err();

    if cli.json {
        match &result {
            Ok(report) => println!(
                "{}",
                serde_json::to_string_pretty(report).context("Failed to serialize report")?
            ),
            Err(e) => eprintln!("{e}"),
        }
    } else {
        println!();
        print!("{}", LookupState::from_result(result));
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from([
            "walletscan",
            "0x0000000000000000000000000000000000000000",
            "--json",
            "--timeout-secs",
            "5",
            "--token-key",
            "contract",
            "--base-url",
            "http://localhost:9000/api",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.timeout_secs, 5);
        assert_eq!(TokenKeyPolicy::from(cli.token_key), TokenKeyPolicy::ContractAddress);
        assert_eq!(cli.base_url.port(), Some(9000));
    }

    #[test]
    fn test_address_is_required() {
        assert!(Cli::try_parse_from(["walletscan"]).is_err());
    }
}
