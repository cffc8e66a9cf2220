//! `sse-auth` command-line tool
//!
//! Runs provider logins from a terminal: the authorization page opens in
//! the system browser and the redirect lands on a loopback callback server.
//!
//! This is a CLI tool, so `println!` and `eprintln!` are used for
//! user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sse_auth_domain::{Config, ProviderKind};
use sse_auth_infra::{config, init_tracing, LogFormat};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "sse-auth")]
#[command(about = "Popup-based OAuth2 / OpenID logins", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to probing sse-auth.toml, sse-auth.json, config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Verbose logging when RUST_LOG is unset
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported providers
    Providers,

    /// Print the authorization URL for a provider
    AuthorizeUrl {
        #[arg(value_name = "PROVIDER")]
        provider: ProviderKind,

        /// Override the configured redirect URI
        #[arg(long, value_name = "URI")]
        redirect_uri: Option<String>,
    },

    /// Log in through the system browser
    Login {
        #[arg(value_name = "PROVIDER")]
        provider: ProviderKind,

        /// Popup timeout in seconds, 0 waits indefinitely
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Print login button markup
    Render {
        #[arg(value_name = "PROVIDER")]
        provider: ProviderKind,

        /// Icon button instead of the text button
        #[arg(long)]
        icon: bool,

        /// Colour variant modifier (icon buttons)
        #[arg(long, value_name = "V")]
        variant: Option<String>,

        /// Extra CSS class (icon buttons)
        #[arg(long, value_name = "C")]
        class: Option<String>,

        /// Render the loading state
        #[arg(long)]
        loading: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = if cli.json_logs { LogFormat::Json } else { LogFormat::Pretty };
    if let Err(e) = init_tracing(format, cli.verbose) {
        eprintln!("{e}");
    }

    match run(cli).await {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Commands::Providers => Ok(commands::providers(&load_config(cli.config)?)),
        Commands::AuthorizeUrl { provider, redirect_uri } => {
            commands::authorize_url(&load_config(cli.config)?, provider, redirect_uri.as_deref())
        }
        Commands::Login { provider, timeout } => {
            let config = load_config(cli.config)?;
            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });
            commands::login(&config, provider, timeout, cancel).await
        }
        Commands::Render { provider, icon, variant, class, loading } => {
            Ok(commands::render(provider, icon, variant, class, loading))
        }
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => config::load_layered(Some(path)),
        None => config::load(),
    }
    .context("failed to load configuration")
}
