//! Terminal Keys - Main Entry Point
//!
//! Usage: terminal-keys <TEXT> [--no-enter] [--debug]

use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use terminal_keys::{AppConfig, LoggingConfig, PlatformFactory, TerminalSender};

#[derive(Parser, Debug)]
#[command(name = "terminal-keys", version, about = "Send text to a Windows Terminal window without focusing it")]
struct Cli {
    /// Text to type into the terminal
    text: String,

    /// Do not press Enter after the text
    #[arg(long)]
    no_enter: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let config = match AppConfig::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring configuration: {:#}", e);
            AppConfig::default()
        }
    };
    let logging = if cli.debug {
        LoggingConfig::debug()
    } else {
        config.logging
    };
    init_logging(&logging);

    if send(&cli.text, !cli.no_enter) {
        println!("Message sent successfully");
        ExitCode::SUCCESS
    } else {
        println!("Failed to send message");
        ExitCode::FAILURE
    }
}

fn send(text: &str, send_enter: bool) -> bool {
    let system = match PlatformFactory::create_window_system() {
        Ok(system) => system,
        Err(e) => {
            tracing::error!("{}", e);
            return false;
        }
    };

    TerminalSender::new(system.as_ref()).send_text(text, send_enter)
}

fn init_logging(config: &LoggingConfig) {
    // stdout is reserved for the result line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.directive().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
