//! emoterm binary entry point.
//!
//! Wires the library together in one pass:
//!
//! 1. Parse arguments, resolve configuration, start file logging
//! 2. Select the clipboard strategy from the session environment
//! 3. Fetch and parse the search results (fatal on failure, before any UI)
//! 4. Run the interactive list
//! 5. Copy the chosen value and confirm, or exit quietly on cancel
//!
//! The hidden `--hold-clipboard` mode skips all of this and serves stdin as
//! the clipboard contents (see [`emoterm::clipboard::hold`]).
//!
//! # Exit Codes
//!
//! - `0`: value copied, the user cancelled, or `--help`/`--version`
//! - `1`: invalid arguments, no query, fetch failure, terminal failure or
//!   clipboard failure

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::io::Read;
use std::process::ExitCode;

use emoterm::observability::init_tracing;
use emoterm::{clipboard, fetch, resolve_theme, terminal, Cli, ClipboardStrategy, Config, EmotermError};

/// Hint printed after a failed search request.
const NETWORK_HINT: &str = "Maybe check your internet connection, or the website status (ᵔᴥᵔ)";

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let config = Config::from_sources(&cli, |key| std::env::var(key).ok());
    init_tracing(&config);

    let result = if cli.hold_clipboard {
        hold_clipboard()
    } else {
        run(&cli, &config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "emoterm failed");
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> emoterm::Result<()> {
    let query = cli.query()?;
    let _span = tracing::info_span!("run", query = %query).entered();

    let clipboard = ClipboardStrategy::detect(|key| std::env::var(key).ok(), &config.clipboard_command);
    let theme = resolve_theme(config);

    let entries = fetch::fetch(config, query)?;
    tracing::info!(count = entries.len(), "search results fetched");

    let Some(entry) = terminal::present(entries, &theme, config.page_size)? else {
        tracing::info!("selection cancelled");
        return Ok(());
    };

    clipboard.copy(&entry.value)?;
    tracing::info!(name = %entry.name, "emoticon copied");

    println!("\n    {}, is copied to clipboard :3\n", entry.value);
    Ok(())
}

fn hold_clipboard() -> emoterm::Result<()> {
    let mut value = String::new();
    std::io::stdin().read_to_string(&mut value)?;
    clipboard::hold(&value)
}

fn report(err: &EmotermError) {
    match err {
        EmotermError::Usage(message) => eprintln!("{message}"),
        EmotermError::Network(_) => {
            eprintln!("Error: {err}");
            eprintln!("{NETWORK_HINT}");
        }
        EmotermError::Terminal(_) => eprintln!("Error running program: {err}"),
        _ => eprintln!("Error: {err}"),
    }
}
