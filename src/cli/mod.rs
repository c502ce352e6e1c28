//! CLI infrastructure for the noughts game
//!
//! This module provides the command-line interface for playing against the
//! minimax opponent and for solving arbitrary positions.

pub mod commands;
pub mod config;
pub mod output;

use std::io::{self, Write};

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Message printed whenever the user ends the session early
pub const FAREWELL: &str = "Bye";

/// Print the farewell line to stdout
pub fn farewell() {
    let mut stdout = io::stdout().lock();
    // Nothing useful left to do if stdout is gone
    let _ = writeln!(stdout, "{FAREWELL}").and_then(|_| stdout.flush());
}

/// Exit cleanly on Ctrl-C.
///
/// Prompts block in `read_line`, which the interrupt does not wake, so the
/// handler says goodbye and ends the process itself with status 0, the same as
/// end-of-input at a prompt.
///
/// # Errors
///
/// Returns [`crate::Error::InterruptHandler`] if a handler is already installed.
pub fn install_interrupt_handler() -> crate::Result<()> {
    ctrlc::set_handler(|| {
        debug!("interrupted at prompt");
        farewell();
        std::process::exit(0);
    })?;
    Ok(())
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and the
/// default is `warn` so logs stay out of the way of the game.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}
