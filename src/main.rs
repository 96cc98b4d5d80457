//! alc - Eijiro on the Web from the command line
//!
//! alc provides:
//! - Dictionary search against eow.alc.co.jp
//! - Colored rendering of headwords, attributes and definitions
//! - Result windows via --range
//! - Offline rendering of saved results pages

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use tracing::Level;

mod backends;
mod cli;
mod core;
mod dictionary;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet, !cli.no_color);
    cli::run(cli)
}

/// Send diagnostics to stderr so stdout carries only dictionary output
fn init_tracing(verbose: bool, quiet: bool, color: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
