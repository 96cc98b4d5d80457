//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::model::{DisplayRange, Query};
use crate::core::render::LookupConfig;
use crate::dictionary::api::{run_lookup, PageSource};

/// alc - look up words in Eijiro on the Web from the terminal.
#[derive(Parser, Debug)]
#[command(name = "alc")]
#[command(
    author,
    version,
    about,
    long_about = r#"alc searches the Eijiro on the Web Japanese-English dictionary and prints
the matching entries as colored text.

Each entry shows its headword, attributes (pronunciation, kana reading, ...)
and numbered definitions grouped by word class. Example sentences and kana
annotations are left out. Spelling suggestions are printed when the site
offers them.

Examples:
    alc dictionary
    alc take off --range 1:5
    alc 辞書 -r 2
    alc --html saved.html
"#
)]
pub struct Cli {
    /// Word(s) to look up; multiple words are joined with spaces.
    #[arg(
        value_name = "WORD",
        num_args = 1..,
        required_unless_present = "html"
    )]
    pub words: Vec<String>,

    /// Range of results to show (1-indexed, format: begin:end).
    #[arg(
        short,
        long,
        default_value = "1:3",
        allow_hyphen_values = true,
        value_name = "BEGIN:END",
        long_help = "Range of results to show (1-indexed, inclusive). Format: begin:end.\n\n\
A single number N is the same as N:N. Ranges that match no result\n\
(e.g. 0:0 or 5:2) print no entries.\n\n\
Example: --range 2:4"
    )]
    pub range: String,

    /// Render a saved results page instead of querying the site.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Read a results page previously saved from the dictionary site and\n\
render it instead of sending a request. WORD is optional in this mode."
    )]
    pub html: Option<PathBuf>,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Colors are also disabled automatically when\n\
stdout is not a terminal."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let range: DisplayRange = cli.range.parse()?;
    let config = LookupConfig::new(range, !cli.no_color);

    let query = Query::from_words(&cli.words);
    let source = match cli.html.as_deref() {
        Some(path) => PageSource::File(path),
        None => PageSource::Remote(&query),
    };

    run_lookup(source, config)
}
