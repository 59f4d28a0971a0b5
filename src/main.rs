//! Thesaurus - CLI
//!
//! Looks up a word or phrase on thesaurus.com and prints its synonyms and
//! antonyms, or spelling suggestions when the word is unknown.

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use std::time::Duration;
use thesaurus::{
    commands::{LookupConfig, LookupError, lookup_query},
    core::Query,
    extract::ScriptMarkerLocator,
    fetch::HttpPageSource,
    output::{DisplayConfig, Palette, print_lookup},
};

#[derive(Parser)]
#[command(
    name = "thesaurus",
    about = "Look up synonyms and antonyms on thesaurus.com",
    version,
    author
)]
struct Cli {
    /// Word or phrase to look up
    #[arg(required = true, num_args = 1..)]
    words: Vec<String>,

    /// Synonyms and antonyms shown per definition
    #[arg(short = 'n', long, default_value_t = DisplayConfig::DEFAULT_MAX_WORDS)]
    max_words: usize,

    /// Spelling suggestions shown when the word is not found
    #[arg(short = 's', long, default_value_t = DisplayConfig::DEFAULT_MAX_SUGGESTIONS)]
    max_suggestions: usize,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log verbosity: -v info, -vv debug, -vvv trace (RUST_LOG overrides)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Spinner on stderr while the request blocks
fn spinner(query: &Query) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    pb.set_message(format!("Looking up '{query}'..."));
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Reject bad input before any request is made
    let query = Query::parse(&cli.words.join(" ")).map_err(LookupError::from)?;

    let pb = spinner(&query)?;
    let lookup = lookup_query(
        query,
        &HttpPageSource,
        &ScriptMarkerLocator::default(),
        &LookupConfig::default(),
    );
    pb.finish_and_clear();

    let config = DisplayConfig::new(cli.max_words, cli.max_suggestions);
    print_lookup(&lookup?, &config, &Palette::DEFAULT)?;
    Ok(())
}
