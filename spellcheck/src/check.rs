//! The `check` subcommand.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use rbdict::Dictionary;
use tracing::{debug, info};

use crate::settings;

/// Arguments for the check subcommand
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Word list, one word per line
    #[arg(long, short = 'd')]
    pub dictionary: PathBuf,

    /// Tree configuration YAML file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Only print words that were not found
    #[arg(long)]
    pub misspelled_only: bool,

    /// Text files to check
    #[arg(required = true)]
    pub texts: Vec<PathBuf>,
}

/// Run the check subcommand
pub fn run(args: &CheckArgs) -> Result<()> {
    let config = settings::load(args.config.as_deref())?;
    let dictionary = load_dictionary(&args.dictionary, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total = 0usize;
    let mut missing = 0usize;
    for path in &args.texts {
        let (checked, not_found) = check_file(&dictionary, path, args.misspelled_only, &mut out)?;
        total += checked;
        missing += not_found;
    }
    out.flush()?;

    info!(words = total, not_found = missing, "spell check finished");
    Ok(())
}

fn load_dictionary(path: &Path, config: rbdict::TreeConfig) -> Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dictionary: {}", path.display()))?;

    let started = Instant::now();
    let dictionary = Dictionary::from_reader_with_config(BufReader::new(file), config)
        .with_context(|| format!("Failed to load dictionary: {}", path.display()))?;
    let elapsed = started.elapsed();

    info!(
        words = dictionary.len(),
        black_height = dictionary.tree().validate().unwrap_or_default(),
        height = dictionary.tree().height(),
        elapsed_us = elapsed.as_micros(),
        "dictionary built"
    );
    Ok(dictionary)
}

/// Checks one file line by line. Returns `(words checked, words not found)`.
fn check_file(
    dictionary: &Dictionary,
    path: &Path,
    misspelled_only: bool,
    out: &mut impl Write,
) -> Result<(usize, usize)> {
    let file =
        File::open(path).with_context(|| format!("Failed to open text: {}", path.display()))?;
    info!(path = %path.display(), "checking");

    let mut checked = 0;
    let mut not_found = 0;
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("Failed to read text: {}", path.display()))?;
        for token in line.split_whitespace() {
            let started = Instant::now();
            let Some(check) = dictionary.check_word(token) else {
                continue;
            };
            debug!(
                word = %check.word,
                found = check.found,
                elapsed_ns = started.elapsed().as_nanos(),
                "lookup"
            );

            checked += 1;
            if !check.found {
                not_found += 1;
            }
            if check.found && misspelled_only {
                continue;
            }
            writeln!(out, "{check}")?;
        }
    }
    Ok((checked, not_found))
}
