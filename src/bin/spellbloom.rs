use anyhow::{Context, Result};
use clap::Parser;
use spellbloom::hash::HashScheme;
use spellbloom::trial::{self, TrialConfig, DEFAULT_WORDS_FILE};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Check how many misspellings a Bloom filter spell checker catches.
#[derive(Parser, Debug)]
#[command(name = "spellbloom", version)]
struct Args {
    /// False positive rate desired, strictly between 0 and 1.
    #[arg(long = "false-prob", alias = "false_prob", default_value_t = 0.1)]
    false_prob: f64,

    /// Dictionary file, one word per line.
    #[arg(long, default_value = DEFAULT_WORDS_FILE)]
    words: PathBuf,

    /// Number of misspellings to run the filter against.
    #[arg(long, alias = "mispellings", default_value_t = 1000)]
    misspellings: usize,

    /// Seed for the random number generator.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// How bit positions are derived from a word: double or repeated-digest.
    #[arg(long, default_value_t = HashScheme::DoubleHashing, value_parser = HashScheme::from_str)]
    scheme: HashScheme,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = TrialConfig {
        false_positive_rate: args.false_prob,
        words_file: args.words,
        misspellings: args.misspellings,
        seed: args.seed,
        scheme: args.scheme,
    };

    let file = File::open(&config.words_file)
        .with_context(|| format!("failed to open word list {}", config.words_file.display()))?;
    let words = trial::load_words(BufReader::new(file))
        .with_context(|| format!("failed to read word list {}", config.words_file.display()))?;

    let report = trial::run_trial(&words, &config).context("trial failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
