//! Spell-checking trial.
//!
//! Loads a dictionary into a [`BloomFilter`], misspells a random sample of
//! its words and counts how many misspellings the filter catches. A
//! misspelling is *detected* when the filter reports it absent and *missed*
//! when it is a false positive.
//!
//! ```
//! use spellbloom::trial::{run_trial, TrialConfig};
//!
//! let words: Vec<String> = ["apple", "banana", "cherry", "damson", "elder"]
//!     .iter()
//!     .map(|w| w.to_string())
//!     .collect();
//! let config = TrialConfig { misspellings: 3, ..TrialConfig::default() };
//!
//! let report = run_trial(&words, &config).unwrap();
//! assert_eq!(report.generated, 3);
//! assert_eq!(report.detected + report.undetected.len(), 3);
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::error::{Result, SpellBloomError};
use crate::filters::BloomFilter;
use crate::hash::HashScheme;
use crate::misspell::Misspeller;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Default dictionary location on Unix systems.
pub const DEFAULT_WORDS_FILE: &str = "/usr/share/dict/words";

/// Trial parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrialConfig {
    /// Target false positive rate of the filter.
    pub false_positive_rate: f64,
    /// Dictionary file, one word per line.
    pub words_file: PathBuf,
    /// Number of words to misspell.
    pub misspellings: usize,
    /// Seed for sampling and misspelling.
    pub seed: u64,
    /// Position derivation scheme of the filter.
    pub scheme: HashScheme,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            false_positive_rate: 0.1,
            words_file: PathBuf::from(DEFAULT_WORDS_FILE),
            misspellings: 1000,
            seed: 42,
            scheme: HashScheme::default(),
        }
    }
}

/// Outcome of [`run_trial`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrialReport {
    /// Words read from the dictionary, duplicates included.
    pub words_loaded: usize,
    /// Misspellings generated.
    pub generated: usize,
    /// Misspellings the filter rejected.
    pub detected: usize,
    /// Misspellings the filter accepted, in generation order.
    pub undetected: Vec<String>,
    /// Filter size in bits.
    pub bits: usize,
    /// Position functions per element.
    pub hash_count: usize,
}

impl TrialReport {
    /// Fraction of misspellings the filter missed.
    #[must_use]
    pub fn miss_rate(&self) -> f64 {
        if self.generated == 0 {
            0.0
        } else {
            self.undetected.len() as f64 / self.generated as f64
        }
    }
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {} words", self.words_loaded)?;
        writeln!(f, "There were {} misspellings generated.", self.generated)?;
        writeln!(f, "There were {} misspellings detected.", self.detected)?;
        writeln!(f, "There were {} misspellings missed.", self.undetected.len())?;
        write!(f, "{:?}", self.undetected)
    }
}

/// Read one word per line, trimmed; blank lines are skipped.
///
/// # Errors
///
/// Any I/O error from `reader`, including invalid UTF-8.
///
/// ```
/// use spellbloom::trial::load_words;
///
/// let words = load_words("cat\n  dog \n\nbird\n".as_bytes()).unwrap();
/// assert_eq!(words, ["cat", "dog", "bird"]);
/// ```
pub fn load_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Run a misspelling trial over `words`.
///
/// The filter is sized for the number of distinct words. Words to misspell
/// are sampled without replacement, so every generated misspelling comes
/// from a different dictionary word.
///
/// # Errors
///
/// - [`SpellBloomError::EmptyWordList`] if `words` is empty
/// - [`SpellBloomError::SampleTooLarge`] if `config.misspellings` exceeds the
///   number of distinct words
/// - [`SpellBloomError::InvalidParameters`] for an invalid false positive rate
pub fn run_trial(words: &[String], config: &TrialConfig) -> Result<TrialReport> {
    let mut seen = HashSet::with_capacity(words.len());
    let distinct: Vec<&String> = words.iter().filter(|w| seen.insert(w.as_str())).collect();

    if distinct.is_empty() {
        return Err(SpellBloomError::EmptyWordList);
    }
    if config.misspellings > distinct.len() {
        return Err(SpellBloomError::sample_too_large(
            config.misspellings,
            distinct.len(),
        ));
    }

    tracing::info!(
        words = words.len(),
        distinct = distinct.len(),
        misspellings = config.misspellings,
        seed = config.seed,
        "starting trial"
    );

    let mut filter =
        BloomFilter::with_scheme(distinct.len(), config.false_positive_rate, config.scheme)?;
    filter.extend(&distinct);

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let sample: Vec<&String> = distinct
        .choose_multiple(&mut rng, config.misspellings)
        .copied()
        .collect();

    let known: HashSet<String> = distinct.iter().map(|w| (*w).clone()).collect();
    let mut misspeller = Misspeller::new(&known, rng);

    let mut detected = 0;
    let mut undetected = Vec::new();
    for word in sample {
        let typo = misspeller.misspell(word);
        if filter.contains(&typo) {
            undetected.push(typo);
        } else {
            detected += 1;
        }
    }

    let report = TrialReport {
        words_loaded: words.len(),
        generated: config.misspellings,
        detected,
        undetected,
        bits: filter.num_bits(),
        hash_count: filter.hash_count(),
    };

    tracing::info!(
        generated = report.generated,
        detected = report.detected,
        missed = report.undetected.len(),
        fill_ratio = filter.fill_ratio(),
        "trial finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("word{:05}", i)).collect()
    }

    #[test]
    fn test_default_config() {
        let config = TrialConfig::default();
        assert_eq!(config.false_positive_rate, 0.1);
        assert_eq!(config.words_file, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(config.misspellings, 1000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.scheme, HashScheme::DoubleHashing);
    }

    #[test]
    fn test_load_words() {
        let input = "alpha\r\nbeta\n\n   \n gamma\t\n";
        assert_eq!(load_words(input.as_bytes()).unwrap(), ["alpha", "beta", "gamma"]);
        assert!(load_words("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_words_invalid_utf8() {
        let input: &[u8] = &[b'o', b'k', b'\n', 0xff, 0xfe, b'\n'];
        assert!(load_words(input).is_err());
    }

    #[test]
    fn test_run_trial_counts_add_up() {
        let words = dictionary(2000);
        let config = TrialConfig {
            misspellings: 500,
            ..TrialConfig::default()
        };

        let report = run_trial(&words, &config).unwrap();

        assert_eq!(report.words_loaded, 2000);
        assert_eq!(report.generated, 500);
        assert_eq!(report.detected + report.undetected.len(), 500);
        assert_eq!((report.bits, report.hash_count), crate::core::filter_params(2000, 0.1).unwrap());
        for typo in &report.undetected {
            assert!(!words.contains(typo));
        }
    }

    #[test]
    fn test_run_trial_miss_rate_near_target() {
        let words = dictionary(5000);
        for scheme in HashScheme::ALL {
            let config = TrialConfig {
                misspellings: 2000,
                scheme,
                ..TrialConfig::default()
            };
            let report = run_trial(&words, &config).unwrap();
            assert!(report.miss_rate() < 0.2, "{}: miss rate {}", scheme, report.miss_rate());
        }
    }

    #[test]
    fn test_run_trial_reproducible() {
        let words = dictionary(300);
        let config = TrialConfig {
            misspellings: 100,
            seed: 7,
            ..TrialConfig::default()
        };
        assert_eq!(run_trial(&words, &config).unwrap(), run_trial(&words, &config).unwrap());
    }

    #[test]
    fn test_run_trial_duplicates_are_collapsed() {
        let mut words = dictionary(10);
        words.extend(dictionary(10));
        let config = TrialConfig {
            misspellings: 10,
            ..TrialConfig::default()
        };

        let report = run_trial(&words, &config).unwrap();
        assert_eq!(report.words_loaded, 20);
        assert_eq!(report.bits, crate::core::compute_m(10, 0.1).unwrap());
    }

    #[test]
    fn test_run_trial_empty() {
        let config = TrialConfig::default();
        assert_eq!(run_trial(&[], &config), Err(SpellBloomError::EmptyWordList));
    }

    #[test]
    fn test_run_trial_sample_too_large() {
        let words = dictionary(5);
        let config = TrialConfig {
            misspellings: 6,
            ..TrialConfig::default()
        };
        assert_eq!(
            run_trial(&words, &config),
            Err(SpellBloomError::SampleTooLarge {
                requested: 6,
                available: 5
            })
        );
    }

    #[test]
    fn test_run_trial_invalid_rate() {
        let config = TrialConfig {
            false_positive_rate: 1.5,
            misspellings: 1,
            ..TrialConfig::default()
        };
        assert!(matches!(
            run_trial(&dictionary(3), &config),
            Err(SpellBloomError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_zero_misspellings() {
        let config = TrialConfig {
            misspellings: 0,
            ..TrialConfig::default()
        };
        let report = run_trial(&dictionary(3), &config).unwrap();
        assert_eq!(report.generated, 0);
        assert_eq!(report.miss_rate(), 0.0);
    }

    #[test]
    fn test_report_display() {
        let report = TrialReport {
            words_loaded: 10,
            generated: 3,
            detected: 2,
            undetected: vec!["dgo".to_string()],
            bits: 48,
            hash_count: 4,
        };
        assert_eq!(
            report.to_string(),
            "Loaded 10 words\n\
             There were 3 misspellings generated.\n\
             There were 2 misspellings detected.\n\
             There were 1 misspellings missed.\n\
             [\"dgo\"]"
        );
    }
}
