//! Seeded misspelling generator.
//!
//! A [`Misspeller`] mutates a known word with random single-character
//! [`Edit`]s until the result is no longer a known word. The random source is
//! injected, so a seeded generator reproduces the same misspellings.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use spellbloom::misspell::Misspeller;
//! use std::collections::HashSet;
//!
//! let known: HashSet<String> = ["cat", "dog"].iter().map(|s| s.to_string()).collect();
//! let mut misspeller = Misspeller::new(&known, ChaCha8Rng::seed_from_u64(42));
//!
//! let typo = misspeller.misspell("cat");
//! assert!(!known.contains(&typo));
//! ```

use rand::Rng;
use std::collections::HashSet;
use std::fmt;

const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A single-character edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Insert a character before the location.
    Insert(char),
    /// Remove the character at the location.
    Delete,
    /// Replace the character at the location.
    Substitute(char),
    /// Swap the character at the location with the next one.
    Transpose,
}

impl Edit {
    /// Apply the edit at character index `location`.
    ///
    /// Out-of-range locations degrade rather than fail: insert and substitute
    /// append, delete and transpose leave the word unchanged. Transposing the
    /// last character is also a no-op.
    ///
    /// ```
    /// use spellbloom::misspell::Edit;
    ///
    /// assert_eq!(Edit::Insert('x').apply("cat", 1), "cxat");
    /// assert_eq!(Edit::Delete.apply("cat", 0), "at");
    /// assert_eq!(Edit::Substitute('b').apply("cat", 0), "bat");
    /// assert_eq!(Edit::Transpose.apply("cat", 1), "cta");
    /// assert_eq!(Edit::Transpose.apply("cat", 2), "cat");
    /// ```
    #[must_use]
    pub fn apply(&self, word: &str, location: usize) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        match *self {
            Edit::Insert(c) => chars.insert(location.min(len), c),
            Edit::Delete => {
                if location < len {
                    chars.remove(location);
                }
            }
            Edit::Substitute(c) => {
                if location < len {
                    chars[location] = c;
                } else {
                    chars.push(c);
                }
            }
            Edit::Transpose => {
                if location + 1 < len {
                    chars.swap(location, location + 1);
                }
            }
        }

        chars.into_iter().collect()
    }

    /// Draw an edit kind uniformly, with a uniformly random ASCII letter for
    /// insert and substitute.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => Edit::Insert(random_letter(rng)),
            1 => Edit::Delete,
            2 => Edit::Substitute(random_letter(rng)),
            _ => Edit::Transpose,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Insert(c) => write!(f, "insert '{}'", c),
            Edit::Delete => f.write_str("delete"),
            Edit::Substitute(c) => write!(f, "substitute '{}'", c),
            Edit::Transpose => f.write_str("transpose"),
        }
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())])
}

/// Generates misspellings that are guaranteed not to be known words.
pub struct Misspeller<'a, R> {
    known: &'a HashSet<String>,
    rng: R,
}

impl<'a, R: Rng> Misspeller<'a, R> {
    /// Misspeller over `known`, drawing randomness from `rng`.
    pub fn new(known: &'a HashSet<String>, rng: R) -> Self {
        Self { known, rng }
    }

    /// Apply random edits to `word` until it leaves the known set.
    ///
    /// Each round picks an edit and a location in the current candidate. A
    /// `word` that is already unknown is returned as is.
    pub fn misspell(&mut self, word: &str) -> String {
        let mut candidate = word.to_owned();
        let mut attempts = 0usize;

        while self.known.contains(&candidate) {
            let edit = Edit::random(&mut self.rng);
            let len = candidate.chars().count();
            let location = if len == 0 { 0 } else { self.rng.gen_range(0..len) };

            candidate = edit.apply(&candidate, location);
            attempts += 1;
            tracing::trace!(word, %edit, location, %candidate, attempts, "misspelling attempt");
        }

        candidate
    }

    /// Return the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R> fmt::Debug for Misspeller<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Misspeller")
            .field("known", &self.known.len())
            .finish_non_exhaustive()
    }
}
