use colored::*;
use std::fs;
use std::path::Path;

/// Default pair list compiled into the binary, used when no dictionary
/// file is configured.
const BUILTIN_CSV: &str = include_str!("../../data/spelling_dictionary.csv");

/// One British/American spelling association. Both sides are lower-case
/// single-word tokens; the pair is matched as a unit and never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingPair {
    pub british: String,
    pub american: String,
}

/// Ordered list of spelling pairs.
///
/// Order is exactly the order of the source rows; the analyzer scans pairs
/// in this order and stops at the first hit, so a dictionary that lists the
/// same token twice resolves to the earlier row.
///
/// Loaded once at startup and read-only afterwards, so it can be shared
/// freely across threads without locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    pairs: Vec<SpellingPair>,
}

impl Dictionary {
    /// Load pairs from a CSV file: header row skipped, first two columns of
    /// every other row become a pair, rows with fewer than two columns are
    /// skipped. Rows where either of the first two columns is blank (e.g.
    /// `colour,`) are skipped as well: a pair with an empty side can never
    /// match a token and would only pad the pair count.
    ///
    /// A file that cannot be read logs a diagnostic and yields an empty
    /// dictionary; the analyzer then degrades to reporting zero matches
    /// instead of the whole run failing. Callers that need a hard failure
    /// should check [`Dictionary::is_empty`] after loading.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse_csv(&contents),
            Err(e) => {
                eprintln!(
                    "{} failed to load spelling dictionary {}: {}",
                    "warning:".yellow().bold(),
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// The embedded default dictionary (30 classic colour/color pairs).
    pub fn builtin() -> Self {
        Self::parse_csv(BUILTIN_CSV)
    }

    fn parse_csv(contents: &str) -> Self {
        let mut pairs = Vec::new();

        // First row is the header.
        for line in contents.lines().skip(1) {
            let mut columns = line.split(',');
            let british = columns.next().map(str::trim).unwrap_or("");
            let american = columns.next().map(str::trim).unwrap_or("");

            if british.is_empty() || american.is_empty() {
                continue;
            }

            pairs.push(SpellingPair {
                british: british.to_lowercase(),
                american: american.to_lowercase(),
            });
        }

        Self { pairs }
    }

    pub fn from_pairs(pairs: Vec<SpellingPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[SpellingPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
