//! Building a [`TrieDictionary`] from newline-delimited word lists.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::dictionary::trie::TrieDictionary;
use crate::error::Result;

/// Normalize a raw word or query the way the dictionary stores words:
/// surrounding whitespace removed and lowercased.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl TrieDictionary {
    /// Build a dictionary from already-normalized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Load a dictionary from any buffered reader with one word per line.
    ///
    /// Each line is trimmed and lowercased before insertion. Blank lines are
    /// skipped.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = TrieDictionary::new();
        let mut lines = 0usize;
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            lines += 1;

            let word = normalize_word(&line);
            if word.is_empty() {
                skipped += 1;
                continue;
            }
            dictionary.insert(&word);
        }

        debug!("Read {lines} lines, skipped {skipped} blank lines");
        Ok(dictionary)
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dictionary = Self::load_from_reader(BufReader::new(file))?;

        if dictionary.is_empty() {
            warn!("No words found in {}", path.display());
        }
        info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }
}
