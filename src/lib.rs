//! # dictrie
//!
//! A dictionary lookup library built on a character trie.
//!
//! ## Features
//!
//! - Exact word lookup that never confuses a stored prefix with a word
//! - Damerau-Levenshtein suggestions ranked by normalized similarity
//! - Optional parallel candidate scoring
//! - Word-list loading and a small command-line front end

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod spelling;
pub mod util;

pub mod prelude {
    pub use crate::dictionary::{TrieDictionary, TrieNode, normalize_word};
    pub use crate::error::{DictrieError, Result};
    pub use crate::spelling::{
        DictionaryStats, FuzzyMatcher, LookupEngine, LookupResult, Suggestion, SuggestionConfig,
    };
    pub use crate::util::levenshtein::{damerau_levenshtein_distance, similarity_score};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
