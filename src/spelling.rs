//! Exact lookup and "Did you mean?" suggestions over a [`TrieDictionary`].
//!
//! [`suggest`] ranks dictionary words by Damerau-Levenshtein similarity to a
//! query; [`lookup`] ties the exact and fuzzy paths together the way a caller
//! serving queries uses them.
//!
//! [`TrieDictionary`]: crate::dictionary::TrieDictionary

pub mod lookup;
pub mod suggest;

// Re-export commonly used types
pub use lookup::*;
pub use suggest::*;
