//! Word storage for dictionary lookups.
//!
//! This module holds the character trie that owns every dictionary word and
//! the helpers that build it from newline-delimited word lists.

pub mod loader;
pub mod trie;

// Re-export commonly used types
pub use loader::*;
pub use trie::*;
