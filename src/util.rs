//! Shared utility modules used across dictrie components.

pub mod levenshtein;
