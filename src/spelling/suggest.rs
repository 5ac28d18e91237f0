//! Ranked fuzzy suggestions.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{DictrieError, Result};
use crate::util::levenshtein::DistanceMatcher;

/// A dictionary word proposed for a query, with its closeness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Similarity score, 1.0 for identical strings down to 0.0.
    pub score: f64,
    /// Damerau-Levenshtein distance from the query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64, distance: usize) -> Self {
        Suggestion {
            word,
            score,
            distance,
        }
    }
}

/// Configuration for suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Candidates whose length differs from the query by more than this are
    /// skipped before computing distances. Never lower than `max_typos` in
    /// effect, since a smaller bound would drop words within the edit budget.
    pub max_length_diff: usize,
    /// Maximum edit distance a suggestion may have.
    pub max_typos: usize,
    /// Suggestions must score strictly above this (0.0 to 1.0).
    pub min_similarity_score: f64,
    /// Maximum number of suggestions to return.
    pub max_results: usize,
    /// Score candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        SuggestionConfig {
            max_length_diff: 2,
            max_typos: 2,
            min_similarity_score: 0.5,
            max_results: 10,
            parallel: false,
        }
    }
}

impl SuggestionConfig {
    /// Set the length pre-filter bound.
    pub fn max_length_diff(mut self, max_length_diff: usize) -> Self {
        self.max_length_diff = max_length_diff;
        self
    }

    /// Set the maximum edit distance.
    pub fn max_typos(mut self, max_typos: usize) -> Self {
        self.max_typos = max_typos;
        self
    }

    /// Set the minimum similarity score (exclusive).
    pub fn min_similarity_score(mut self, min_similarity_score: f64) -> Self {
        self.min_similarity_score = min_similarity_score;
        self
    }

    /// Set the maximum number of results.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Enable or disable parallel scoring.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Length bound actually applied by the pre-filter.
    pub fn effective_length_diff(&self) -> usize {
        self.max_length_diff.max(self.max_typos)
    }

    /// Check that every field is within its documented range.
    pub fn validate(&self) -> Result<()> {
        if self.max_typos == 0 {
            return Err(DictrieError::config("max_typos must be at least 1"));
        }
        if self.max_results == 0 {
            return Err(DictrieError::config("max_results must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.min_similarity_score) {
            return Err(DictrieError::config(format!(
                "min_similarity_score must be within [0, 1], got {}",
                self.min_similarity_score
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SuggestionConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Filter stage that dropped a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Length,
    Typos,
    Score,
}

/// How many candidates each filter stage dropped during one ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FilterCounts {
    length: usize,
    typos: usize,
    score: usize,
    /// Before truncation.
    accepted: usize,
}

/// Ranks candidate words by similarity to a query.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: SuggestionConfig,
}

impl FuzzyMatcher {
    /// Create a matcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a custom configuration.
    ///
    /// The configuration is not validated; see [`FuzzyMatcher::try_with_config`].
    /// A NaN `min_similarity_score` rejects every candidate.
    pub fn with_config(config: SuggestionConfig) -> Self {
        FuzzyMatcher { config }
    }

    /// Create a matcher after validating the configuration.
    pub fn try_with_config(config: SuggestionConfig) -> Result<Self> {
        config.validate()?;
        if config.max_length_diff < config.max_typos {
            warn!(
                "max_length_diff {} is below max_typos {}, using {}",
                config.max_length_diff,
                config.max_typos,
                config.effective_length_diff()
            );
        }
        Ok(Self::with_config(config))
    }

    /// Get the current configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Replace the configuration without validating it.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.config = config;
    }

    /// Rank `candidates` against `query`.
    ///
    /// Candidates within `max_typos` edits and scoring above
    /// `min_similarity_score` are returned, best first, at most `max_results`
    /// of them. Equal scores keep the order of `candidates`.
    pub fn find_similar<S>(&self, query: &str, candidates: &[S]) -> Vec<Suggestion>
    where
        S: AsRef<str> + Sync,
    {
        let (suggestions, counts) = self.rank(query, candidates);
        debug!(
            "{:?}: {} candidates, dropped {} by length, {} by typos, {} by score, {} accepted",
            query,
            candidates.len(),
            counts.length,
            counts.typos,
            counts.score,
            counts.accepted
        );
        suggestions
    }

    fn rank<S>(&self, query: &str, candidates: &[S]) -> (Vec<Suggestion>, FilterCounts)
    where
        S: AsRef<str> + Sync,
    {
        let matcher = DistanceMatcher::new(query);

        let outcomes: Vec<std::result::Result<Suggestion, Rejection>> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|candidate| self.evaluate(&matcher, candidate.as_ref()))
                .collect()
        } else {
            candidates
                .iter()
                .map(|candidate| self.evaluate(&matcher, candidate.as_ref()))
                .collect()
        };

        let mut counts = FilterCounts::default();
        let mut suggestions = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(suggestion) => suggestions.push(suggestion),
                Err(Rejection::Length) => counts.length += 1,
                Err(Rejection::Typos) => counts.typos += 1,
                Err(Rejection::Score) => counts.score += 1,
            }
        }
        counts.accepted = suggestions.len();

        // Stable: ties keep enumeration order.
        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(self.config.max_results);
        (suggestions, counts)
    }

    /// Run one candidate through the filters.
    fn evaluate(
        &self,
        matcher: &DistanceMatcher,
        candidate: &str,
    ) -> std::result::Result<Suggestion, Rejection> {
        let candidate_len = candidate.chars().count();
        if matcher.query_len().abs_diff(candidate_len) > self.config.effective_length_diff() {
            return Err(Rejection::Length);
        }

        let (distance, score) = matcher.score(candidate);
        if distance > self.config.max_typos {
            return Err(Rejection::Typos);
        }
        // Strictly above; a NaN threshold compares as unordered and rejects.
        if score.partial_cmp(&self.config.min_similarity_score) != Some(Ordering::Greater) {
            return Err(Rejection::Score);
        }

        Ok(Suggestion::new(candidate.to_string(), score, distance))
    }
}
