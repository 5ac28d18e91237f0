//! Edit distance and similarity scoring.
//!
//! Distances are computed over `char`s, so a multi-byte character counts as a
//! single position. Transpositions of two adjacent characters count as one
//! edit (optimal string alignment).

use std::cmp::min;

/// Calculate the Damerau-Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions,
/// substitutions or adjacent transpositions required to change one word into
/// the other.
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    damerau_levenshtein_chars(&s1_chars, &s2_chars)
}

/// Damerau-Levenshtein distance over pre-split character slices.
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_chars(s1: &[char], s2: &[char]) -> usize {
    let len1 = s1.len();
    let len2 = s2.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    // Initialize first row and column
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = if s1[i - 1] == s2[j - 1] { 0 } else { 1 };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + 1, // deletion
                    matrix[i][j - 1] + 1, // insertion
                ),
                matrix[i - 1][j - 1] + cost, // substitution
            );

            if i > 1 && j > 1 && s1[i - 1] == s2[j - 2] && s1[i - 2] == s2[j - 1] {
                matrix[i][j] = min(
                    matrix[i][j],
                    matrix[i - 2][j - 2] + 1, // transposition
                );
            }
        }
    }

    matrix[len1][len2]
}

/// Turn an edit distance into a similarity score in `[0, 1]`.
///
/// The score is `(max_len - distance) / max_len` where `max_len` is the
/// character length of the longer string. Two empty strings score `1.0`. The
/// result is clamped so a distance larger than `max_len` still yields `0.0`.
pub fn similarity_score(len1: usize, len2: usize, distance: usize) -> f64 {
    let max_len = len1.max(len2);
    if max_len == 0 {
        return 1.0;
    }

    max_len.saturating_sub(distance) as f64 / max_len as f64
}

/// Similarity of two strings, 1.0 meaning identical.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let distance = damerau_levenshtein_chars(&s1_chars, &s2_chars);

    similarity_score(s1_chars.len(), s2_chars.len(), distance)
}

/// Computes distances from one fixed query to many candidates.
///
/// The query is split into characters once and reused for every candidate.
#[derive(Debug, Clone)]
pub struct DistanceMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl DistanceMatcher {
    /// Create a new matcher for the given query string.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();

        DistanceMatcher { query, query_chars }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Length of the query in characters.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Calculate the distance to a candidate string.
    pub fn distance(&self, candidate: &str) -> usize {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        damerau_levenshtein_chars(&self.query_chars, &candidate_chars)
    }

    /// Calculate distance and similarity score to a candidate in one pass.
    pub fn score(&self, candidate: &str) -> (usize, f64) {
        let candidate_chars: Vec<char> = candidate.chars().collect();
        let distance = damerau_levenshtein_chars(&self.query_chars, &candidate_chars);
        let score = similarity_score(self.query_chars.len(), candidate_chars.len(), distance);
        (distance, score)
    }
}
