//! Query serving over a built dictionary.
//!
//! A [`LookupEngine`] first tries an exact match in the trie and only falls
//! back to fuzzy ranking over every stored word when the query is unknown.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dictionary::TrieDictionary;
use crate::error::Result;
use crate::spelling::suggest::{FuzzyMatcher, Suggestion, SuggestionConfig};

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupResult {
    /// The query is a dictionary word.
    Exact { word: String },
    /// The query is unknown; these words are close to it, best first.
    Similar { suggestions: Vec<Suggestion> },
    /// The query is unknown and nothing is close enough.
    NotFound,
}

impl LookupResult {
    /// Whether the query itself was found.
    pub fn is_exact(&self) -> bool {
        matches!(self, LookupResult::Exact { .. })
    }

    /// Suggestions carried by the result, empty unless `Similar`.
    pub fn suggestions(&self) -> &[Suggestion] {
        match self {
            LookupResult::Similar { suggestions } => suggestions,
            _ => &[],
        }
    }
}

/// Size information about the loaded dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Number of distinct words.
    pub word_count: usize,
    /// Number of trie nodes, root included.
    pub node_count: usize,
}

/// Answers exact and fuzzy queries against an owned dictionary.
///
/// The dictionary is read-only once the engine is built, so a shared
/// reference can serve queries from several threads.
///
/// # Examples
///
/// ```
/// use dictrie::dictionary::TrieDictionary;
/// use dictrie::spelling::{LookupEngine, LookupResult};
///
/// let dictionary = TrieDictionary::from_words(["cat", "car", "cart", "dog"]);
/// let engine = LookupEngine::new(dictionary);
///
/// assert!(engine.lookup("cat").is_exact());
/// let result = engine.lookup("dgo");
/// assert_eq!(result.suggestions()[0].word, "dog");
/// ```
#[derive(Debug, Clone)]
pub struct LookupEngine {
    dictionary: TrieDictionary,
    matcher: FuzzyMatcher,
}

impl LookupEngine {
    /// Create an engine with the default suggestion configuration.
    pub fn new(dictionary: TrieDictionary) -> Self {
        LookupEngine {
            dictionary,
            matcher: FuzzyMatcher::new(),
        }
    }

    /// Create an engine with a custom suggestion configuration.
    ///
    /// The configuration is used as given; prefer
    /// [`LookupEngine::try_with_config`] for configurations from user input.
    pub fn with_config(dictionary: TrieDictionary, config: SuggestionConfig) -> Self {
        LookupEngine {
            dictionary,
            matcher: FuzzyMatcher::with_config(config),
        }
    }

    /// Create an engine after validating the suggestion configuration.
    pub fn try_with_config(dictionary: TrieDictionary, config: SuggestionConfig) -> Result<Self> {
        Ok(LookupEngine {
            dictionary,
            matcher: FuzzyMatcher::try_with_config(config)?,
        })
    }

    /// Get the underlying dictionary.
    pub fn dictionary(&self) -> &TrieDictionary {
        &self.dictionary
    }

    /// Get the suggestion configuration.
    pub fn config(&self) -> &SuggestionConfig {
        self.matcher.config()
    }

    /// Replace the suggestion configuration.
    pub fn set_config(&mut self, config: SuggestionConfig) {
        self.matcher.set_config(config);
    }

    /// Exact hits for `query`: `[query]` when it is a word, otherwise empty.
    pub fn exact_matches(&self, query: &str) -> Vec<String> {
        self.dictionary.exact_matches(query)
    }

    /// Dictionary words close to `query` under the engine's configuration.
    pub fn similar_matches(&self, query: &str) -> Vec<Suggestion> {
        self.similar_matches_with(query, self.matcher.config())
    }

    /// Dictionary words close to `query` under an explicit configuration.
    ///
    /// `config` is not validated. A NaN threshold yields no suggestions.
    pub fn similar_matches_with(&self, query: &str, config: &SuggestionConfig) -> Vec<Suggestion> {
        if self.dictionary.is_empty() {
            return Vec::new();
        }

        let candidates = self.dictionary.all_words();
        FuzzyMatcher::with_config(config.clone()).find_similar(query, &candidates)
    }

    /// Exact match first, fuzzy suggestions otherwise.
    pub fn lookup(&self, query: &str) -> LookupResult {
        if let Some(word) = self.exact_matches(query).into_iter().next() {
            debug!("Exact match for {query:?}");
            return LookupResult::Exact { word };
        }

        let suggestions = self.similar_matches(query);
        if suggestions.is_empty() {
            debug!("No match or suggestion for {query:?}");
            LookupResult::NotFound
        } else {
            LookupResult::Similar { suggestions }
        }
    }

    /// Get statistics about the loaded dictionary.
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            word_count: self.dictionary.len(),
            node_count: self.dictionary.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DictrieError;

    fn sample_engine() -> LookupEngine {
        LookupEngine::new(TrieDictionary::from_words(["cat", "car", "cart", "dog"]))
    }

    #[test]
    fn test_exact_lookup() {
        let engine = sample_engine();

        assert_eq!(engine.exact_matches("cat"), vec!["cat".to_string()]);
        assert!(engine.exact_matches("ca").is_empty());
        assert_eq!(
            engine.lookup("dog"),
            LookupResult::Exact {
                word: "dog".to_string()
            }
        );
    }

    #[test]
    fn test_similar_lookup() {
        let engine = sample_engine();

        let result = engine.lookup("caat");
        assert!(!result.is_exact());

        let words: Vec<&str> = result.suggestions().iter().map(|s| s.word.as_str()).collect();
        assert!(words.contains(&"cat"));
        assert!(words.contains(&"cart"));
        assert!(!words.contains(&"car"));
    }

    #[test]
    fn test_not_found() {
        let engine = sample_engine();

        assert_eq!(engine.lookup("elephant"), LookupResult::NotFound);
        assert_eq!(engine.lookup(""), LookupResult::NotFound);
        assert!(LookupResult::NotFound.suggestions().is_empty());
    }

    #[test]
    fn test_empty_dictionary() {
        let engine = LookupEngine::new(TrieDictionary::new());

        assert!(engine.exact_matches("cat").is_empty());
        assert!(engine.similar_matches("cat").is_empty());
        assert_eq!(engine.lookup("cat"), LookupResult::NotFound);
    }

    #[test]
    fn test_explicit_config_overrides_engine_config() {
        let engine = sample_engine();
        let loose = SuggestionConfig::default().min_similarity_score(0.0);

        let suggestions = engine.similar_matches_with("caat", &loose);
        assert!(suggestions.iter().any(|s| s.word == "car"));
        assert!(engine.similar_matches("caat").iter().all(|s| s.word != "car"));
    }

    #[test]
    fn test_invalid_config() {
        let dictionary = TrieDictionary::from_words(["cat", "cart"]);
        let nan = SuggestionConfig::default().min_similarity_score(f64::NAN);

        let result = LookupEngine::try_with_config(dictionary.clone(), nan.clone());
        assert!(matches!(result, Err(DictrieError::Config(_))));

        let engine = LookupEngine::try_with_config(dictionary, SuggestionConfig::default()).unwrap();
        assert!(engine.similar_matches_with("caat", &nan).is_empty());
        assert_eq!(engine.similar_matches("caat").len(), 2);
    }

    #[test]
    fn test_set_config() {
        let mut engine = sample_engine();
        engine.set_config(SuggestionConfig::default().max_results(1));

        assert_eq!(engine.config().max_results, 1);
        assert_eq!(engine.similar_matches("caat").len(), 1);
    }

    #[test]
    fn test_stats() {
        let stats = sample_engine().stats();
        assert_eq!(stats.word_count, 4);
        // root, c, a, t, r, t, d, o, g
        assert_eq!(stats.node_count, 9);
    }

    #[test]
    fn test_result_serialization() {
        let exact = LookupResult::Exact {
            word: "cat".to_string(),
        };
        let json = serde_json::to_value(&exact).unwrap();
        assert_eq!(json["kind"], "exact");
        assert_eq!(json["word"], "cat");

        let json = serde_json::to_value(LookupResult::NotFound).unwrap();
        assert_eq!(json["kind"], "not_found");
    }
}
