//! Character trie holding the dictionary words.

use ahash::AHashMap;

/// A single node of the dictionary trie.
///
/// Each node exclusively owns its children. The path of characters from the
/// root to a node spells a prefix; `is_word` marks prefixes that are complete
/// dictionary words.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: AHashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Create a new node with no children that does not end a word.
    pub fn new() -> Self {
        TrieNode {
            children: AHashMap::new(),
            is_word: false,
        }
    }

    /// Whether the path to this node spells a complete word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Get the child reached by `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterate over the direct children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }

    fn collect_words(&self, path: &mut String, words: &mut Vec<String>) {
        if self.is_word {
            words.push(path.clone());
        }

        for (ch, child) in &self.children {
            path.push(*ch);
            child.collect_words(path, words);
            path.pop();
        }
    }
}

/// A prefix tree over characters that owns every inserted word.
///
/// The trie only grows: words can be inserted but never removed, so once a
/// word is present it stays present. After construction it is typically shared
/// read-only between query handlers.
///
/// # Examples
///
/// ```
/// use dictrie::dictionary::TrieDictionary;
///
/// let mut dict = TrieDictionary::new();
/// dict.insert("cart");
/// dict.insert("cat");
///
/// assert!(dict.contains_exact("cat"));
/// assert!(!dict.contains_exact("ca"));
/// assert_eq!(dict.exact_matches("cart"), vec!["cart".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrieDictionary {
    root: TrieNode,
    word_count: usize,
}

impl TrieDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        TrieDictionary {
            root: TrieNode::new(),
            word_count: 0,
        }
    }

    /// Insert a word, creating any missing nodes along its path.
    ///
    /// Inserting the empty string marks the root as a word. Inserting a word
    /// that is already present has no effect.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if !node.is_word {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// Check whether `word` was inserted as a complete word.
    ///
    /// A path that only exists as a prefix of longer words does not match.
    pub fn contains_exact(&self, word: &str) -> bool {
        self.prefix_node(word).is_some_and(TrieNode::is_word)
    }

    /// Return the exact match for `word`: either `[word]` or nothing.
    pub fn exact_matches(&self, word: &str) -> Vec<String> {
        if self.contains_exact(word) {
            vec![word.to_string()]
        } else {
            Vec::new()
        }
    }

    /// Collect every word in the dictionary.
    ///
    /// The order is a depth-first walk with children visited in unspecified
    /// order; callers must not rely on it. Each call returns a fresh list.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        self.root.collect_words(&mut String::new(), &mut words);
        words
    }

    /// Collect every word that starts with `prefix` (including `prefix` itself
    /// when it is a word).
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.prefix_node(prefix) {
            node.collect_words(&mut prefix.to_string(), &mut words);
        }
        words
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Get the total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Get the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walk down the path spelled by `prefix`.
    fn prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }
}

impl<S: AsRef<str>> Extend<S> for TrieDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TrieDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = TrieDictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_dictionary_basic_operations() {
        let mut dict = TrieDictionary::new();

        assert!(dict.is_empty());
        assert!(!dict.contains_exact("hello"));
        assert_eq!(dict.len(), 0);

        dict.insert("hello");
        assert!(dict.contains_exact("hello"));
        assert_eq!(dict.len(), 1);

        dict.insert("help");
        assert!(dict.contains_exact("help"));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_prefix_is_not_a_match() {
        let dict: TrieDictionary = ["cart", "carton"].into_iter().collect();

        assert!(!dict.contains_exact("c"));
        assert!(!dict.contains_exact("car"));
        assert!(dict.contains_exact("cart"));
        assert!(!dict.contains_exact("carto"));
        assert!(dict.contains_exact("carton"));
        assert!(!dict.contains_exact("cartons"));
        assert!(dict.exact_matches("car").is_empty());
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let mut dict = TrieDictionary::new();
        dict.insert("dog");
        let nodes = dict.node_count();

        dict.insert("dog");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.node_count(), nodes);
        assert_eq!(dict.all_words(), vec!["dog".to_string()]);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut dict = TrieDictionary::new();
        assert!(!dict.contains_exact(""));

        dict.insert("");
        assert!(dict.contains_exact(""));
        assert!(dict.root().is_word());
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.node_count(), 1);
        assert_eq!(dict.exact_matches(""), vec![String::new()]);
    }

    #[test]
    fn test_all_words() {
        let dict: TrieDictionary = ["cat", "car", "cart", "dog"].into_iter().collect();

        assert_eq!(
            sorted(dict.all_words()),
            vec!["car", "cart", "cat", "dog"]
        );
        // Restartable: a second traversal yields the same set.
        assert_eq!(sorted(dict.all_words()), sorted(dict.all_words()));
        assert!(TrieDictionary::new().all_words().is_empty());
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let dict: TrieDictionary = ["cat", "car", "cart"].into_iter().collect();
        // root, c, a, t, r, t
        assert_eq!(dict.node_count(), 6);

        let a = dict.root().child('c').and_then(|c| c.child('a')).unwrap();
        let mut next: Vec<char> = a.children().map(|(ch, _)| ch).collect();
        next.sort();
        assert_eq!(next, vec!['r', 't']);
        assert!(!a.is_word());
        assert!(a.child('t').unwrap().is_word());
    }

    #[test]
    fn test_words_with_prefix() {
        let dict: TrieDictionary = ["search", "searching", "server", "query"]
            .into_iter()
            .collect();

        assert_eq!(
            sorted(dict.words_with_prefix("sear")),
            vec!["search", "searching"]
        );
        assert_eq!(dict.words_with_prefix("se").len(), 3);
        assert_eq!(dict.words_with_prefix("").len(), 4);
        assert!(dict.words_with_prefix("x").is_empty());
    }

    #[test]
    fn test_non_ascii_words() {
        let dict: TrieDictionary = ["café", "naïve"].into_iter().collect();

        assert!(dict.contains_exact("café"));
        assert!(!dict.contains_exact("cafe"));
        assert_eq!(sorted(dict.all_words()), vec!["café", "naïve"]);
    }

    #[test]
    fn test_extend() {
        let mut dict = TrieDictionary::new();
        dict.extend(vec!["a".to_string(), "b".to_string()]);
        dict.extend(["a", "c"]);
        assert_eq!(dict.len(), 3);
    }
}
