// SPDX-FileCopyrightText: 2026 Creditchat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword gate restricting chat to Python and machine-learning topics.

use std::sync::LazyLock;

use regex::Regex;

/// Case-insensitive disjunction over the supported topic keywords.
static TOPIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)python|machine learning|ml|pandas|numpy|sklearn|scikit-learn|tensorflow|pytorch|keras|data science|neural network|deep learning|nlp|natural language processing|computer vision|regression|classification|clustering|algorithm",
    )
    .unwrap()
});

/// Pure substring-based topic gate. Runs before generation so rejected
/// messages never cost a credit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicFilter;

impl TopicFilter {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when the message mentions at least one supported topic.
    pub fn is_in_scope(&self, message: &str) -> bool {
        TOPIC_PATTERN.is_match(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_direct_python_question() {
        let filter = TopicFilter::new();
        assert!(filter.is_in_scope("How do I reverse a list in Python?"));
    }

    #[test]
    fn accepts_ml_keywords_case_insensitively() {
        let filter = TopicFilter::new();
        assert!(filter.is_in_scope("Explain NEURAL NETWORK backprop"));
        assert!(filter.is_in_scope("what is sklearn?"));
        assert!(filter.is_in_scope("TensorFlow vs PyTorch"));
    }

    #[test]
    fn accepts_substring_matches() {
        // "ml" matches inside larger words; the gate is a plain substring
        // disjunction, not a word-boundary match.
        let filter = TopicFilter::new();
        assert!(filter.is_in_scope("tell me about html"));
    }

    #[test]
    fn rejects_unrelated_questions() {
        let filter = TopicFilter::new();
        assert!(!filter.is_in_scope("What's the weather today?"));
        assert!(!filter.is_in_scope("Recommend a pizza place"));
    }

    #[test]
    fn rejects_empty_message() {
        assert!(!TopicFilter::new().is_in_scope(""));
    }
}
