//! Informative-word ranking for a trained naive Bayes model.
//!
//! A word's informativeness is the symmetric likelihood ratio
//!
//! ```text
//! ratio = P(w | ham) / P(w | spam)
//! score = max(ratio, 1 / ratio)
//! ```
//!
//! A word equally likely under both classes scores about 1; a word tied to
//! one class scores high.

use std::cmp::Ordering;

use crate::data_handling::Label;
use crate::models::naive_bayes::NaiveBayesClassifier;

/// A vocabulary word with its informativeness score.
#[derive(Debug, Clone, PartialEq)]
pub struct WordScore {
    pub word: String,
    pub score: f64,
    /// Class the word points to. Ham when the word is equally likely under both.
    pub leaning: Label,
}

/// Informativeness of `word` under `classifier`, and the class it favours.
pub fn informativeness(classifier: &NaiveBayesClassifier, word: &str) -> (f64, Label) {
    let p_ham = classifier.conditional_probability(word, Label::Ham);
    let p_spam = classifier.conditional_probability(word, Label::Spam);
    // Larger over smaller, so mirrored counts give bit-identical scores.
    if p_ham >= p_spam {
        (p_ham / p_spam, Label::Ham)
    } else {
        (p_spam / p_ham, Label::Spam)
    }
}

/// Score every word seen in training and sort by descending informativeness.
///
/// Equal scores are ordered lexicographically by word so the ranking does not
/// depend on hash map iteration order.
pub fn rank_informative_words(classifier: &NaiveBayesClassifier) -> Vec<WordScore> {
    let mut ranked: Vec<WordScore> = classifier
        .known_words()
        .map(|word| {
            let (score, leaning) = informativeness(classifier, word);
            WordScore {
                word: word.to_string(),
                score,
                leaning,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.cmp(&b.word))
    });
    ranked
}

/// The `k` most informative words, or all of them when fewer than `k` are known.
pub fn top_informative_words(classifier: &NaiveBayesClassifier, k: usize) -> Vec<String> {
    rank_informative_words(classifier)
        .into_iter()
        .take(k)
        .map(|ws| ws.word)
        .collect()
}

/// Selects the k most informative words of a trained classifier.
pub struct SelectKInformative {
    /// The number of top words to select.
    k: usize,
}

impl SelectKInformative {
    pub fn new(k: usize) -> Self {
        SelectKInformative { k }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Ranked, scored top-k words.
    pub fn fit(&self, classifier: &NaiveBayesClassifier) -> Vec<WordScore> {
        let mut ranked = rank_informative_words(classifier);
        ranked.truncate(self.k);
        ranked
    }
}
