pub mod classifier_trait;
pub mod naive_bayes;
pub mod word_count;

pub use classifier_trait::{ClassScores, TextClassifier};
pub use naive_bayes::{NaiveBayesClassifier, NaiveBayesTrainer};
pub use word_count::WordCount;
