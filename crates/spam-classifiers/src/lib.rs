//! spam-classifiers: naive Bayes spam/ham classification.
//!
//! Messages are supplied already tokenized. Training accumulates per-word,
//! per-class counts into an immutable model; inference combines class priors
//! with add-delta smoothed word likelihoods in log space. The crate also ranks
//! words by how strongly they separate the classes, evaluates a model on
//! held-out data, and formats both results for display.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod feature_selection;
pub mod logging;
pub mod models;
pub mod report;
pub mod stats;

pub use config::ClassifierConfig;
pub use data_handling::{Instance, Label};
pub use error::ClassifierError;
pub use models::{NaiveBayesClassifier, NaiveBayesTrainer, WordCount};
