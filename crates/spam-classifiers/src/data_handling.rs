//! Labeled message types and helpers for summarizing and splitting datasets.
//!
//! Messages arrive already tokenized: an `Instance` is a class label plus the
//! ordered word tokens of one message. Repeated tokens are kept, each one
//! counts during training.
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Ham,
    Spam,
}

impl Label {
    pub const ALL: [Label; 2] = [Label::Ham, Label::Spam];
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Ham => write!(f, "ham"),
            Label::Spam => write!(f, "spam"),
        }
    }
}

impl FromStr for Label {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ham" => Ok(Label::Ham),
            "spam" => Ok(Label::Spam),
            _ => Err(ClassifierError::UnknownLabel(s.to_string())),
        }
    }
}

/// One labeled training or evaluation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub label: Label,
    pub words: Vec<String>,
}

impl Instance {
    pub fn new<I, S>(label: Label, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Instance {
            label,
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ham<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Instance::new(Label::Ham, words)
    }

    pub fn spam<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Instance::new(Label::Spam, words)
    }
}

/// Per-class counts over a set of instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pub ham_instances: usize,
    pub spam_instances: usize,
    pub ham_tokens: usize,
    pub spam_tokens: usize,
    pub distinct_words: usize,
}

impl Corpus {
    pub fn summarize(instances: &[Instance]) -> Self {
        let mut corpus = Corpus::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for inst in instances {
            match inst.label {
                Label::Ham => {
                    corpus.ham_instances += 1;
                    corpus.ham_tokens += inst.words.len();
                }
                Label::Spam => {
                    corpus.spam_instances += 1;
                    corpus.spam_tokens += inst.words.len();
                }
            }
            seen.extend(inst.words.iter().map(String::as_str));
        }

        corpus.distinct_words = seen.len();
        corpus
    }

    /// Number of distinct word types, usable as the smoothing vocabulary size.
    pub fn vocabulary_size(&self) -> usize {
        self.distinct_words
    }

    pub fn total_instances(&self) -> usize {
        self.ham_instances + self.spam_instances
    }

    pub fn log_summary(&self) {
        log::info!("----- Input Data Summary -----");
        log::info!(
            "{} ham messages ({} tokens) and {} spam messages ({} tokens)",
            self.ham_instances,
            self.ham_tokens,
            self.spam_instances,
            self.spam_tokens
        );
        log::info!("{} distinct words", self.distinct_words);
    }
}

/// Shuffle a copy of `instances` with a seeded RNG and split it into a
/// training set holding `train_fraction` of the data and a test set with the rest.
pub fn train_test_split(
    instances: &[Instance],
    train_fraction: f64,
    seed: u64,
) -> Result<(Vec<Instance>, Vec<Instance>), ClassifierError> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(ClassifierError::InvalidSplit(train_fraction));
    }

    let mut shuffled = instances.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let n_train = (shuffled.len() as f64 * train_fraction).round() as usize;
    let test = shuffled.split_off(n_train.min(shuffled.len()));

    Ok((shuffled, test))
}
