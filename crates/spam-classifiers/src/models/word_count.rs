use serde::{Deserialize, Serialize};

use crate::data_handling::Label;

/// Occurrence counters for a single word, one per class.
///
/// Counters only ever grow: each increment bumps exactly one of them by one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    ham: u64,
    spam: u64,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_ham(&mut self) {
        self.ham += 1;
    }

    pub fn increment_spam(&mut self) {
        self.spam += 1;
    }

    pub fn increment(&mut self, label: Label) {
        match label {
            Label::Ham => self.increment_ham(),
            Label::Spam => self.increment_spam(),
        }
    }

    pub fn ham(&self) -> u64 {
        self.ham
    }

    pub fn spam(&self) -> u64 {
        self.spam
    }

    /// Counter for `label`.
    pub fn get(&self, label: Label) -> u64 {
        match label {
            Label::Ham => self.ham,
            Label::Spam => self.spam,
        }
    }
}
