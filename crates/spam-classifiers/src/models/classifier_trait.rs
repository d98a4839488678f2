use crate::data_handling::Label;

/// Natural-log scores of one message under each class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub ham: f64,
    pub spam: f64,
}

impl ClassScores {
    pub fn new(ham: f64, spam: f64) -> Self {
        Self { ham, spam }
    }

    /// Higher-scoring label. Spam has to win strictly, ties go to ham.
    pub fn label(&self) -> Label {
        if self.spam > self.ham {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// `spam - ham`; positive values lean towards spam.
    pub fn margin(&self) -> f64 {
        self.spam - self.ham
    }
}

/// Contract shared by trained message classifiers, used by the evaluation
/// helpers so they do not depend on a concrete model.
pub trait TextClassifier {
    /// Score a tokenized message under both classes.
    fn scores(&self, words: &[String]) -> ClassScores;

    /// Predict the label of a tokenized message.
    fn predict(&self, words: &[String]) -> Label {
        self.scores(words).label()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
