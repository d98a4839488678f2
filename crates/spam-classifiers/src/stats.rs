use serde::{Deserialize, Serialize};

use crate::data_handling::{Instance, Label};
use crate::models::classifier_trait::TextClassifier;

/// Prediction outcomes on a labeled set, with spam as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_spam: usize,
    pub false_spam: usize,
    pub true_ham: usize,
    pub false_ham: usize,
}

impl ConfusionMatrix {
    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Spam, Label::Spam) => self.true_spam += 1,
            (Label::Ham, Label::Spam) => self.false_spam += 1,
            (Label::Ham, Label::Ham) => self.true_ham += 1,
            (Label::Spam, Label::Ham) => self.false_ham += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_spam + self.false_spam + self.true_ham + self.false_ham
    }

    pub fn correct(&self) -> usize {
        self.true_spam + self.true_ham
    }

    /// Fraction of correct predictions, 0 on an empty matrix.
    pub fn accuracy(&self) -> f64 {
        ratio(self.correct(), self.total())
    }

    /// Of the messages flagged as spam, the fraction that were spam.
    pub fn precision(&self) -> f64 {
        ratio(self.true_spam, self.true_spam + self.false_spam)
    }

    /// Of the spam messages, the fraction flagged as spam.
    pub fn recall(&self) -> f64 {
        ratio(self.true_spam, self.true_spam + self.false_ham)
    }

    pub fn f1(&self) -> f64 {
        let (p, r) = (self.precision(), self.recall());
        if p + r == 0.0 {
            0.0
        } else {
            2.0 * p * r / (p + r)
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Classify every instance and tally the outcomes against its label.
pub fn evaluate<C>(classifier: &C, instances: &[Instance]) -> ConfusionMatrix
where
    C: TextClassifier + ?Sized,
{
    let mut matrix = ConfusionMatrix::default();
    for inst in instances {
        matrix.record(inst.label, classifier.predict(&inst.words));
    }
    log::debug!(
        "Evaluated {} on {} messages: accuracy {:.4}",
        classifier.name(),
        matrix.total(),
        matrix.accuracy()
    );
    matrix
}
