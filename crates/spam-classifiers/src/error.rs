use std::error::Error;
use std::fmt;

/// Errors raised while configuring, training, or splitting data for a classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierError {
    EmptyTrainingSet,
    ZeroVocabulary,
    InvalidDelta(f64),
    UnknownLabel(String),
    InvalidSplit(f64), // Requested train fraction
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::EmptyTrainingSet => {
                write!(f, "Training requires at least one labeled instance")
            }
            ClassifierError::ZeroVocabulary => write!(f, "Vocabulary size must be greater than zero"),
            ClassifierError::InvalidDelta(delta) => write!(
                f,
                "Smoothing delta must be finite and strictly positive, got {}",
                delta
            ),
            ClassifierError::UnknownLabel(label) => {
                write!(f, "Unknown label: {}. Expected `ham` or `spam`", label)
            }
            ClassifierError::InvalidSplit(fraction) => write!(
                f,
                "Train fraction must lie strictly between 0 and 1, got {}",
                fraction
            ),
        }
    }
}

impl Error for ClassifierError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_value() {
        let msg = ClassifierError::InvalidDelta(-1.0).to_string();
        assert!(msg.contains("-1"));

        let msg = ClassifierError::UnknownLabel("eggs".to_string()).to_string();
        assert!(msg.contains("eggs"));
    }
}
