use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Additive (Lidstone) smoothing constant used when no configuration is given.
pub const DEFAULT_DELTA: f64 = 0.00001;

/// Number of informative words reported by default.
pub const DEFAULT_TOP_K: usize = 5;

/// Central configuration for the naive Bayes classifier.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Pseudo-count added to every word count and, scaled by the vocabulary
    /// size, to every class token total.
    pub delta: f64,

    /// How many words the informative-word report shows.
    pub top_k: usize,
}

impl ClassifierConfig {
    pub fn new(delta: f64, top_k: usize) -> Self {
        Self { delta, top_k }
    }

    /// Check that the smoothing constant keeps every probability well defined.
    /// Subnormal deltas are rejected since they can round a probability to zero.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if !self.delta.is_finite() || self.delta < f64::MIN_POSITIVE {
            return Err(ClassifierError::InvalidDelta(self.delta));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ClassifierConfig =
            serde_json::from_str(json).context("Failed to parse classifier config JSON")?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Load a classifier configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClassifierConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    ClassifierConfig::from_json_str(&contents)
        .with_context(|| format!("Invalid classifier config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_lidstone_delta() {
        let cfg = ClassifierConfig::default();
        assert_eq!(cfg.delta, 0.00001);
        assert_eq!(cfg.top_k, 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_delta() {
        assert_eq!(
            ClassifierConfig::new(0.0, 5).validate(),
            Err(ClassifierError::InvalidDelta(0.0))
        );
        assert!(ClassifierConfig::new(f64::NAN, 5).validate().is_err());
        assert!(ClassifierConfig::new(f64::INFINITY, 5).validate().is_err());
        assert_eq!(
            ClassifierConfig::new(1e-310, 5).validate(),
            Err(ClassifierError::InvalidDelta(1e-310))
        );
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg = ClassifierConfig::from_json_str(r#"{ "top_k": 10 }"#).unwrap();
        assert_eq!(cfg.top_k, 10);
        assert_eq!(cfg.delta, DEFAULT_DELTA);
    }

    #[test]
    fn invalid_json_delta_is_an_error() {
        assert!(ClassifierConfig::from_json_str(r#"{ "delta": -0.5 }"#).is_err());
    }
}
