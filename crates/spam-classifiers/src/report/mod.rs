//! Presentation helpers for trained models.
//!
//! Ranking and evaluation live in `feature_selection` and `stats`; this module
//! only turns their results into text, either returned as a `String` or sent
//! to the `log` facade.
pub mod summary;

pub use summary::{format_evaluation, format_informative_words, log_evaluation, log_informative_words};
