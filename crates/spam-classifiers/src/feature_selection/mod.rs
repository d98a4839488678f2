//! Feature selection utilities.
//!
//! Ranks vocabulary words by how strongly their presence separates the two
//! classes of a trained classifier.
pub mod informative;
