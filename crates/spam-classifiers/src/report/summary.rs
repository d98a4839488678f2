use std::fmt::Write;

use crate::feature_selection::informative::WordScore;
use crate::stats::ConfusionMatrix;

/// One line per word: rank, word, score and the class it points to.
pub fn format_informative_words(ranked: &[WordScore]) -> String {
    let width = ranked.iter().map(|ws| ws.word.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, ws) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {:<width$}  {:>12.3}  {}",
            i + 1,
            ws.word,
            ws.score,
            ws.leaning,
            width = width
        );
    }
    out
}

pub fn log_informative_words(ranked: &[WordScore]) {
    log::info!("----- Most Informative Words -----");
    for line in format_informative_words(ranked).lines() {
        log::info!("{}", line);
    }
}

pub fn format_evaluation(matrix: &ConfusionMatrix) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "messages:  {}", matrix.total());
    let _ = writeln!(out, "accuracy:  {:.4}", matrix.accuracy());
    let _ = writeln!(out, "precision: {:.4}", matrix.precision());
    let _ = writeln!(out, "recall:    {:.4}", matrix.recall());
    let _ = writeln!(out, "f1:        {:.4}", matrix.f1());
    let _ = writeln!(
        out,
        "spam flagged {} / missed {}, ham kept {} / flagged {}",
        matrix.true_spam, matrix.false_ham, matrix.true_ham, matrix.false_spam
    );
    out
}

pub fn log_evaluation(matrix: &ConfusionMatrix) {
    log::info!("----- Evaluation -----");
    for line in format_evaluation(matrix).lines() {
        log::info!("{}", line);
    }
}
