use anyhow::Result;

use spam_classifiers::data_handling::{train_test_split, Corpus, Instance};
use spam_classifiers::feature_selection::informative::SelectKInformative;
use spam_classifiers::logging::init_logging;
use spam_classifiers::report::{log_evaluation, log_informative_words};
use spam_classifiers::stats::evaluate;
use spam_classifiers::{ClassifierConfig, NaiveBayesTrainer};

fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

fn main() -> Result<()> {
    init_logging();

    // Tiny synthetic inbox, tokenized on whitespace.
    let ham = [
        "are we still on for lunch today",
        "meeting notes from the team sync attached",
        "can you review the agenda before the meeting",
        "see you at lunch with the team",
        "the quarterly report is ready for review",
        "running late to the meeting start without me",
    ];
    let spam = [
        "win a free prize claim now",
        "free money click now limited offer",
        "cheap pills online order now",
        "claim your free gift card today",
        "limited offer win cash now",
    ];

    let mut instances: Vec<Instance> = ham.iter().map(|t| Instance::ham(tokens(t))).collect();
    instances.extend(spam.iter().map(|t| Instance::spam(tokens(t))));

    let corpus = Corpus::summarize(&instances);
    corpus.log_summary();

    let config = ClassifierConfig::default();
    let (train, test) = train_test_split(&instances, 0.7, 42)?;

    let mut trainer = NaiveBayesTrainer::new(corpus.vocabulary_size(), config.clone())?;
    trainer.add_instances(&train);
    let model = trainer.finish()?;

    log_evaluation(&evaluate(&model, &test));
    log_informative_words(&SelectKInformative::new(config.top_k).fit(&model));

    for text in ["free lunch now", "team meeting agenda"] {
        let scores = model.log_scores(&tokens(text));
        log::info!("{:?} -> {} (margin {:.2})", text, scores.label(), scores.margin());
    }

    Ok(())
}
