use std::collections::HashMap;

use crate::config::ClassifierConfig;
use crate::data_handling::{Instance, Label};
use crate::error::ClassifierError;
use crate::feature_selection::informative;
use crate::models::classifier_trait::{ClassScores, TextClassifier};
use crate::models::word_count::WordCount;

/// Sufficient statistics of a trained model.
///
/// `vocabulary_size` is supplied by the caller and only enters the smoothing
/// denominator, so it may differ from the number of words in `word_table`.
/// Each token total equals the sum of the matching per-word counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierState {
    vocabulary_size: usize,
    ham_message_count: u64,
    spam_message_count: u64,
    ham_token_total: u64,
    spam_token_total: u64,
    word_table: HashMap<String, WordCount>,
}

impl ClassifierState {
    fn new(vocabulary_size: usize) -> Self {
        ClassifierState {
            vocabulary_size,
            ham_message_count: 0,
            spam_message_count: 0,
            ham_token_total: 0,
            spam_token_total: 0,
            word_table: HashMap::new(),
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn message_count(&self, label: Label) -> u64 {
        match label {
            Label::Ham => self.ham_message_count,
            Label::Spam => self.spam_message_count,
        }
    }

    pub fn token_total(&self, label: Label) -> u64 {
        match label {
            Label::Ham => self.ham_token_total,
            Label::Spam => self.spam_token_total,
        }
    }

    /// Counters for `word`, zero for words never seen in training.
    pub fn word_count(&self, word: &str) -> WordCount {
        self.word_table.get(word).copied().unwrap_or_default()
    }

    /// Distinct words observed during training, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.word_table.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.word_table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_table.is_empty()
    }
}

/// Accumulates word statistics from labeled messages.
///
/// `finish` consumes the trainer, so a finished model can never pick up
/// further counts.
#[derive(Debug, Clone)]
pub struct NaiveBayesTrainer {
    config: ClassifierConfig,
    state: ClassifierState,
}

impl NaiveBayesTrainer {
    pub fn new(vocabulary_size: usize, config: ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        if vocabulary_size == 0 {
            return Err(ClassifierError::ZeroVocabulary);
        }
        // The smoothing mass must stay finite or every probability collapses to 0.
        if !(vocabulary_size as f64 * config.delta).is_finite() {
            return Err(ClassifierError::InvalidDelta(config.delta));
        }
        Ok(NaiveBayesTrainer {
            config,
            state: ClassifierState::new(vocabulary_size),
        })
    }

    /// Count one message. Every token counts, repeats included.
    pub fn add_instance(&mut self, instance: &Instance) {
        let state = &mut self.state;
        match instance.label {
            Label::Ham => state.ham_message_count += 1,
            Label::Spam => state.spam_message_count += 1,
        }

        for token in &instance.words {
            state
                .word_table
                .entry(token.clone())
                .or_default()
                .increment(instance.label);
            match instance.label {
                Label::Ham => state.ham_token_total += 1,
                Label::Spam => state.spam_token_total += 1,
            }
        }
    }

    pub fn add_instances<'a, I>(&mut self, instances: I)
    where
        I: IntoIterator<Item = &'a Instance>,
    {
        for instance in instances {
            self.add_instance(instance);
        }
    }

    pub fn finish(self) -> Result<NaiveBayesClassifier, ClassifierError> {
        let state = self.state;
        if state.ham_message_count + state.spam_message_count == 0 {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        log::debug!(
            "Trained naive Bayes on {} ham / {} spam messages ({} / {} tokens, {} distinct words)",
            state.ham_message_count,
            state.spam_message_count,
            state.ham_token_total,
            state.spam_token_total,
            state.word_table.len()
        );
        if state.vocabulary_size < state.word_table.len() {
            log::warn!(
                "Vocabulary size {} is smaller than the {} distinct words seen in training",
                state.vocabulary_size,
                state.word_table.len()
            );
        }

        Ok(NaiveBayesClassifier {
            config: self.config,
            state,
        })
    }
}

/// Two-class multinomial naive Bayes over word tokens with add-delta smoothing.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    config: ClassifierConfig,
    state: ClassifierState,
}

impl NaiveBayesClassifier {
    /// Train on a batch of labeled messages with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `instances` - Labeled, tokenized messages.
    /// * `vocabulary_size` - Number of possible word types, used for smoothing.
    pub fn train(instances: &[Instance], vocabulary_size: usize) -> Result<Self, ClassifierError> {
        Self::train_with_config(instances, vocabulary_size, ClassifierConfig::default())
    }

    pub fn train_with_config(
        instances: &[Instance],
        vocabulary_size: usize,
        config: ClassifierConfig,
    ) -> Result<Self, ClassifierError> {
        let mut trainer = NaiveBayesTrainer::new(vocabulary_size, config)?;
        trainer.add_instances(instances);
        trainer.finish()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    pub fn vocabulary_size(&self) -> usize {
        self.state.vocabulary_size()
    }

    pub fn message_count(&self, label: Label) -> u64 {
        self.state.message_count(label)
    }

    pub fn token_total(&self, label: Label) -> u64 {
        self.state.token_total(label)
    }

    pub fn word_count(&self, word: &str) -> WordCount {
        self.state.word_count(word)
    }

    pub fn known_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.state.words()
    }

    /// P(label): fraction of training messages carrying `label`.
    pub fn prior_probability(&self, label: Label) -> f64 {
        let total = (self.state.ham_message_count + self.state.spam_message_count) as f64;
        self.state.message_count(label) as f64 / total
    }

    /// P(word | label) with add-delta smoothing:
    ///
    /// ```text
    /// (count + delta) / (class_tokens + vocabulary_size * delta)
    /// ```
    ///
    /// Words absent from training count as zero and still get a positive probability.
    pub fn conditional_probability(&self, word: &str, label: Label) -> f64 {
        let delta = self.config.delta;
        let count = self.state.word_count(word).get(label) as f64;
        let total = self.state.token_total(label) as f64;
        (count + delta) / (total + self.state.vocabulary_size as f64 * delta)
    }

    /// Log prior plus the summed log conditional probability of every token, per class.
    pub fn log_scores<S: AsRef<str>>(&self, words: &[S]) -> ClassScores {
        let mut ham = self.prior_probability(Label::Ham).ln();
        let mut spam = self.prior_probability(Label::Spam).ln();

        for word in words {
            let word = word.as_ref();
            ham += self.conditional_probability(word, Label::Ham).ln();
            spam += self.conditional_probability(word, Label::Spam).ln();
        }

        log::trace!("{} tokens scored ham={} spam={}", words.len(), ham, spam);
        ClassScores::new(ham, spam)
    }

    /// Most likely label for a tokenized message. Ties go to ham.
    pub fn classify<S: AsRef<str>>(&self, words: &[S]) -> Label {
        self.log_scores(words).label()
    }

    /// The `k` training words whose presence most strongly favours one class.
    /// Returns every known word when `k` exceeds the vocabulary.
    pub fn top_informative_words(&self, k: usize) -> Vec<String> {
        informative::top_informative_words(self, k)
    }
}

impl TextClassifier for NaiveBayesClassifier {
    fn scores(&self, words: &[String]) -> ClassScores {
        self.log_scores(words)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
