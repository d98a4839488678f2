//! Integration tests for configuration loading and dataset helpers.

use std::fs;

use spam_classifiers::config::{load_config, ClassifierConfig, DEFAULT_DELTA, DEFAULT_TOP_K};
use spam_classifiers::data_handling::{train_test_split, Corpus, Instance, Label};
use spam_classifiers::ClassifierError;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn config_serializes_to_json() {
    let cfg = ClassifierConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("delta"));
    assert!(json.contains("top_k"));
}

#[test]
fn config_round_trips_json() {
    let cfg = ClassifierConfig::new(0.5, 12);
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2 = ClassifierConfig::from_json_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn load_config_reads_file() {
    let path = std::env::temp_dir().join(format!("spam_classifiers_cfg_{}.json", std::process::id()));
    fs::write(&path, r#"{ "delta": 0.01 }"#).unwrap();

    let cfg = load_config(&path).unwrap();
    assert!((cfg.delta - 0.01).abs() < 1e-12);
    assert_eq!(cfg.top_k, DEFAULT_TOP_K);

    fs::remove_file(&path).unwrap();
}

#[test]
fn load_config_missing_file_errors() {
    let err = load_config("/definitely/not/here/config.json").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read config file"));
}

#[test]
fn default_delta_constant() {
    assert_eq!(DEFAULT_DELTA, 0.00001);
}

// ---------------------------------------------------------------------------
// Labels and instances
// ---------------------------------------------------------------------------

#[test]
fn labels_serialize_lowercase() {
    let inst = Instance::spam(["free", "free"]);
    let json = serde_json::to_string(&inst).unwrap();
    assert!(json.contains("\"spam\""));
    let back: Instance = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inst);
}

#[test]
fn unknown_label_is_rejected() {
    let result: Result<Label, _> = "eggs".parse();
    assert_eq!(result, Err(ClassifierError::UnknownLabel("eggs".to_string())));
}

// ---------------------------------------------------------------------------
// Corpus and split
// ---------------------------------------------------------------------------

#[test]
fn corpus_supplies_vocabulary_size() {
    let instances = vec![
        Instance::ham(["Hello", "hello"]),
        Instance::spam(["hello", "WIN"]),
    ];
    let corpus = Corpus::summarize(&instances);
    assert_eq!(corpus.vocabulary_size(), 3);
    assert_eq!(corpus.ham_tokens, 2);
    assert_eq!(corpus.spam_tokens, 2);
}

#[test]
fn split_keeps_every_instance() {
    let instances: Vec<Instance> = (0..9)
        .map(|i| {
            if i % 3 == 0 {
                Instance::spam([format!("s{}", i)])
            } else {
                Instance::ham([format!("h{}", i)])
            }
        })
        .collect();
    let (train, test) = train_test_split(&instances, 0.5, 3).unwrap();
    assert_eq!(train.len() + test.len(), instances.len());
    for inst in &instances {
        assert!(train.contains(inst) || test.contains(inst));
    }
}

#[test]
fn split_seed_changes_order() {
    let instances: Vec<Instance> = (0..50).map(|i| Instance::ham([format!("w{}", i)])).collect();
    let (a, _) = train_test_split(&instances, 0.5, 1).unwrap();
    let (b, _) = train_test_split(&instances, 0.5, 2).unwrap();
    assert_ne!(a, b);
}

#[test]
fn split_rejects_bad_fraction() {
    let instances = vec![Instance::ham(["a"])];
    assert_eq!(
        train_test_split(&instances, 1.5, 0).err(),
        Some(ClassifierError::InvalidSplit(1.5))
    );
}
