//! Golden-vector test for the full rule cascade.
//!
//! `data/vectors.json` maps input words to their expected stems. Every
//! word is run through the engine and all mismatches are collected before
//! asserting, so a regression reports the whole set of broken words at
//! once instead of stopping at the first.

use std::collections::BTreeMap;

use porter_core::enums::StemMode;
use porter_en::PorterHandle;

const VECTORS: &str = include_str!("data/vectors.json");

#[test]
fn golden_vectors() {
    let expected: BTreeMap<String, String> =
        serde_json::from_str(VECTORS).expect("vectors.json must parse");
    assert!(!expected.is_empty());

    let handle = PorterHandle::new();
    let mut mismatches = Vec::new();
    for (word, want) in &expected {
        let got = handle.stem(word).expect("vector words are within bounds");
        if got != *want {
            mismatches.push(format!("{word}: got {got:?}, want {want:?}"));
        }
    }

    assert!(
        mismatches.is_empty(),
        "{} of {} vectors mismatched:\n{}",
        mismatches.len(),
        expected.len(),
        mismatches.join("\n")
    );
}

#[test]
fn golden_vectors_never_grow() {
    let expected: BTreeMap<String, String> =
        serde_json::from_str(VECTORS).expect("vectors.json must parse");
    for (word, want) in &expected {
        assert!(
            want.chars().count() <= word.chars().count(),
            "vector {word:?} -> {want:?} grows the word"
        );
    }
}

#[test]
fn plurals_mode_agrees_with_the_full_cascade_on_plain_plurals() {
    let handle = PorterHandle::new();
    for (word, stem) in [("cats", "cat"), ("caresses", "caress"), ("ponies", "poni")] {
        assert_eq!(handle.stem_with(word, StemMode::PluralsOnly).unwrap(), stem);
        assert_eq!(handle.stem(word).unwrap(), stem);
    }
}
