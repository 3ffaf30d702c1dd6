//! Shared types for the Porter stemming workspace.
//!
//! - [`character`] -- Latin vowel/consonant letter classification and
//!   simple case conversion
//! - [`enums`] -- stemming mode selection and word-size limits
//! - [`error`] -- boundary error type ([`error::StemError`])
//!
//! The stemming engine itself lives in the `porter-en` crate; this crate
//! only holds the vocabulary shared between the engine and its callers.

pub mod character;
pub mod enums;
pub mod error;
