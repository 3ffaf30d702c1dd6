//! English Porter stemming module.
//!
//! Reduces an inflected English word to its stem with the Porter rule
//! cascade: a consonant/vowel classifier, a "measure" computation over
//! consonant-vowel alternations, and five ordered suffix-rewrite stages.
//!
//! # Architecture
//!
//! - [`stemmer`] -- the rule cascade and its working buffer
//! - [`stopwords`] -- atomically replaceable exclusion set
//! - [`handle`] -- top-level integration point ([`PorterHandle`]) with
//!   boundary validation and stopword bypass
//!
//! Words must be lowercased by the caller before stemming; the engine
//! treats any character outside {a,e,i,o,u,y} as a consonant.

pub mod handle;
pub mod stemmer;
pub mod stopwords;

pub use handle::PorterHandle;
pub use porter_core::enums::{MAX_WORD_CHARS, StemMode};
pub use porter_core::error::StemError;
pub use stemmer::stem;
pub use stopwords::StopwordFilter;
