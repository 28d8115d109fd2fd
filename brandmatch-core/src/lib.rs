//! Brand-mention candidate matching engine.
//!
//! Finds brand-name mentions in transcribed dialogue text by exact
//! canonical-phrase lookup: a vocabulary of brand-name variants is
//! normalized into an inverted index, and each dialogue's word n-grams
//! are probed against it. The resulting (brand, matched phrase)
//! candidates go to an external verification stage; this crate does no
//! verification, scoring, or I/O of its own beyond the driver binary.
//!
//! Pipeline:
//!
//! ```text
//! variant strings --> normalizer --> IndexBuilder --> VariantIndex
//! dialogue text   --> normalizer --> tokenizer --> n-grams --> Matcher
//! ```
//!
//! The core stages are total functions: no input string, however
//! degenerate, makes them fail. Unusable vocabulary entries and
//! sub-threshold variants are silently excluded; malformed ground
//! truth falls back to an empty label list at an explicit, logged
//! branch.

pub mod analyzer;
pub mod corpus;
pub mod index;

pub use corpus::{match_corpus, match_dialogue, parse_ground_truth};
pub use index::{IndexBuilder, IndexStats, Matcher, VariantIndex};
