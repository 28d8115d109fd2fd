//! Variant indexing and candidate matching.
//!
//! The index maps canonical phrases (normalized variant surface forms)
//! to the set of brands that claim them. It is built once per run from
//! the full variant vocabulary, read-only thereafter, and safely
//! shared across matcher workers.
//!
//! Memory layout:
//! - Brand names are interned once into a table; posting sets hold
//!   32-bit ids, not strings
//! - The per-phrase brand set is a [`smallvec::SmallVec`] of two
//!   inline ids, since a phrase claimed by more than one brand is rare

mod builder;
mod probe;
mod stats;
mod types;

pub use builder::IndexBuilder;
pub use probe::Matcher;
pub use stats::IndexStats;
pub use types::{VariantIndex, MIN_PHRASE_CHARS};
