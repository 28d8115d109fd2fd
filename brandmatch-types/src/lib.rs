//! Boundary record types for the brandmatch pipeline.
//!
//! This crate provides the types that cross process boundaries:
//! vocabulary records produced by the external synonym generator,
//! dialogue corpus records, and the candidate records handed to the
//! downstream verification stage. Keeping them in a separate crate
//! ensures:
//!
//! - **Cross-crate compatibility**: the engine and any driver share
//!   the same record shapes
//! - **Clean boundaries**: no circular dependencies between crates
//!
//! Everything here is plain data with serde derives; no behavior
//! beyond small accessors lives in this crate.

#![warn(missing_docs)]

use core::fmt;
use serde::{Deserialize, Serialize};

/// Interned brand identifier.
///
/// Brands are identified by their canonical name string at the
/// boundary; inside the index they are interned to a 32-bit id so
/// posting sets stay compact.
pub type BrandId = u32;

/// The class of a generated brand-name variant.
///
/// The class only informs how the vocabulary was produced; every class
/// lands in the same lookup structure and is not retained after
/// indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantClass {
    /// Spelling variants of the canonical name (case, spaces, hyphens).
    Exact,
    /// Transliterations and pronunciation-driven spellings.
    Phonetic,
    /// Colloquial shortenings and slang forms.
    Colloquial,
}

impl VariantClass {
    /// All variant classes, in the order the generator emits them.
    pub const ALL: [VariantClass; 3] = [
        VariantClass::Exact,
        VariantClass::Phonetic,
        VariantClass::Colloquial,
    ];
}

impl fmt::Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantClass::Exact => write!(f, "exact"),
            VariantClass::Phonetic => write!(f, "phonetic"),
            VariantClass::Colloquial => write!(f, "colloquial"),
        }
    }
}

/// Outcome of the external generation call for one brand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    /// The generator returned a usable variant set.
    Success,
    /// Anything else; the record contributes no variants.
    #[default]
    #[serde(other)]
    Failed,
}

/// One brand's generated variant lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandVariants {
    /// The brand name as echoed back by the generator.
    #[serde(default)]
    pub original: String,
    /// Spelling variants.
    #[serde(default)]
    pub exact_variants: Vec<String>,
    /// Phonetic variants.
    #[serde(default)]
    pub phonetic_variants: Vec<String>,
    /// Colloquial variants.
    #[serde(default)]
    pub colloquial_variants: Vec<String>,
}

impl BrandVariants {
    /// Returns the variant list for the given class.
    pub fn class(&self, class: VariantClass) -> &[String] {
        match class {
            VariantClass::Exact => &self.exact_variants,
            VariantClass::Phonetic => &self.phonetic_variants,
            VariantClass::Colloquial => &self.colloquial_variants,
        }
    }

    /// Iterates over every surface form, the original name first.
    pub fn surface_forms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.original.as_str()).chain(
            VariantClass::ALL
                .iter()
                .flat_map(|&c| self.class(c).iter().map(String::as_str)),
        )
    }
}

/// Payload wrapper around the generator's structured response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynonymResponse {
    /// Generated items; the generator emits at most one per brand.
    #[serde(default)]
    pub items: Vec<BrandVariants>,
}

/// One record of the synonym vocabulary file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymRecord {
    /// Canonical brand identifier, returned verbatim in candidates.
    pub original_brand: String,
    /// Generation outcome; failed records contribute nothing.
    #[serde(default)]
    pub status: GenerationStatus,
    /// The generator's response, absent on failure.
    #[serde(default)]
    pub response: Option<SynonymResponse>,
}

impl SynonymRecord {
    /// Returns the variant lists if this record is usable.
    pub fn variants(&self) -> Option<&BrandVariants> {
        if self.status != GenerationStatus::Success {
            return None;
        }
        self.response.as_ref()?.items.first()
    }
}

/// One dialogue of the input corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dialogue {
    /// Dialogue identifier, carried through to the output record.
    ///
    /// The corpus stores identifiers as strings or integers; both
    /// deserialize to the string form.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Raw transcribed text.
    pub text: String,
    /// Raw ground-truth label field, opaque to the matcher.
    #[serde(default)]
    pub ground_truth: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// One ground-truth label as serialized by the annotation tooling.
///
/// The corpus stores labels either as `[{"brand": "..."}]` objects or
/// as bare strings; both shapes carry just a brand name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroundTruthLabel {
    /// Object form with a `brand` field.
    Entry {
        /// The labeled brand name; empty when the field is missing.
        #[serde(default)]
        brand: String,
    },
    /// Bare string form.
    Name(String),
}

impl GroundTruthLabel {
    /// Extracts the labeled brand name.
    pub fn into_brand(self) -> String {
        match self {
            GroundTruthLabel::Entry { brand } => brand,
            GroundTruthLabel::Name(name) => name,
        }
    }
}

/// A (brand, matched phrase) pair proposed for one dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Canonical brand identifier.
    pub brand: String,
    /// The canonical phrase that hit the index.
    pub phrase: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.brand, self.phrase)
    }
}

/// Per-dialogue matching result handed to downstream verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueMatches {
    /// Dialogue identifier.
    pub id: String,
    /// Original dialogue text, passed through untouched.
    pub text: String,
    /// Parsed ground-truth brand labels, passed through for scoring.
    pub ground_truth: Vec<String>,
    /// Candidates found by the matcher, at most one per brand.
    pub candidates: Vec<Candidate>,
}

impl DialogueMatches {
    /// Number of candidates found for this dialogue.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}
