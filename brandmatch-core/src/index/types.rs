//! Variant index container and constants.

use brandmatch_types::BrandId;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Minimum character count for an indexable surface form.
///
/// Surface forms shorter than this (before or after normalization) are
/// too ambiguous to index; legal-form noise tokens like "ИП" or "ООО"
/// fall under this bound.
pub const MIN_PHRASE_CHARS: usize = 4;

/// Set of brands claiming one canonical phrase.
///
/// Inline capacity of two: almost every phrase belongs to exactly one
/// brand, so the set stays off the heap in the common case.
pub(crate) type BrandSet = SmallVec<[BrandId; 2]>;

/// Inverted index from canonical phrase to the brands claiming it.
///
/// Built once per run by [`IndexBuilder`](crate::index::IndexBuilder),
/// read-only thereafter. The container is `Sync`, so a corpus batch
/// can share one index across matcher workers without locking.
pub struct VariantIndex {
    /// Canonical phrase -> brand-id set.
    pub(crate) phrases: FxHashMap<String, BrandSet>,
    /// Interned brand names; `BrandId` indexes into this table.
    pub(crate) brands: Vec<String>,
    /// Maximum word count across all indexed phrases.
    ///
    /// Bounds n-gram generation against dialogue text. Zero for an
    /// empty index, which makes matching a no-op.
    pub(crate) max_phrase_words: usize,
}

impl VariantIndex {
    /// Looks up the brand set for an exact canonical phrase.
    #[inline]
    pub fn lookup(&self, phrase: &str) -> Option<&[BrandId]> {
        self.phrases.get(phrase).map(|set| set.as_slice())
    }

    /// Resolves an interned brand id back to its canonical name.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this index's builder.
    #[inline]
    pub fn brand_name(&self, id: BrandId) -> &str {
        &self.brands[id as usize]
    }

    /// Maximum word count across all indexed phrases.
    #[inline]
    #[must_use]
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Number of distinct canonical phrases in the index.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` if the index contains no phrases.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Number of interned brands, including brands whose surface forms
    /// were all filtered out.
    #[inline]
    #[must_use]
    pub fn num_brands(&self) -> usize {
        self.brands.len()
    }
}
