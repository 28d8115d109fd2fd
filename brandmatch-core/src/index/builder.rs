//! Index construction from vocabulary records.

use crate::analyzer::{TextNormalizer, Tokenizer};
use crate::index::types::{BrandSet, VariantIndex, MIN_PHRASE_CHARS};
use brandmatch_types::{BrandId, SynonymRecord};
use rustc_hash::FxHashMap;
use smallvec::smallvec;
use tracing::{debug, info};

/// Builds a [`VariantIndex`] from synonym vocabulary records.
///
/// Feed every record through [`add_record`](Self::add_record), then
/// freeze with [`build`](Self::build). The builder owns all scratch
/// buffers, so bulk construction performs one allocation per surviving
/// phrase and nothing else.
///
/// Filtering rules, applied uniformly to the brand's original name and
/// to every generated variant class:
/// - records with non-success status are skipped entirely
/// - a surface form whose trimmed raw length is below
///   [`MIN_PHRASE_CHARS`] is dropped
/// - a surface form that normalizes to the empty string, or whose
///   canonical form is below [`MIN_PHRASE_CHARS`], is dropped
///   (normalization can shorten strings)
pub struct IndexBuilder {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    phrases: FxHashMap<String, BrandSet>,
    brands: Vec<String>,
    brand_ids: FxHashMap<String, BrandId>,
    max_phrase_words: usize,
    records_skipped: u64,
    variants_dropped: u64,
    norm_buf: String,
    key_buf: String,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
            phrases: FxHashMap::default(),
            brands: Vec::new(),
            brand_ids: FxHashMap::default(),
            max_phrase_words: 0,
            records_skipped: 0,
            variants_dropped: 0,
            norm_buf: String::with_capacity(64),
            key_buf: String::with_capacity(64),
        }
    }

    /// Feeds one vocabulary record into the index.
    ///
    /// Failed records are skipped silently; this is the best-effort
    /// contract, malformed upstream data degrades recall but never
    /// aborts a build.
    pub fn add_record(&mut self, record: &SynonymRecord) {
        let Some(variants) = record.variants() else {
            self.records_skipped += 1;
            debug!(brand = %record.original_brand, "skipping unusable vocabulary record");
            return;
        };

        // The brand exists even if every surface form gets filtered
        // out below; it then simply owns no index keys.
        let brand = self.intern(&record.original_brand);

        for raw in variants.surface_forms() {
            self.add_surface_form(brand, raw);
        }
    }

    /// Interns a brand name, returning its stable id.
    fn intern(&mut self, name: &str) -> BrandId {
        if let Some(&id) = self.brand_ids.get(name) {
            return id;
        }
        let id = self.brands.len() as BrandId;
        self.brands.push(name.to_owned());
        self.brand_ids.insert(name.to_owned(), id);
        id
    }

    /// Canonicalizes one surface form and inserts it for `brand`.
    fn add_surface_form(&mut self, brand: BrandId, raw: &str) {
        let raw = raw.trim();
        if raw.chars().count() < MIN_PHRASE_CHARS {
            self.variants_dropped += 1;
            return;
        }

        self.normalizer.normalize_into(raw, &mut self.norm_buf);

        // Canonical key: normalized words rejoined with single spaces,
        // the same shape the matcher's n-grams take.
        self.key_buf.clear();
        let key_buf = &mut self.key_buf;
        let mut words = 0usize;
        self.tokenizer.tokenize(&self.norm_buf, |word, _, _| {
            if words > 0 {
                key_buf.push(' ');
            }
            key_buf.push_str(word);
            words += 1;
        });

        if words == 0 || self.key_buf.chars().count() < MIN_PHRASE_CHARS {
            self.variants_dropped += 1;
            return;
        }

        if let Some(set) = self.phrases.get_mut(self.key_buf.as_str()) {
            if !set.contains(&brand) {
                set.push(brand);
            }
        } else {
            self.phrases
                .insert(self.key_buf.clone(), smallvec![brand]);
        }

        self.max_phrase_words = self.max_phrase_words.max(words);
    }

    /// Freezes the builder into a read-only [`VariantIndex`].
    pub fn build(self) -> VariantIndex {
        info!(
            brands = self.brands.len(),
            phrases = self.phrases.len(),
            max_phrase_words = self.max_phrase_words,
            records_skipped = self.records_skipped,
            variants_dropped = self.variants_dropped,
            "variant index built"
        );

        VariantIndex {
            phrases: self.phrases,
            brands: self.brands,
            max_phrase_words: self.max_phrase_words,
        }
    }
}
