//! Candidate generation by probing the variant index.

use crate::analyzer::{ngram, TextNormalizer, Tokenizer};
use crate::index::types::VariantIndex;
use brandmatch_types::{BrandId, Candidate};
use rustc_hash::FxHashSet;

/// Probes dialogue text against a [`VariantIndex`].
///
/// The matcher owns reusable scratch buffers (normalization output,
/// phrase window, seen-brand set), so one instance should be reused
/// across many dialogues. The index itself is never mutated; for a
/// parallel batch, give each worker its own `Matcher` and share one
/// index.
///
/// Matching is pure computation with no failure mode: any text,
/// including empty, yields a (possibly empty) candidate list.
pub struct Matcher {
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    norm_buf: String,
    seen: FxHashSet<BrandId>,
    phrase_buf: String,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Creates a matcher with empty scratch buffers.
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::new(),
            norm_buf: String::with_capacity(256),
            seen: FxHashSet::default(),
            phrase_buf: String::with_capacity(64),
        }
    }

    /// Finds every brand candidate in one dialogue.
    ///
    /// Generates all word n-grams of the normalized text up to the
    /// index's `max_phrase_words` and probes the index with each. Per
    /// brand, only the first hit is kept: n-grams are scanned by start
    /// position and then by increasing length, so the surviving
    /// evidence span is the leftmost mention, and at equal start the
    /// shortest one. Downstream verification relies on exactly one
    /// evidence span per brand per dialogue.
    pub fn find_candidates(&mut self, index: &VariantIndex, text: &str) -> Vec<Candidate> {
        let mut out = Vec::new();
        if index.is_empty() {
            return out;
        }

        self.normalizer.normalize_into(text, &mut self.norm_buf);

        let mut words: Vec<&str> = Vec::new();
        self.tokenizer.tokenize_into(&self.norm_buf, &mut words);

        self.seen.clear();
        let seen = &mut self.seen;

        ngram::for_each_phrase(
            &words,
            index.max_phrase_words,
            &mut self.phrase_buf,
            |phrase, _, _| {
                let Some(brands) = index.lookup(phrase) else {
                    return;
                };
                for &brand in brands {
                    if seen.insert(brand) {
                        out.push(Candidate {
                            brand: index.brand_name(brand).to_owned(),
                            phrase: phrase.to_owned(),
                        });
                    }
                }
            },
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexBuilder;
    use brandmatch_types::{
        BrandVariants, GenerationStatus, SynonymRecord, SynonymResponse,
    };

    fn index_of(entries: &[(&str, &[&str])]) -> VariantIndex {
        let mut builder = IndexBuilder::new();
        for (brand, variants) in entries {
            builder.add_record(&SynonymRecord {
                original_brand: (*brand).to_owned(),
                status: GenerationStatus::Success,
                response: Some(SynonymResponse {
                    items: vec![BrandVariants {
                        original: (*brand).to_owned(),
                        exact_variants: variants.iter().map(|s| (*s).to_owned()).collect(),
                        ..Default::default()
                    }],
                }),
            });
        }
        builder.build()
    }

    #[test]
    fn finds_multiple_brands_in_one_dialogue() {
        let index = index_of(&[("Ozon", &["озон"]), ("Avito", &["авито"])]);
        let mut matcher = Matcher::new();

        let found = matcher.find_candidates(&index, "сравни цены на озон и авито");
        assert_eq!(found.len(), 2);

        let mut brands: Vec<&str> = found.iter().map(|c| c.brand.as_str()).collect();
        brands.sort_unstable();
        assert_eq!(brands, ["Avito", "Ozon"]);
    }

    #[test]
    fn candidates_follow_text_order() {
        let index = index_of(&[("Ozon", &["озон"]), ("Avito", &["авито"])]);
        let mut matcher = Matcher::new();

        let found = matcher.find_candidates(&index, "авито лучше чем озон");
        let brands: Vec<&str> = found.iter().map(|c| c.brand.as_str()).collect();
        assert_eq!(brands, ["Avito", "Ozon"]);
    }

    #[test]
    fn shared_phrase_yields_candidate_per_brand() {
        let index = index_of(&[("Ozon", &["доставка"]), ("Wildberries", &["доставка"])]);
        let mut matcher = Matcher::new();

        let found = matcher.find_candidates(&index, "где моя доставка");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|c| c.phrase == "доставка"));
    }

    #[test]
    fn window_never_runs_past_text_end() {
        let index = index_of(&[("Vse Instrumenty", &["все инструменты"])]);
        let mut matcher = Matcher::new();

        // Two-word window against a one-word dialogue.
        assert!(matcher.find_candidates(&index, "инструменты").is_empty());
    }

    #[test]
    fn empty_index_short_circuits() {
        let index = index_of(&[]);
        let mut matcher = Matcher::new();
        assert!(matcher.find_candidates(&index, "купи на озон").is_empty());
    }

    #[test]
    fn unmatched_text_yields_nothing() {
        let index = index_of(&[("Ozon", &["озон"])]);
        let mut matcher = Matcher::new();
        assert!(matcher
            .find_candidates(&index, "ничего интересного здесь нет")
            .is_empty());
    }
}
