//! Index statistics snapshot.

use crate::index::types::VariantIndex;

/// A snapshot of variant-index statistics.
#[derive(Debug, Clone, Copy)]
pub struct IndexStats {
    /// Number of interned brands, matchable or not.
    pub num_brands: usize,
    /// Number of distinct canonical phrases.
    pub num_phrases: usize,
    /// Total number of (phrase, brand) postings.
    pub total_postings: usize,
    /// Maximum word count across all indexed phrases.
    pub max_phrase_words: usize,
}

impl VariantIndex {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            num_brands: self.brands.len(),
            num_phrases: self.phrases.len(),
            total_postings: self.phrases.values().map(|set| set.len()).sum(),
            max_phrase_words: self.max_phrase_words,
        }
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} brands, {} phrases, {} postings, longest phrase {} words",
            self.num_brands, self.num_phrases, self.total_postings, self.max_phrase_words
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::index::IndexBuilder;

    #[test]
    fn empty_index_stats() {
        let stats = IndexBuilder::new().build().stats();
        assert_eq!(stats.num_brands, 0);
        assert_eq!(stats.num_phrases, 0);
        assert_eq!(stats.total_postings, 0);
        assert_eq!(stats.max_phrase_words, 0);
        assert_eq!(
            format!("{stats}"),
            "0 brands, 0 phrases, 0 postings, longest phrase 0 words"
        );
    }
}
