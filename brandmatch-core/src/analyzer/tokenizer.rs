//! Streaming word tokenizer.
//!
//! Splits normalized text into whitespace-delimited words for n-gram
//! generation. Tokens are slices of the input, emitted through a
//! callback together with their byte offset and word position; no
//! intermediate collection is allocated.
//!
//! ## Input contract
//!
//! The tokenizer expects normalizer output: every separator is a
//! single ASCII space byte (the normalizer maps tab/newline/CR to
//! spaces) and no ASCII punctuation remains. Runs of consecutive
//! spaces are allowed and produce no empty tokens, which is where the
//! pipeline's whitespace collapse effectively happens.

use core::str;
use memchr::memchr_iter;

/// Streaming tokenizer over normalized text.
///
/// Emits `(token, byte_offset, position)` for every non-empty word.
/// Tokens borrow from the input, so a full tokenization pass performs
/// no heap allocation.
///
/// # Example
///
/// ```
/// use brandmatch_core::analyzer::Tokenizer;
///
/// let mut words = Vec::new();
/// Tokenizer::new().tokenize("купи  на озон", |word, _off, pos| {
///     words.push((word, pos));
/// });
/// assert_eq!(words, [("купи", 0), ("на", 1), ("озон", 2)]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes normalized input, emitting `(token, byte_offset, position)`.
    ///
    /// `byte_offset` is the token's starting byte index in `normalized`;
    /// `position` is its word index counting only non-empty tokens.
    #[inline]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, usize, u32),
    {
        let bytes = normalized.as_bytes();
        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `normalized` is valid UTF-8 and we split only on
                // the ASCII space byte (0x20), which never occurs as a
                // continuation byte, so `bytes[start..i]` is a valid UTF-8
                // subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text, start, pos);
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above; `start` follows an ASCII
            // space byte (or is zero).
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text, start, pos);
        }
    }

    /// Collects tokens into `out`, reusing its allocation.
    #[inline]
    pub fn tokenize_into<'n>(&self, normalized: &'n str, out: &mut Vec<&'n str>) {
        out.clear();
        self.tokenize(normalized, |text, _, _| out.push(text));
    }
}
