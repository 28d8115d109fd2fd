//! Word n-gram generation.
//!
//! Produces every contiguous word window of length 1..=`max_n` over a
//! token sequence, rejoined with single spaces, for probing the
//! variant index. Phrases are built incrementally into a reusable
//! buffer and emitted through a callback, so a full scan allocates
//! nothing beyond the caller's buffer.
//!
//! The emission order is load-bearing for the matcher's tie-break:
//! outer loop over start position, inner loop over increasing window
//! length. The first index hit per brand therefore comes from the
//! leftmost start, and at equal start from the shortest window.

/// Emits every word n-gram of `words` up to `max_n` words.
///
/// The callback receives `(phrase, start, n)` where `phrase` is the
/// window joined with single spaces, `start` the window's first word
/// index, and `n` its word count. Windows never run past the end of
/// `words`. With `max_n == 0` nothing is emitted.
///
/// # Example
///
/// ```
/// use brandmatch_core::analyzer::ngram::for_each_phrase;
///
/// let mut buf = String::new();
/// let mut phrases = Vec::new();
/// for_each_phrase(&["a", "b", "c"], 2, &mut buf, |phrase, _, _| {
///     phrases.push(phrase.to_owned());
/// });
/// assert_eq!(phrases, ["a", "a b", "b", "b c", "c"]);
/// ```
#[inline]
pub fn for_each_phrase<F>(words: &[&str], max_n: usize, buf: &mut String, mut emit: F)
where
    F: FnMut(&str, usize, usize),
{
    if max_n == 0 {
        return;
    }

    for start in 0..words.len() {
        buf.clear();
        let limit = max_n.min(words.len() - start);
        for n in 1..=limit {
            if n > 1 {
                buf.push(' ');
            }
            buf.push_str(words[start + n - 1]);
            emit(buf, start, n);
        }
    }
}

/// Counts the phrases `for_each_phrase` would emit, without emitting.
///
/// For `len` words this is `len * max_n - max_n * (max_n - 1) / 2`
/// when `len >= max_n`, and `len * (len + 1) / 2` otherwise.
#[inline]
pub fn count_phrases(len: usize, max_n: usize) -> usize {
    let m = max_n.min(len);
    len * m - m * m.saturating_sub(1) / 2
}
