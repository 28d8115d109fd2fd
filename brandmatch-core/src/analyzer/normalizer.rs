/// Per-byte fold table for the ASCII fast path.
///
/// A zero entry means the byte is dropped (ASCII punctuation);
/// separator control bytes map to a plain space; uppercase letters map
/// to their lowercase form; everything else maps to itself.
const ASCII_FOLD: [u8; 128] = build_fold_table();

const fn build_fold_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0usize;
    while i < 128 {
        let b = i as u8;
        table[i] = if b.is_ascii_punctuation() {
            0
        } else if matches!(b, b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r') {
            b' '
        } else {
            b.to_ascii_lowercase()
        };
        i += 1;
    }
    table
}

/// Text canonicalizer for phrase comparison.
///
/// Performs the following operations:
/// - Removes all ASCII punctuation characters
/// - Converts all characters to lowercase (Unicode-aware, so Cyrillic
///   uppercase is folded too)
/// - Maps ASCII separator controls (tab, newline, CR, VT, FF) to a
///   plain space, without collapsing runs of separators
///
/// Two strings denote the same phrase iff their normalized forms are
/// byte-identical. Runs of separators are not collapsed here; the
/// tokenizer drops the empty tokens they produce, which is where the
/// collapse effectively happens.
///
/// The function is total and idempotent: any input (including empty)
/// yields a deterministic output, and normalizing twice equals
/// normalizing once.
///
/// # Examples
///
/// ```
/// use brandmatch_core::analyzer::TextNormalizer;
///
/// let n = TextNormalizer::default();
/// assert_eq!(n.normalize("Ozon!"), "ozon");
/// assert_eq!(n.normalize("ОЗОН.ру"), "озонру");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing; reuses its capacity when
    /// sufficient.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            let b = bytes[i];
            if b < 128 {
                match ASCII_FOLD[b as usize] {
                    0 => {}
                    folded => out.push(folded as char),
                }
                i += 1;
            } else {
                // `i` is always a char boundary: the ASCII arm consumes
                // whole single-byte chars and this arm whole multi-byte
                // chars.
                let ch = input[i..].chars().next().unwrap_or('\u{FFFD}');
                i += ch.len_utf8();
                for lowered in ch.to_lowercase() {
                    out.push(lowered);
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}
