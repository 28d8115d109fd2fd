//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Canonicalizes raw text for comparison
//! - **Tokenizer**: Splits normalized text into words
//! - **Ngram**: Generates word-window phrases for index probing

pub mod ngram;
pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::Tokenizer;
