//! The injected alphabetic-text capability.

use rand::{Rng, RngCore};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Source of random alphabetic strings.
///
/// Text and character kinds draw through this capability so callers
/// with their own string conventions (locales, dictionaries, fixed
/// corpora) can supply one via
/// [`FieldRandomizer::with_text_source`](crate::FieldRandomizer::with_text_source).
pub trait TextSource {
    /// Produce `len` random alphabetic characters as text.
    fn alphabetic(&mut self, rng: &mut dyn RngCore, len: usize) -> String;
}

/// Default text source sampling uniformly from ASCII `A-Z` / `a-z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticTextSource;

impl TextSource for AlphabeticTextSource {
    fn alphabetic(&mut self, rng: &mut dyn RngCore, len: usize) -> String {
        (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}
