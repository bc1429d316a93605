//! Splitting text into comparison units.

use crate::types::Granularity;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into comparison units. Every unit counts, whitespace and
/// punctuation included.
pub fn units(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Grapheme => text.graphemes(true).collect(),
        Granularity::CodePoint => text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect(),
    }
}

/// Number of comparison units in a text.
pub fn unit_count(text: &str, granularity: Granularity) -> usize {
    match granularity {
        Granularity::Grapheme => text.graphemes(true).count(),
        Granularity::CodePoint => text.chars().count(),
    }
}
