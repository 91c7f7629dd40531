//! Tokenization of raw text into the RSVP display sequence.
//!
//! Words are split on runs of whitespace; punctuation stays attached to its
//! word so "Hello," is displayed as one unit. The sequence is regenerated
//! wholesale whenever the source text changes.

/// Splits text into display units on Unicode whitespace.
///
/// Pure function: the same input always yields the same sequence. Empty or
/// whitespace-only input yields an empty sequence, and no unit is ever
/// empty or contains whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
