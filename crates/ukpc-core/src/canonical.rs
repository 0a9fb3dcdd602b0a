//! # Canonical Form
//!
//! Reshapes loosely formatted postcode text into the canonical
//! space-separated form: `<outward> <inward>`, where the inward code is
//! always the trailing three characters.
//!
//! The split point is chosen by an ordered sequence of layout rules derived
//! from the scheme's allocation tables. Ordering is semantically
//! significant: the four-character-outward prefixes are checked before
//! every shorter-prefix or length-based rule, so `WC1A1BB` resolves through
//! the `WC` rule rather than the generic seven-character rule.
//!
//! ## Case Policy
//!
//! Inputs are expected pre-uppercased. No case folding happens here: the
//! prefix tables are uppercase literals, so lowercase text can only be
//! reshaped by the length-based rules, and the validator rejects it.

use crate::error::FormatError;

/// Outward codes spanning four characters: the WC area plus EC1-EC4,
/// NW1W, SE1P and SW1.
const FOUR_CHAR_OUTWARD_PREFIXES: &[&str] = &[
    "WC", "EC1", "EC2", "EC3", "EC4", "NW1W", "SE1P", "SW1",
];

/// Outward codes spanning three characters: the E1, N1 and W1 districts.
/// Matched against the first two characters exactly.
const THREE_CHAR_OUTWARD_PREFIXES: &[&str] = &["E1", "N1", "W1"];

/// Areas identified by a single letter. With these, total length decides
/// between a two- and a three-character outward code.
const SINGLE_LETTER_AREAS: &str = "BEGLMNSW";

/// Reshape a loosely formatted postcode into canonical form.
///
/// Strips every character that is not an ASCII letter or digit, then
/// re-inserts a single space before the trailing three-character inward
/// code, at the position selected by the first matching layout rule.
///
/// # Errors
///
/// Returns [`FormatError::UnrecognizedLayout`] carrying the raw input when
/// no layout rule applies to the stripped text.
pub fn canonicalize(raw: &str) -> Result<String, FormatError> {
    let compact: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();

    let Some(outward_len) = outward_length(&compact) else {
        return Err(FormatError::UnrecognizedLayout(raw.to_string()));
    };

    // outward_length only answers when both slices are in bounds.
    Ok(format!(
        "{} {}",
        &compact[..outward_len],
        &compact[compact.len() - 3..]
    ))
}

/// Select the outward-code length for stripped input, or `None` when no
/// rule applies. A rule whose split point cannot be realized within the
/// input is inapplicable and evaluation falls through to the next one.
fn outward_length(compact: &str) -> Option<usize> {
    let len = compact.len();
    if len < 3 {
        return None;
    }

    if len >= 4
        && FOUR_CHAR_OUTWARD_PREFIXES
            .iter()
            .any(|prefix| compact.starts_with(prefix))
    {
        return Some(4);
    }

    if THREE_CHAR_OUTWARD_PREFIXES.contains(&&compact[..2]) {
        return Some(3);
    }

    if compact
        .chars()
        .next()
        .is_some_and(|c| SINGLE_LETTER_AREAS.contains(c))
    {
        if len == 5 {
            return Some(2);
        }
        if len == 6 {
            return Some(3);
        }
    }

    match len {
        6 => Some(3),
        7 => Some(4),
        _ => None,
    }
}
