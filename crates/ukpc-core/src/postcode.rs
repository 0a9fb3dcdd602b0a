//! # Postcode Newtype
//!
//! The validated [`Postcode`] domain primitive. No bare strings for
//! postcodes: constructing a `Postcode` canonicalizes the input and checks
//! it against the allocation rules, so every value of this type holds a
//! canonical, structurally valid code.

use serde::{Deserialize, Serialize};

use crate::canonical::canonicalize;
use crate::error::PostcodeError;
use crate::validation::is_valid;

/// A structurally valid UK postcode in canonical form.
///
/// The canonical storage format is `<outward> <inward>` with a single
/// separating space. The [`Postcode::new`] constructor accepts loosely
/// formatted input (`"EC1A-1BB"`, `"EC1A1BB"`, `"E C 1A 1BB"`) and stores
/// the canonical form; [`Postcode::from_canonical`] accepts only input
/// that is already canonical.
///
/// # Validation
///
/// - Input must reshape into canonical form under the layout rules.
/// - The canonical form must pass every allocation rule.
/// - Inputs are expected pre-uppercased; no case folding is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Postcode(String);

impl<'de> Deserialize<'de> for Postcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl Postcode {
    /// Create a postcode from loosely formatted text, storing the
    /// canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`PostcodeError::Format`] when no layout rule can reshape
    /// the input, or [`PostcodeError::FailedValidation`] when the
    /// canonical form breaks an allocation rule.
    pub fn new(value: impl Into<String>) -> Result<Self, PostcodeError> {
        let raw = value.into();
        let canonical = canonicalize(&raw)?;
        if !is_valid(&canonical) {
            return Err(PostcodeError::FailedValidation(canonical));
        }
        Ok(Self(canonical))
    }

    /// Create a postcode from input that must already be canonical.
    ///
    /// For callers that must not accept loose input (wire formats,
    /// storage reads). No reformatting is performed.
    ///
    /// # Errors
    ///
    /// Returns [`PostcodeError::NotCanonical`] when the input is not its
    /// own canonical form, or [`PostcodeError::FailedValidation`] when it
    /// is canonical but breaks an allocation rule.
    pub fn from_canonical(value: impl Into<String>) -> Result<Self, PostcodeError> {
        let s = value.into();
        match canonicalize(&s) {
            Ok(canonical) if canonical == s => {
                if is_valid(&s) {
                    Ok(Self(s))
                } else {
                    Err(PostcodeError::FailedValidation(s))
                }
            }
            _ => Err(PostcodeError::NotCanonical(s)),
        }
    }

    /// Access the canonical postcode string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The outward code: everything before the separating space.
    pub fn outward_code(&self) -> &str {
        // Canonical form is ASCII with the space four characters from the end.
        &self.0[..self.0.len() - 4]
    }

    /// The inward code: the trailing three characters.
    pub fn inward_code(&self) -> &str {
        &self.0[self.0.len() - 3..]
    }

    /// The area: the one or two leading letters of the outward code.
    pub fn area(&self) -> &str {
        &self.outward_code()[..self.area_len()]
    }

    /// The district: the outward code after the area letters.
    pub fn district(&self) -> &str {
        &self.outward_code()[self.area_len()..]
    }

    /// The sector: the single digit opening the inward code.
    pub fn sector(&self) -> &str {
        &self.inward_code()[..1]
    }

    /// The unit: the two letters closing the inward code.
    pub fn unit(&self) -> &str {
        &self.inward_code()[1..]
    }

    fn area_len(&self) -> usize {
        self.outward_code()
            .bytes()
            .take_while(|b| b.is_ascii_uppercase())
            .count()
    }
}

impl std::fmt::Display for Postcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Postcode {
    type Err = PostcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
