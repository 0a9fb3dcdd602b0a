//! # Allocation-Rule Validation
//!
//! Structural validation of postcodes against the scheme's allocation
//! rules: a fixed positional shape, per-area district constraints, and
//! lexical restrictions on individual positions.
//!
//! [`is_valid`] is a total predicate. It never panics and has no error
//! type; every malformed input maps to `false`. The rules run as an
//! ordered guard-clause chain and the order is load-bearing: the per-area
//! district gatekeepers run first, then the universal positional rules.
//!
//! Inputs are expected pre-uppercased; the shape check only admits
//! uppercase letters, so lowercase text is rejected outright.

/// Areas whose districts are a single digit. WC is the one exception in
/// this list: it is always further subdivided by a letter (WC1A).
const SINGLE_DIGIT_DISTRICT_AREAS: &[&str] = &[
    "BR", "FY", "HA", "HD", "HG", "HR", "HS", "HX", "JE", "LD", "SM", "SR",
    "WC", "WN", "ZE",
];

/// Areas whose districts are always two digits.
const DOUBLE_DIGIT_DISTRICT_AREAS: &[&str] = &["AB", "LL", "SO"];

/// Areas allocated a district 0. BS is the only area with both a
/// district 0 and a district 10.
const DISTRICT_ZERO_AREAS: &[&str] = &[
    "BL", "BS", "CM", "CR", "FY", "HA", "PR", "SL", "SS",
];

/// Central-London districts subdivided by inserting a letter after the
/// digit: EC1-EC4, SW1, W1, WC1, WC2 and parts of E1, N1, NW1 and SE1.
const SUBDIVIDED_DISTRICT_PREFIXES: &[&str] = &[
    "EC1", "EC2", "EC3", "EC4", "SW1", "W1", "WC1", "WC2", "E1W", "N1C",
    "N1P", "NW1W", "SE1P",
];

/// Letters never allocated in the first position.
const FIRST_POSITION_EXCLUDED: &str = "QVX";

/// Letters never allocated in the second position.
const SECOND_POSITION_EXCLUDED: &str = "IJZ";

/// The only letters allocated in the third position when the outward code
/// starts letter-digit-letter.
const THIRD_POSITION_LETTERS: &str = "ABCDEFGHJKPSTUW";

/// The only letters allocated in the fourth position when the outward code
/// starts letter-letter-digit-letter.
const FOURTH_POSITION_LETTERS: &str = "ABEHMNPRVWXY";

/// Letters never allocated in the unit, chosen so handwritten codes do not
/// resemble digits or each other.
const UNIT_EXCLUDED_LETTERS: &str = "CIKMOV";

/// Positional decomposition of a shape-checked code.
struct Parts<'a> {
    area: &'a str,
    district: &'a str,
    unit: &'a str,
}

/// Check a postcode against the scheme's allocation rules.
///
/// Expects canonical or compact form: the structural shape admits a single
/// optional internal space. All rules short-circuit; the code is valid
/// only when every one of them passes.
pub fn is_valid(code: &str) -> bool {
    if !has_valid_shape(code) {
        return false;
    }

    let parts = split(code);

    // Per-area district gatekeepers. An area appears in at most one list.
    if SINGLE_DIGIT_DISTRICT_AREAS.contains(&parts.area)
        && !single_digit_district_ok(parts.area, parts.district)
    {
        return false;
    }
    if DOUBLE_DIGIT_DISTRICT_AREAS.contains(&parts.area)
        && !double_digit_district_ok(parts.district)
    {
        return false;
    }

    if parts.district == "0" && !DISTRICT_ZERO_AREAS.contains(&parts.area) {
        return false;
    }
    if parts.district == "10"
        && parts.area != "BS"
        && DISTRICT_ZERO_AREAS.contains(&parts.area)
    {
        return false;
    }

    // Subdivided central-London districts end in a letter. An empty
    // district cannot, so bare forms of these prefixes are rejected.
    if SUBDIVIDED_DISTRICT_PREFIXES
        .iter()
        .any(|prefix| code.starts_with(prefix))
        && !parts
            .district
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return false;
    }

    // Shape check guarantees at least five ASCII characters.
    let bytes = code.as_bytes();
    if FIRST_POSITION_EXCLUDED.contains(bytes[0] as char) {
        return false;
    }
    if SECOND_POSITION_EXCLUDED.contains(bytes[1] as char) {
        return false;
    }

    // A9A outward shape: the third character carries the subdivision letter.
    if bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_uppercase()
        && !THIRD_POSITION_LETTERS.contains(bytes[2] as char)
    {
        return false;
    }

    // AA9A outward shape: the fourth character carries the subdivision letter.
    if bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_uppercase()
        && !FOURTH_POSITION_LETTERS.contains(bytes[3] as char)
    {
        return false;
    }

    if parts
        .unit
        .chars()
        .any(|c| UNIT_EXCLUDED_LETTERS.contains(c))
    {
        return false;
    }

    true
}

/// Match the structural pattern `[A-Z]{1,2}[0-9][A-Z0-9]? ?[0-9][A-Z]{2}`,
/// anchored at both ends: a 2-4 character outward code, an optional single
/// space, and a digit-letter-letter inward code.
fn has_valid_shape(code: &str) -> bool {
    let bytes = code.as_bytes();
    let n = bytes.len();
    if !(5..=8).contains(&n) {
        return false;
    }

    let (head, inward) = bytes.split_at(n - 3);
    if !(inward[0].is_ascii_digit()
        && inward[1].is_ascii_uppercase()
        && inward[2].is_ascii_uppercase())
    {
        return false;
    }

    let outward = match head {
        [rest @ .., b' '] => rest,
        _ => head,
    };
    matches_outward(outward)
}

/// Match `[A-Z]{1,2}[0-9][A-Z0-9]?` against a whole outward code.
fn matches_outward(outward: &[u8]) -> bool {
    fn upper_or_digit(b: u8) -> bool {
        b.is_ascii_uppercase() || b.is_ascii_digit()
    }

    match outward {
        // A9
        [a, d] => a.is_ascii_uppercase() && d.is_ascii_digit(),
        // A9A, A99 or AA9
        [a, b, c] => {
            a.is_ascii_uppercase()
                && ((b.is_ascii_digit() && upper_or_digit(*c))
                    || (b.is_ascii_uppercase() && c.is_ascii_digit()))
        }
        // AA9A or AA99
        [a, b, c, d] => {
            a.is_ascii_uppercase()
                && b.is_ascii_uppercase()
                && c.is_ascii_digit()
                && upper_or_digit(*d)
        }
        _ => false,
    }
}

/// Decompose by position: the outward code is everything except the
/// trailing four characters (space-separated or not), the area is its
/// first one or two characters, and the unit is the final two.
fn split(code: &str) -> Parts<'_> {
    let outward = &code[..code.len() - 4];
    let area_len = outward.len().min(2);
    Parts {
        area: &outward[..area_len],
        district: &outward[area_len..],
        unit: &code[code.len() - 2..],
    }
}

/// Single-digit-district areas: WC requires a digit-then-letter district;
/// every other listed area requires exactly one digit.
fn single_digit_district_ok(area: &str, district: &str) -> bool {
    let district = district.as_bytes();
    if area == "WC" {
        matches!(district, [d, l] if d.is_ascii_digit() && l.is_ascii_uppercase())
    } else {
        matches!(district, [d] if d.is_ascii_digit())
    }
}

/// Double-digit-district areas: exactly two digits.
fn double_digit_district_ok(district: &str) -> bool {
    district.len() == 2 && district.bytes().all(|b| b.is_ascii_digit())
}
