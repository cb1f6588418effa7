// Copyright (c) The laplace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Predicates deciding whether a token read from the user is usable.
//!
//! Both functions look at the whole string: leading or trailing whitespace makes a token invalid,
//! so callers trim lines before asking.

/// Returns true if `text` is a base-10 integer: an optional `+` or `-` followed by one or more
/// ASCII digits.
///
/// There is no length limit. Whether the value fits in a particular integer type is the caller's
/// concern.
///
/// # Examples
///
/// ```
/// use laplace::validate::is_integer_token;
///
/// assert!(is_integer_token("-12"));
/// assert!(!is_integer_token("1.0"));
/// assert!(!is_integer_token(""));
/// ```
pub fn is_integer_token(text: &str) -> bool {
    let digits = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `text` is a finite real number, such as `3`, `-0.5`, `.25`, `1.` or `6.02e23`.
///
/// `inf`, `nan`, and literals that overflow `f64` are rejected.
///
/// # Examples
///
/// ```
/// use laplace::validate::is_real_token;
///
/// assert!(is_real_token("1.5e-3"));
/// assert!(!is_real_token("x"));
/// assert!(!is_real_token("inf"));
/// ```
pub fn is_real_token(text: &str) -> bool {
    parse_real(text).is_some()
}

/// Parses a token accepted by [`is_real_token`].
pub fn parse_real(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_tokens() {
        for valid in ["0", "7", "+3", "-42", "000", "123456789012345678901234567890"] {
            assert!(is_integer_token(valid), "{:?} is an integer", valid);
        }
        for invalid in ["", "+", "-", "abc", "1.0", "1e3", " 2", "2 ", "--1", "+-1", "٣"] {
            assert!(!is_integer_token(invalid), "{:?} is not an integer", invalid);
        }
    }

    #[test]
    fn test_real_tokens() {
        for valid in ["0", "-3", "+2.5", "1.", ".5", "1e10", "-6.02E-23", "1.5"] {
            assert!(is_real_token(valid), "{:?} is a real", valid);
        }
        for invalid in [
            "", "x", "1.2.3", "1e", "e5", " 1", "1 ", "inf", "-inf", "NaN", "1e400", "1,5",
        ] {
            assert!(!is_real_token(invalid), "{:?} is not a real", invalid);
        }
    }

    proptest! {
        #[test]
        fn proptest_integers_are_reals(value: i64) {
            let text = value.to_string();
            prop_assert!(is_integer_token(&text));
            prop_assert!(is_real_token(&text));
        }

        #[test]
        fn proptest_finite_floats_round_trip(value in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let text = value.to_string();
            prop_assert!(is_real_token(&text));
            prop_assert_eq!(parse_real(&text), Some(value));
        }

        #[test]
        fn proptest_never_panics(text in ".*") {
            let _ = is_integer_token(&text);
            let _ = is_real_token(&text);
        }
    }
}
