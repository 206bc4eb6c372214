//! Phone-number query validation.

use std::fmt;

/// A validated phone-number query: non-empty, decimal digits only,
/// at most the configured number of digits.
///
/// Can only be constructed through [`PhoneQuery::parse`], so every value of
/// this type already satisfies the invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhoneQuery(String);

/// Why a raw message was not accepted as a phone number.
///
/// This is user error, not a system fault, so it lives outside [`crate::Error`]
/// and maps to a fixed hint in the reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryRejection {
    Empty,
    NonDigit,
    TooLong { max: usize },
}

impl PhoneQuery {
    /// Validate raw user input. Leading/trailing whitespace is trimmed;
    /// nothing else is normalized (no country-code stripping).
    pub fn parse(raw: &str, max_digits: usize) -> Result<Self, QueryRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QueryRejection::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(QueryRejection::NonDigit);
        }
        if trimmed.len() > max_digits {
            return Err(QueryRejection::TooLong { max: max_digits });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for QueryRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty input"),
            Self::NonDigit => f.write_str("contains non-digit characters"),
            Self::TooLong { max } => write!(f, "longer than {max} digits"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 13;

    #[test]
    fn accepts_plain_digit_strings() {
        let q = PhoneQuery::parse("918123456789", MAX).unwrap();
        assert_eq!(q.as_str(), "918123456789");
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        let q = PhoneQuery::parse("  5551234  ", MAX).unwrap();
        assert_eq!(q.as_str(), "5551234");
        // Interior whitespace is not collapsed; it is a rejection.
        assert_eq!(
            PhoneQuery::parse("555 1234", MAX),
            Err(QueryRejection::NonDigit)
        );
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert_eq!(PhoneQuery::parse("", MAX), Err(QueryRejection::Empty));
        assert_eq!(PhoneQuery::parse("   ", MAX), Err(QueryRejection::Empty));
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(
            PhoneQuery::parse("abc123", MAX),
            Err(QueryRejection::NonDigit)
        );
        assert_eq!(
            PhoneQuery::parse("+919876543210", MAX),
            Err(QueryRejection::NonDigit)
        );
    }

    #[test]
    fn rejects_over_length() {
        assert!(PhoneQuery::parse("1234567890123", MAX).is_ok());
        assert_eq!(
            PhoneQuery::parse("12345678901234", MAX),
            Err(QueryRejection::TooLong { max: MAX })
        );
    }
}
