//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a study candidate.
///
/// Always six decimal digits without a leading zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CandId(u32);

impl CandId {
    /// Smallest valid candidate identifier.
    pub const MIN: u32 = 100_000;

    /// Largest valid candidate identifier.
    pub const MAX: u32 = 999_999;

    /// Creates a CandId, returning error if outside the six digit range.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "cand_id",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CandId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationError::empty_field("cand_id"));
        }
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid_format(
                "cand_id",
                "must be exactly 6 digits",
            ));
        }
        if s.starts_with('0') {
            return Err(ValidationError::invalid_format(
                "cand_id",
                "must not start with 0",
            ));
        }
        let value = s
            .parse::<u32>()
            .map_err(|e| ValidationError::invalid_format("cand_id", e.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<u32> for CandId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CandId> for u32 {
    fn from(id: CandId) -> Self {
        id.0
    }
}

/// Identifier of a feedback thread row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(i64);

impl FeedbackId {
    /// Creates a FeedbackId from a raw integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Coerces a raw form value into an identifier.
    ///
    /// Reads the leading numeric prefix after whitespace: an optional sign,
    /// digits, an optional `.` fraction and an optional `e` exponent. Decimal
    /// and exponent forms truncate toward zero. Anything after the prefix is
    /// ignored, input without one yields `0`, out-of-range values saturate.
    pub fn coerce(raw: &str) -> Self {
        let s = raw.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
        let bytes = s.as_bytes();
        let digits_from = |start: usize| {
            bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let sign_len = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
        let int_len = digits_from(sign_len);
        let mut end = sign_len + int_len;

        let mut fractional = false;
        if bytes.get(end) == Some(&b'.') {
            let frac_len = digits_from(end + 1);
            if int_len > 0 || frac_len > 0 {
                end += 1 + frac_len;
                fractional = true;
            }
        }
        if int_len == 0 && !fractional {
            return Self(0);
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let exp_sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
            let exp_len = digits_from(end + 1 + exp_sign);
            if exp_len > 0 {
                end += 1 + exp_sign + exp_len;
                fractional = true;
            }
        }

        if fractional {
            // `as` truncates toward zero and saturates
            return Self(s[..end].parse::<f64>().map_or(0, |v| v as i64));
        }

        let negative = bytes.first() == Some(&b'-');
        let value = bytes[sign_len..end].iter().fold(0i64, |acc, b| {
            let digit = i64::from(b - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        });

        Self(value)
    }

    /// Returns the numeric value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User identifier (from the authentication provider).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
