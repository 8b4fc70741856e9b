//! Short-year newtype and the year-span normaliser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YearError;

/// Century prefix applied to every two-digit year.
const CENTURY: i32 = 2000;

/// A canonical `YY-YY` year span, e.g. `23-24`.
///
/// Both halves are kept as two-digit numbers (0..=99). Ordering compares the
/// first half, then the second, which is ascending calendar order for spans
/// within one century.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortYear {
    start: u8,
    end: u8,
}

impl ShortYear {
    /// Creates a span from its two-digit halves.
    ///
    /// Returns `None` if either half is greater than 99.
    pub fn new(start: u8, end: u8) -> Option<Self> {
        (start <= 99 && end <= 99).then_some(Self { start, end })
    }

    /// Two-digit first half.
    pub fn start(self) -> u8 {
        self.start
    }

    /// Two-digit second half.
    pub fn end(self) -> u8 {
        self.end
    }

    /// Four-digit calendar year of the first half, assuming the 21st century.
    pub fn numeric_year(self) -> i32 {
        CENTURY + i32::from(self.start)
    }
}

impl fmt::Display for ShortYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.start, self.end)
    }
}

impl FromStr for ShortYear {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_year(s)
    }
}

impl TryFrom<String> for ShortYear {
    type Error = YearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize_year(&value)
    }
}

impl From<ShortYear> for String {
    fn from(value: ShortYear) -> Self {
        value.to_string()
    }
}

/// Normalises a year-span string into a [`ShortYear`].
///
/// Accepts `YY-YY`, `YYYY-YY`, `YY-YYYY` and `YYYY-YYYY`, with `-` or `_` as
/// the separator. Four-digit parts keep their last two digits.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`YearError::Empty`] | blank input |
/// | [`YearError::MissingSeparator`] | zero or several separators |
/// | [`YearError::UnsupportedLength`] | a part that is not 2 or 4 characters |
/// | [`YearError::NonNumeric`] | a part with non-digit characters |
///
/// # Examples
///
/// ```
/// use ecotrend_years::normalize_year;
///
/// assert_eq!(normalize_year("23-24").unwrap().to_string(), "23-24");
/// assert_eq!(normalize_year("2023-2024").unwrap().to_string(), "23-24");
/// assert_eq!(normalize_year("2023-24").unwrap().to_string(), "23-24");
/// assert!(normalize_year("abc").is_err());
/// ```
pub fn normalize_year(input: &str) -> Result<ShortYear, YearError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(YearError::Empty);
    }

    let unified = trimmed.replace('_', "-");
    let parts: Vec<&str> = unified.split('-').collect();
    let [first, second] = parts.as_slice() else {
        return Err(YearError::MissingSeparator {
            input: input.to_string(),
        });
    };

    let start = two_digit_half(first, input)?;
    let end = two_digit_half(second, input)?;
    Ok(ShortYear { start, end })
}

/// Reduces one half of a span to its two-digit value.
fn two_digit_half(part: &str, input: &str) -> Result<u8, YearError> {
    if part.len() != 2 && part.len() != 4 {
        return Err(YearError::UnsupportedLength {
            input: input.to_string(),
            len: part.len(),
        });
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(YearError::NonNumeric {
            input: input.to_string(),
        });
    }
    let tail = &part.as_bytes()[part.len() - 2..];
    Ok((tail[0] - b'0') * 10 + (tail[1] - b'0'))
}
