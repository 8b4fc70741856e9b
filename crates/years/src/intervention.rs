//! Intervention year with raw, short and numeric forms.

use serde::Serialize;

use crate::error::YearError;
use crate::short_year::{ShortYear, normalize_year};

/// The year a land or water intervention was put in place.
///
/// Keeps the raw label as supplied by the attribute table alongside its
/// normalised [`ShortYear`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterventionYear {
    raw: String,
    short_year: ShortYear,
}

impl InterventionYear {
    /// Parses a raw intervention label.
    ///
    /// # Errors
    ///
    /// Returns the [`YearError`] from [`normalize_year`] when the label is
    /// not a recognised year span.
    pub fn parse(raw: &str) -> Result<Self, YearError> {
        let short_year = normalize_year(raw)?;
        Ok(Self {
            raw: raw.to_string(),
            short_year,
        })
    }

    /// The label as it was supplied.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalised span.
    pub fn short_year(&self) -> ShortYear {
        self.short_year
    }

    /// Four-digit year the intervention started in (`20` + first half).
    pub fn numeric_year(&self) -> i32 {
        self.short_year.numeric_year()
    }
}
