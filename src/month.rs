//! Month tokens in the ledger's `Mon-YY` form.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::Error;

/// A `Mon-YY` month label such as `"Jan-25"`.
///
/// The raw label is preserved verbatim and is what queries group and match
/// on; [MonthToken::sort_key] resolves the label to a calendar date so that
/// monthly series sort chronologically rather than lexically.
///
/// Two-digit years below 50 map to the 2000s, the rest to the 1900s, so
/// `"Dec-49"` is December 2049 and `"Jan-50"` is January 1950.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthToken(String);

impl MonthToken {
    /// Wrap a raw month label without validation.
    ///
    /// The ledger's source tables are trusted, so their labels are taken
    /// as-is. A label that does not match the `Mon-YY` grammar still groups
    /// and matches by exact string, but sorts as if it were January (see
    /// [MonthToken::sort_key]). Use the [FromStr] impl when the label comes
    /// from user input and must be well-formed.
    pub fn new(label: &str) -> Self {
        Self(label.to_string())
    }

    /// The raw label, e.g. `"Jan-25"`.
    pub fn label(&self) -> &str {
        &self.0
    }

    /// The first day of the month this token names, for chronological
    /// ordering.
    ///
    /// Malformed labels degrade silently instead of failing: an unknown
    /// month abbreviation sorts as January and an unreadable year sorts as
    /// 2000. A warning is logged so the degradation is observable.
    pub fn sort_key(&self) -> Date {
        let (month_part, year_part) = match self.0.split_once('-') {
            Some(parts) => parts,
            None => (self.0.as_str(), ""),
        };

        let month = match month_from_abbreviation(month_part) {
            Some(month) => month,
            None => {
                tracing::warn!(
                    "unknown month abbreviation in token \"{}\", sorting as January",
                    self.0
                );
                Month::January
            }
        };

        let year = match year_part.parse::<i32>() {
            Ok(two_digit) if (0..100).contains(&two_digit) => expand_two_digit_year(two_digit),
            _ => {
                tracing::warn!("unreadable year in token \"{}\", sorting as 2000", self.0);
                2000
            }
        };

        Date::from_calendar_date(year, month, 1).expect("first of the month is always a valid date")
    }
}

impl AsRef<str> for MonthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for MonthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MonthToken {
    type Err = Error;

    /// Parse a month token strictly: a known three-letter month
    /// abbreviation, a hyphen, and exactly two digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((month_part, year_part)) = s.split_once('-') else {
            return Err(Error::InvalidMonthToken(s.to_string()));
        };

        let well_formed = month_from_abbreviation(month_part).is_some()
            && year_part.len() == 2
            && year_part.bytes().all(|byte| byte.is_ascii_digit());

        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::InvalidMonthToken(s.to_string()))
        }
    }
}

/// Maps a two-digit year onto a full year: values below 50 land in the
/// 2000s, the rest in the 1900s.
fn expand_two_digit_year(two_digit: i32) -> i32 {
    if two_digit < 50 {
        2000 + two_digit
    } else {
        1900 + two_digit
    }
}

fn month_from_abbreviation(abbreviation: &str) -> Option<Month> {
    match abbreviation {
        "Jan" => Some(Month::January),
        "Feb" => Some(Month::February),
        "Mar" => Some(Month::March),
        "Apr" => Some(Month::April),
        "May" => Some(Month::May),
        "Jun" => Some(Month::June),
        "Jul" => Some(Month::July),
        "Aug" => Some(Month::August),
        "Sep" => Some(Month::September),
        "Oct" => Some(Month::October),
        "Nov" => Some(Month::November),
        "Dec" => Some(Month::December),
        _ => None,
    }
}
