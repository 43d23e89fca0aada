//! Time filters for aggregation queries.

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::{Error, month::MonthToken};

/// A time filter: a whole calendar year or one exact month.
///
/// Queries take `Option<&Timeframe>`; `None` means no time filtering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Timeframe {
    /// Every month whose token ends with the year's two-digit suffix.
    Year(i32),
    /// Exactly the month with this token.
    Month(MonthToken),
}

impl Timeframe {
    /// Whether an entry booked under `token` falls inside this timeframe.
    ///
    /// Year matching is by string suffix on the raw token, so `Year(2025)`
    /// matches any token ending in `"-25"`. Month matching is exact label
    /// equality.
    pub fn matches(&self, token: &MonthToken) -> bool {
        match self {
            Timeframe::Year(year) => {
                let suffix = format!("-{:02}", year.rem_euclid(100));
                token.label().ends_with(&suffix)
            }
            Timeframe::Month(month) => token.label() == month.label(),
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timeframe::Year(year) => write!(f, "{year}"),
            Timeframe::Month(month) => write!(f, "{month}"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = Error;

    /// Parse a timeframe from user input: a 4-digit string is a year,
    /// a well-formed `Mon-YY` token is a month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 4 && s.bytes().all(|byte| byte.is_ascii_digit()) {
            let year = s.parse().expect("4 ascii digits always parse as i32");
            return Ok(Timeframe::Year(year));
        }

        s.parse::<MonthToken>()
            .map(Timeframe::Month)
            .map_err(|_| Error::InvalidTimeframe(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, month::MonthToken, timeframe::Timeframe};

    #[test]
    fn year_matches_two_digit_suffix() {
        let timeframe = Timeframe::Year(2025);

        assert!(timeframe.matches(&MonthToken::new("Jan-25")));
        assert!(timeframe.matches(&MonthToken::new("Dec-25")));
        assert!(!timeframe.matches(&MonthToken::new("Dec-24")));
    }

    #[test]
    fn month_matches_exact_token_only() {
        let timeframe = Timeframe::Month(MonthToken::new("Feb-25"));

        assert!(timeframe.matches(&MonthToken::new("Feb-25")));
        assert!(!timeframe.matches(&MonthToken::new("Feb-24")));
        assert!(!timeframe.matches(&MonthToken::new("Jan-25")));
    }

    #[test]
    fn parses_year_and_month_strings() {
        assert_eq!("2025".parse(), Ok(Timeframe::Year(2025)));
        assert_eq!(
            "Mar-25".parse(),
            Ok(Timeframe::Month(MonthToken::new("Mar-25")))
        );
    }

    #[test]
    fn rejects_strings_that_are_neither() {
        for input in ["25", "20251", "March 2025", "Foo-25", ""] {
            let got = input.parse::<Timeframe>();

            assert_eq!(got, Err(Error::InvalidTimeframe(input.to_string())));
        }
    }
}
