//! Academic terms and term keys.
//!
//! The roster service keys a school term as a seven-digit string: the
//! four-digit start year, the two-digit end-year suffix, and a one-digit
//! term code. `"2025261"` is 1st Term of school year 2025-2026.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A term within a school year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    First,
    Second,
    Summer,
}

impl Term {
    /// All terms, in school-year order.
    pub const ALL: [Term; 3] = [Term::First, Term::Second, Term::Summer];

    /// The one-digit wire code.
    pub fn code(self) -> u8 {
        match self {
            Term::First => 1,
            Term::Second => 2,
            Term::Summer => 3,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Term::First => "1st Term",
            Term::Second => "2nd Term",
            Term::Summer => "Summer",
        }
    }

    /// Term for a wire code, if valid.
    pub fn from_code(code: u8) -> Option<Term> {
        Term::ALL.iter().copied().find(|t| t.code() == code)
    }
}

/// Error parsing a term key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("term key '{0}' is not a valid <year><yy><term> value")]
pub struct InvalidTermKey(pub String);

/// A validated seven-digit term key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermKey(String);

impl TermKey {
    /// Composes the key for a school year starting in `start_year`.
    pub fn compose(start_year: u16, term: Term) -> Self {
        let suffix = (start_year + 1) % 100;
        Self(format!("{start_year}{suffix:02}{}", term.code()))
    }

    /// Parses and validates a wire-form key.
    ///
    /// The end-year suffix must match the start year plus one, and the
    /// term code must be a known term.
    pub fn parse(raw: &str) -> Result<Self, InvalidTermKey> {
        let invalid = || InvalidTermKey(raw.to_string());
        if raw.len() != 7 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let start_year: u16 = raw[..4].parse().map_err(|_| invalid())?;
        let suffix: u16 = raw[4..6].parse().map_err(|_| invalid())?;
        let code: u8 = raw[6..].parse().map_err(|_| invalid())?;
        if suffix != (start_year + 1) % 100 || Term::from_code(code).is_none() {
            return Err(invalid());
        }
        Ok(Self(raw.to_string()))
    }

    /// The wire-form key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The school year's start year.
    pub fn start_year(&self) -> u16 {
        self.0.get(..4).and_then(|s| s.parse().ok()).unwrap_or(0)
    }

    /// The term within the school year.
    pub fn term(&self) -> Term {
        self.0
            .get(6..)
            .and_then(|s| s.parse().ok())
            .and_then(Term::from_code)
            .unwrap_or(Term::First)
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable term with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermOption {
    /// Label like `1st Term 2025-2026`.
    pub label: String,
    /// The composed term key.
    pub value: TermKey,
}

/// Builds the selectable term list: three school years centered on
/// `base_year`, three terms each, in (year, term) order.
pub fn term_options(base_year: u16) -> Vec<TermOption> {
    let mut options = Vec::with_capacity(9);
    for year in (base_year - 1)..=(base_year + 1) {
        for term in Term::ALL {
            options.push(TermOption {
                label: format!("{} {}-{}", term.label(), year, year + 1),
                value: TermKey::compose(year, term),
            });
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose() {
        assert_eq!(TermKey::compose(2025, Term::First).as_str(), "2025261");
        assert_eq!(TermKey::compose(2025, Term::Summer).as_str(), "2025263");
        // end-year suffix wraps at the century boundary
        assert_eq!(TermKey::compose(2099, Term::Second).as_str(), "2099002");
    }

    #[test]
    fn test_parse_round_trip() {
        let key = TermKey::parse("2025261").unwrap();
        assert_eq!(key.start_year(), 2025);
        assert_eq!(key.term(), Term::First);
        assert_eq!(key, TermKey::compose(2025, Term::First));
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(TermKey::parse("").is_err());
        assert!(TermKey::parse("2025").is_err()); // too short
        assert!(TermKey::parse("20252x1").is_err()); // non-digit
        assert!(TermKey::parse("2025271").is_err()); // suffix is not year+1
        assert!(TermKey::parse("2025264").is_err()); // unknown term code
    }

    #[test]
    fn test_term_codes() {
        for term in Term::ALL {
            assert_eq!(Term::from_code(term.code()), Some(term));
        }
        assert_eq!(Term::from_code(0), None);
        assert_eq!(Term::from_code(4), None);
    }

    #[test]
    fn test_term_options_span_three_years() {
        let options = term_options(2025);
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].label, "1st Term 2024-2025");
        assert_eq!(options[0].value.as_str(), "2024251");
        assert_eq!(options[4].label, "2nd Term 2025-2026");
        assert_eq!(options[8].label, "Summer 2026-2027");
        assert_eq!(options[8].value.as_str(), "2026273");
    }

    #[test]
    fn test_term_key_serde_is_transparent() {
        let key = TermKey::compose(2025, Term::Second);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025262\"");
    }
}
