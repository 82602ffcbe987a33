//! Lenient numeric parsing.

/// Outcome of a lenient numeric parse.
///
/// Per the dashboard's degradation policy an unparseable count collapses to
/// zero rather than erroring, which makes a malformed cell indistinguishable
/// from a true zero. The two variants keep that distinction visible at the
/// parse site for callers that care.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LenientNumber {
    Parsed(f64),
    Defaulted,
}

impl LenientNumber {
    /// Collapses to the dashboard default: zero.
    pub fn or_zero(self) -> f64 {
        match self {
            Self::Parsed(value) => value,
            Self::Defaulted => 0.0,
        }
    }

    pub fn is_parsed(self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Parses a cell as f64. Empty and malformed cells default.
pub fn parse_lenient(value: &str) -> LenientNumber {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return LenientNumber::Defaulted;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) => LenientNumber::Parsed(parsed),
        Err(_) => LenientNumber::Defaulted,
    }
}
