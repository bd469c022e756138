//! Phone number validation for the North American Numbering Plan
//!
//! Accepted shapes: `415-555-0100`, `(415) 555-0100`, `415.555.0100`,
//! `4155550100`, `+1 415 555 0100`, `1-415-555-0100`. Only ASCII digits are
//! accepted and parentheses must enclose the whole area code.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static NANP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:\+?1[ .-]?)?(?:\(([0-9]{3})\) ?|([0-9]{3})[ .-]?)([0-9]{3})[ .-]?([0-9]{4})$",
    )
    .expect("NANP pattern is valid")
});

/// Validated phone number split into its NANP parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub area_code: String,
    pub exchange: String,
    pub line: String,
}

impl PhoneNumber {
    /// Parse and validate a phone number
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let caps = NANP_PATTERN
            .captures(trimmed)
            .ok_or_else(|| Error::Validation(format!("Invalid phone number: {}", input)))?;

        // Area code is either parenthesised (group 1) or bare (group 2)
        let area_code = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let number = Self {
            area_code,
            exchange: caps[3].to_string(),
            line: caps[4].to_string(),
        };

        if !is_valid_prefix(&number.area_code) {
            return Err(Error::Validation(format!(
                "Invalid phone number: area code {} is not assignable",
                number.area_code
            )));
        }
        if !is_valid_prefix(&number.exchange) {
            return Err(Error::Validation(format!(
                "Invalid phone number: exchange {} is not assignable",
                number.exchange
            )));
        }

        Ok(number)
    }

    /// Canonical `NNN-NNN-NNNN` form
    pub fn formatted(&self) -> String {
        format!("{}-{}-{}", self.area_code, self.exchange, self.line)
    }
}

/// Area codes and exchanges start with 2-9 and are never N11 service codes
fn is_valid_prefix(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    bytes.len() == 3 && (b'2'..=b'9').contains(&bytes[0]) && !(bytes[1] == b'1' && bytes[2] == b'1')
}

/// Validate a phone number, returning its canonical form
pub fn validate_phone(input: &str) -> Result<String> {
    PhoneNumber::parse(input).map(|n| n.formatted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_formats() {
        for input in [
            "415-555-0100",
            "(415) 555-0100",
            "415.555.0100",
            "4155550100",
            "+1 415 555 0100",
            "1-415-555-0100",
            "1 (415) 555-0100",
            "(415)555-0100",
            "  212-555-0199  ",
        ] {
            assert!(PhoneNumber::parse(input).is_ok(), "{} should be valid", input);
        }
    }

    #[test]
    fn test_formats_canonically() {
        assert_eq!(validate_phone("(415) 555-0100").unwrap(), "415-555-0100");
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(matches!(
            PhoneNumber::parse("not-a-number"),
            Err(Error::Validation(_))
        ));
        assert!(PhoneNumber::parse("").is_err());
        assert!(PhoneNumber::parse("555-0100").is_err());
        assert!(PhoneNumber::parse("415-555-01000").is_err());
    }

    #[test]
    fn test_rejects_unbalanced_parentheses() {
        assert!(PhoneNumber::parse("(415 555-0100").is_err());
        assert!(PhoneNumber::parse("415) 555-0100").is_err());
        assert!(PhoneNumber::parse("(415)-555-0100").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits in the line number
        assert!(PhoneNumber::parse("415-555-\u{660}\u{661}\u{660}\u{660}").is_err());
        // Full-width digits throughout
        assert!(PhoneNumber::parse("\u{ff14}\u{ff11}\u{ff15}5550100").is_err());
    }

    #[test]
    fn test_rejects_unassignable_prefixes() {
        // Area code starting with 0/1
        assert!(PhoneNumber::parse("123-555-0100").is_err());
        // N11 area code
        assert!(PhoneNumber::parse("911-555-0100").is_err());
        // Exchange starting with 1
        assert!(PhoneNumber::parse("415-155-0100").is_err());
        // N11 exchange
        assert!(PhoneNumber::parse("415-411-0100").is_err());
    }
}
