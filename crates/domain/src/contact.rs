//! Shape predicates for warehouse contact details.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Digit groups, optionally parenthesised, joined by at most one separator.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(?:\(\d+\)|\d+)(?:[ .-]?(?:\(\d+\)|\d+))*$").expect("phone pattern compiles")
});

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Whether `value` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether `value` looks like a phone number: optional leading `+`,
/// 10 to 15 digits, optionally grouped with spaces, dots, dashes or
/// parentheses.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    if !PHONE_RE.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
