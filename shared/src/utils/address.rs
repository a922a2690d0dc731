//! Addressing data validation and masking.
//!
//! Transporters use these helpers to sanity-check the channel addressing
//! data they are handed and to keep raw addresses out of log output.

use once_cell::sync::Lazy;
use regex::Regex;

/// E.164 phone number pattern (+ followed by 8 to 15 digits, no leading zero).
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{7,14}$").expect("valid phone regex"));

/// Minimal email shape check; full RFC validation is the mail gateway's job.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Check whether a phone number is in E.164 format.
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Check whether an address looks like an email address.
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_REGEX.is_match(address)
}

/// Mask addressing data for logging, keeping only the last four characters.
/// Operates on characters, not bytes, so multi-byte addresses never split.
pub fn mask_address(address: &str) -> String {
    let total = address.chars().count();
    if total <= 4 {
        return "*".repeat(total);
    }
    let visible: String = address.chars().skip(total - 4).collect();
    format!("{}{}", "*".repeat(total - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_phone_numbers() {
        assert!(is_valid_phone_number("+61412345678"));
        assert!(is_valid_phone_number("+14155552671"));
        assert!(is_valid_phone_number("+8613912345678"));
    }

    #[test]
    fn invalid_phone_numbers() {
        assert!(!is_valid_phone_number("61412345678")); // missing +
        assert!(!is_valid_phone_number("+0412345678")); // leading zero
        assert!(!is_valid_phone_number("+123")); // too short
        assert!(!is_valid_phone_number("+1234567890123456")); // too long
        assert!(!is_valid_phone_number("+614 1234 5678")); // spaces
    }

    #[test]
    fn valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn invalid_emails() {
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn masking_keeps_last_four() {
        assert_eq!(mask_address("+61412345678"), "********5678");
        assert_eq!(mask_address("abcd"), "****");
        assert_eq!(mask_address("ab"), "**");
    }

    #[test]
    fn masking_respects_multibyte_characters() {
        assert_eq!(mask_address("ééx"), "***");
        assert_eq!(mask_address("zoë@exämple.com"), "***********.com");
        assert_eq!(mask_address("山田@例え.jp"), "****え.jp");
    }
}
