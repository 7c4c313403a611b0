//! Sanitizers applied to form input on every edit.

/// Maximum length of a username.
pub const USERNAME_MAX_LEN: usize = 20;

/// Maximum number of digits in a phone number.
pub const PHONE_DIGITS: usize = 10;

/// Strips everything but ASCII letters and whitespace.
#[must_use]
pub fn letters_only(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect()
}

/// Strips everything but ASCII digits, keeping at most `max` of them.
#[must_use]
pub fn digits_only(value: &str, max: usize) -> String {
    value.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Strips everything but ASCII letters, digits and `_`, keeping at most
/// [`USERNAME_MAX_LEN`] characters.
#[must_use]
pub fn username(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .take(USERNAME_MAX_LEN)
        .collect()
}

#[cfg(test)]
mod spec {
    use super::{digits_only, letters_only, username};

    #[test]
    fn keeps_letters_and_spaces() {
        assert_eq!(letters_only("Jane O'Doe-2nd"), "Jane ODoend");
        assert_eq!(letters_only("Floor  Mats"), "Floor  Mats");
        assert_eq!(letters_only("Élan"), "lan");
    }

    #[test]
    fn keeps_capped_digits() {
        assert_eq!(digits_only("(555) 123-4567", 10), "5551234567");
        assert_eq!(digits_only("123456789012", 10), "1234567890");
        assert_eq!(digits_only("abc", 10), "");
    }

    #[test]
    fn keeps_username_characters() {
        assert_eq!(username("j.doe_01!"), "jdoe_01");
        assert_eq!(username(&"a".repeat(25)).len(), 20);
    }
}
