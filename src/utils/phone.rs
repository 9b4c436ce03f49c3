use thiserror::Error;

/// Minimum digit count for a number we are willing to look up,
/// country code included.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Country calling code assumed for bare domestic numbers. The funnel's
/// audience is Brazilian; an 11-digit number without a leading 55 is read
/// as DDD + subscriber and gets the prefix prepended. Numbers from other
/// locales pass through untouched.
pub const DEFAULT_COUNTRY_PREFIX: &str = "55";

/// Length of a domestic number without the country prefix (2-digit DDD +
/// 9-digit mobile).
const DOMESTIC_NUMBER_LEN: usize = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidPhone {
    #[error("phone number is required")]
    Empty,
    #[error("phone number must contain at least {} digits", MIN_PHONE_DIGITS)]
    TooShort,
}

/// Reduces user input to a digits-only, country-prefixed number.
pub fn normalize_phone(raw: &str) -> Result<String, InvalidPhone> {
    if raw.trim().is_empty() {
        return Err(InvalidPhone::Empty);
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(InvalidPhone::TooShort);
    }

    if digits.len() == DOMESTIC_NUMBER_LEN && !digits.starts_with(DEFAULT_COUNTRY_PREFIX) {
        return Ok(format!("{}{}", DEFAULT_COUNTRY_PREFIX, digits));
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input() {
        assert_eq!(normalize_phone(""), Err(InvalidPhone::Empty));
        assert_eq!(normalize_phone("   "), Err(InvalidPhone::Empty));
    }

    #[test]
    fn rejects_short_numbers() {
        assert_eq!(normalize_phone("123456789"), Err(InvalidPhone::TooShort));
        assert_eq!(normalize_phone("(11) 9876-54"), Err(InvalidPhone::TooShort));
        // no digits at all is short, not empty
        assert_eq!(normalize_phone("abc"), Err(InvalidPhone::TooShort));
    }

    #[test]
    fn strips_formatting() {
        assert_eq!(
            normalize_phone("+55 (11) 98765-4321").as_deref(),
            Ok("5511987654321")
        );
    }

    #[test]
    fn prefixes_bare_domestic_numbers() {
        assert_eq!(
            normalize_phone("11987654321").as_deref(),
            Ok("5511987654321")
        );
    }

    #[test]
    fn keeps_numbers_already_prefixed() {
        // 11 digits starting with 55 is taken as already carrying the prefix
        assert_eq!(normalize_phone("55119876543").as_deref(), Ok("55119876543"));
        assert_eq!(
            normalize_phone("5511987654321").as_deref(),
            Ok("5511987654321")
        );
    }

    #[test]
    fn leaves_other_lengths_alone() {
        // 10 digits could be a foreign number with its own prefix
        assert_eq!(normalize_phone("1198765432").as_deref(), Ok("1198765432"));
        assert_eq!(
            normalize_phone("447911123456").as_deref(),
            Ok("447911123456")
        );
    }
}
