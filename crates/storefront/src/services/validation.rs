//! Form field validation.
//!
//! Each check returns the cleaned value or a [`FieldError`]; handlers collect
//! failures into [`FormErrors`], which renders them in the visitor's locale.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tradehub_core::Email;

use crate::i18n::Messages;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Korean business registration number: `NNN-NN-NNNNN`.
static BUSINESS_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{2}-[0-9]{5}$").expect("business number pattern is valid")
});

/// A single field's validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Email,
    PasswordPolicy,
    PasswordMismatch,
    BusinessNumber,
    QuantityNumber,
    QuantityMin(u32),
    QuantityMax(u32),
}

impl FieldError {
    /// Localized message for this failure.
    #[must_use]
    pub fn message(self, t: &Messages) -> String {
        match self {
            Self::Required => t.err_required.to_string(),
            Self::Email => t.err_email.to_string(),
            Self::PasswordPolicy => t.err_password_policy.to_string(),
            Self::PasswordMismatch => t.err_password_mismatch.to_string(),
            Self::BusinessNumber => t.err_business_number.to_string(),
            Self::QuantityNumber => t.err_quantity_number.to_string(),
            Self::QuantityMin(min) => format!("{} {min}", t.err_quantity_min),
            Self::QuantityMax(max) => format!("{} {max}", t.err_quantity_max),
        }
    }
}

/// A non-empty value, trimmed.
///
/// # Errors
///
/// [`FieldError::Required`] if nothing but whitespace was submitted.
pub fn required(value: &str) -> Result<&str, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(value)
    }
}

/// A well-formed email address.
///
/// # Errors
///
/// [`FieldError::Required`] for blank input, [`FieldError::Email`] otherwise.
pub fn email(value: &str) -> Result<Email, FieldError> {
    Email::parse(required(value)?).map_err(|_| FieldError::Email)
}

/// At least eight characters including a letter, a digit and a symbol.
///
/// # Errors
///
/// [`FieldError::PasswordPolicy`] if any rule is not met.
pub fn password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }

    let long_enough = value.chars().count() >= MIN_PASSWORD_CHARS;
    let has_letter = value.chars().any(char::is_alphabetic);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if long_enough && has_letter && has_digit && has_symbol {
        Ok(())
    } else {
        Err(FieldError::PasswordPolicy)
    }
}

/// The confirmation must repeat the password exactly.
///
/// # Errors
///
/// [`FieldError::PasswordMismatch`] if the two differ.
pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if password == confirmation {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}

/// A business registration number in `NNN-NN-NNNNN` form.
///
/// # Errors
///
/// [`FieldError::BusinessNumber`] if the format does not match.
pub fn business_number(value: &str) -> Result<&str, FieldError> {
    let value = required(value)?;
    if BUSINESS_NUMBER.is_match(value) {
        Ok(value)
    } else {
        Err(FieldError::BusinessNumber)
    }
}

/// A whole-number quantity within `min..=max`.
///
/// # Errors
///
/// Returns the first rule the value breaks.
pub fn quantity(value: &str, min: u32, max: u32) -> Result<u32, FieldError> {
    let quantity: u32 = required(value)?
        .parse()
        .map_err(|_| FieldError::QuantityNumber)?;
    if quantity < min {
        Err(FieldError::QuantityMin(min))
    } else if quantity > max {
        Err(FieldError::QuantityMax(max))
    } else {
        Ok(quantity)
    }
}

/// Field failures for one form submission, keyed by input name.
#[derive(Debug)]
pub struct FormErrors {
    t: &'static Messages,
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    #[must_use]
    pub const fn new(t: &'static Messages) -> Self {
        Self {
            t,
            errors: BTreeMap::new(),
        }
    }

    /// Record `result` against `field`, returning the value on success.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.errors.entry(field).or_insert_with(|| error.message(self.t));
                None
            }
        }
    }

    /// The message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of failed fields, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use tradehub_core::Locale;

    use super::*;
    use crate::i18n::messages;

    #[test]
    fn test_password_policy() {
        assert_eq!(password("abc123!@"), Ok(()));
        assert_eq!(password("비밀번호123!"), Ok(()));
        assert_eq!(password("short1!"), Err(FieldError::PasswordPolicy));
        assert_eq!(password("abcdefgh1"), Err(FieldError::PasswordPolicy));
        assert_eq!(password("abcdefgh!"), Err(FieldError::PasswordPolicy));
        assert_eq!(password("12345678!"), Err(FieldError::PasswordPolicy));
        assert_eq!(password(""), Err(FieldError::Required));
    }

    #[test]
    fn test_business_number() {
        assert_eq!(business_number("123-45-67890"), Ok("123-45-67890"));
        assert_eq!(business_number(" 123-45-67890 "), Ok("123-45-67890"));
        assert_eq!(business_number("1234567890"), Err(FieldError::BusinessNumber));
        assert_eq!(business_number("123-45-6789"), Err(FieldError::BusinessNumber));
        assert_eq!(business_number("abc-de-fghij"), Err(FieldError::BusinessNumber));
        // Only ASCII digits count; Arabic-Indic and fullwidth look-alikes are rejected
        assert_eq!(business_number("١٢٣-٤٥-٦٧٨٩٠"), Err(FieldError::BusinessNumber));
        assert_eq!(business_number("１２３-４５-６７８９０"), Err(FieldError::BusinessNumber));
        assert_eq!(business_number(""), Err(FieldError::Required));
    }

    #[test]
    fn test_quantity_bounds() {
        assert_eq!(quantity("5", 1, 10), Ok(5));
        assert_eq!(quantity("1", 1, 10), Ok(1));
        assert_eq!(quantity("10", 1, 10), Ok(10));
        assert_eq!(quantity("0", 1, 10), Err(FieldError::QuantityMin(1)));
        assert_eq!(quantity("11", 1, 10), Err(FieldError::QuantityMax(10)));
        assert_eq!(quantity("-3", 1, 10), Err(FieldError::QuantityNumber));
        assert_eq!(quantity("2.5", 1, 10), Err(FieldError::QuantityNumber));
        assert_eq!(quantity(" ", 1, 10), Err(FieldError::Required));
    }

    #[test]
    fn test_email_field() {
        assert!(email("buyer@example.com").is_ok());
        assert_eq!(email("buyer@"), Err(FieldError::Email));
        assert_eq!(email(""), Err(FieldError::Required));
    }

    #[test]
    fn test_form_errors_keep_first_failure_per_field() {
        let t = messages(Locale::EN);
        let mut errors = FormErrors::new(t);

        assert_eq!(errors.check("name", required("Kim")), Some("Kim"));
        assert!(errors.is_empty());

        assert_eq!(errors.check("quantity", quantity("0", 50, 100)), None);
        errors.check("quantity", Err::<(), _>(FieldError::QuantityNumber));

        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 50"));
        assert_eq!(errors.get("name"), None);
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["quantity"]);
    }

    #[test]
    fn test_messages_are_localized() {
        let ko = FieldError::Required.message(messages(Locale::KR));
        let en = FieldError::Required.message(messages(Locale::EN));
        assert_ne!(ko, en);
    }
}
