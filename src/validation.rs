//! Form Validation
//!
//! Required/regex/range checks that collect one message per field.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::FieldErrors;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static USERNAME_RE: OnceLock<Regex> = OnceLock::new();
static PROPERTY_NO_RE: OnceLock<Regex> = OnceLock::new();

pub const MIN_PASSWORD_LEN: usize = 8;

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

fn phone_re() -> &'static Regex {
    // PH mobile: 09XXXXXXXXX or +639XXXXXXXXX
    PHONE_RE.get_or_init(|| Regex::new(r"^(09|\+639)\d{9}$").expect("valid phone regex"))
}

fn username_re() -> &'static Regex {
    USERNAME_RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.]{4,30}$").expect("valid username regex"))
}

fn property_no_re() -> &'static Regex {
    PROPERTY_NO_RE.get_or_init(|| Regex::new(r"^[A-Z0-9][A-Z0-9-]{2,}$").expect("valid property no regex"))
}

/// Collects the first failure per field
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn required(&mut self, field: &str, value: &str, label: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, format!("{} is required", label));
        }
        self
    }

    /// Checked only when non-empty; pair with `required` for mandatory fields
    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() && !email_re().is_match(value) {
            self.fail(field, "Enter a valid email address");
        }
        self
    }

    pub fn phone(&mut self, field: &str, value: &str) -> &mut Self {
        let value = normalize_phone(value);
        if !value.is_empty() && !phone_re().is_match(&value) {
            self.fail(field, "Enter a mobile number like 09171234567");
        }
        self
    }

    pub fn username(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() && !username_re().is_match(value) {
            self.fail(field, "Use 4-30 letters, digits, dots or underscores");
        }
        self
    }

    pub fn property_no(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim().to_uppercase();
        if !value.is_empty() && !property_no_re().is_match(&value) {
            self.fail(field, "Use letters, digits and dashes (e.g. PN-2024-001)");
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize, label: &str) -> &mut Self {
        if !value.is_empty() && value.chars().count() < min {
            self.fail(field, format!("{} must be at least {} characters", label, min));
        }
        self
    }

    pub fn same_as(&mut self, field: &str, value: &str, other: &str, message: &str) -> &mut Self {
        if value != other {
            self.fail(field, message);
        }
        self
    }

    /// Parsed value when `value` is a whole number >= 1
    pub fn positive_int(&mut self, field: &str, value: &str, label: &str) -> Option<u32> {
        match value.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => {
                self.fail(field, format!("{} must be a whole number of at least 1", label));
                None
            }
        }
    }

    /// Parsed value when `value` is a number >= 0 (commas allowed)
    pub fn non_negative_decimal(&mut self, field: &str, value: &str, label: &str) -> Option<f64> {
        let cleaned = value.trim().replace(',', "");
        match cleaned.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Some(n),
            _ => {
                self.fail(field, format!("{} must be a number of at least 0", label));
                None
            }
        }
    }

    pub fn iso_date(&mut self, field: &str, value: &str, label: &str) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.fail(field, format!("{} must be a valid date", label));
                None
            }
        }
    }

    /// Record an error computed outside the built-in rules
    pub fn check(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.fail(field, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Backend field errors take precedence over stale client-side ones
pub fn merge(client: &mut FieldErrors, server: FieldErrors) {
    client.extend(server);
}

/// Trimmed text, or `None` when blank
/// Phone number with spaces and dashes removed
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

pub fn optional(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field_wins() {
        let mut v = Validator::new();
        v.required("email", "", "Email").email("email", "");
        v.required("email", "", "Other");
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
    }

    #[test]
    fn test_email_and_phone_formats() {
        let mut v = Validator::new();
        v.email("a", "teacher@school.edu.ph")
            .phone("b", "0917-123-4567")
            .phone("c", "+639171234567");
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.email("a", "teacher@school").phone("b", "12345");
        let errors = v.finish().unwrap_err();
        assert!(errors.contains_key("a"));
        assert!(errors.contains_key("b"));
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone(" 0917-123 4567 "), "09171234567");
        assert_eq!(normalize_phone("+63 917 123 4567"), "+639171234567");
        assert!(phone_re().is_match(&normalize_phone("0917-123-4567")));
    }

    #[test]
    fn test_username_and_property_no() {
        let mut v = Validator::new();
        v.username("u", "j.dela_cruz").property_no("p", "pn-2024-001");
        assert!(v.finish().is_ok());

        let mut v = Validator::new();
        v.username("u", "abc").property_no("p", "-X");
        assert_eq!(v.finish().unwrap_err().len(), 2);
    }

    #[test]
    fn test_numeric_parsing() {
        let mut v = Validator::new();
        assert_eq!(v.positive_int("q", " 3 ", "Quantity"), Some(3));
        assert_eq!(v.non_negative_decimal("c", "1,250.75", "Unit cost"), Some(1250.75));

        assert_eq!(v.positive_int("q", "0", "Quantity"), None);
        assert_eq!(v.non_negative_decimal("c", "-1", "Unit cost"), None);
        assert_eq!(v.iso_date("d", "2024-02-30", "Date"), None);
        assert_eq!(v.finish().unwrap_err().len(), 3);
    }

    #[test]
    fn test_password_rules() {
        let mut v = Validator::new();
        v.min_len("password", "short", MIN_PASSWORD_LEN, "Password")
            .same_as("confirm", "a", "b", "Passwords do not match");
        let errors = v.finish().unwrap_err();
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password must be at least 8 characters")
        );
        assert!(errors.contains_key("confirm"));
    }

    #[test]
    fn test_merge_prefers_server() {
        let mut client = FieldErrors::new();
        client.insert("email".into(), "client".into());
        let mut server = FieldErrors::new();
        server.insert("email".into(), "Email already taken".into());
        server.insert("username".into(), "Username already taken".into());
        merge(&mut client, server);
        assert_eq!(client.get("email").map(String::as_str), Some("Email already taken"));
        assert_eq!(client.len(), 2);
    }
}
