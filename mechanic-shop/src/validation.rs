//! Field Validation
//!
//! Pure checks for the text a user types at the console. Each validator
//! returns `Ok` when the input is acceptable, or a [`ValidationError`]
//! naming the field and the rule that was broken. Validators for numeric
//! fields return the parsed value.
//!
//! The console re-prompts until a validator accepts:
//!
//! ```rust,ignore
//! use mechanic_shop::validation::validators;
//!
//! let phone = console.prompt_with("Phone number: ", |input| {
//!     validators::validate_phone(input).map(|()| input.to_string())
//! })?;
//! ```

use serde::Deserialize;
use std::fmt;

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Inclusive range of model years accepted for new cars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct YearRange {
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min_year: 1970,
            max_year: 2019,
        }
    }
}

/// Validators for every field the shop collects
pub mod validators {
    use super::{ValidationError, YearRange};

    pub const MAX_NAME_LEN: usize = 32;
    pub const MAX_MAKE_MODEL_LEN: usize = 32;
    pub const VIN_LEN: usize = 16;
    pub const MAX_EXPERIENCE: i32 = 99;

    fn is_digits(value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
    }

    /// Validate string length (in characters) is within range
    pub fn validate_length(
        field: &str,
        value: &str,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Result<(), ValidationError> {
        let len = value.chars().count();

        if let Some(min_len) = min {
            if len < min_len {
                return Err(ValidationError::new(
                    field,
                    format!("must be at least {min_len} characters"),
                ));
            }
        }

        if let Some(max_len) = max {
            if len > max_len {
                return Err(ValidationError::new(
                    field,
                    format!("must be at most {max_len} characters"),
                ));
            }
        }

        Ok(())
    }

    /// First or last name: 1-32 letters, hyphens, apostrophes or spaces.
    pub fn validate_name(field: &str, value: &str) -> Result<(), ValidationError> {
        validate_required(field, value)?;
        validate_length(field, value, Some(1), Some(MAX_NAME_LEN))?;
        if !value
            .chars()
            .all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | ' '))
        {
            return Err(ValidationError::new(
                field,
                "only letters, hyphens, apostrophes and spaces are allowed",
            ));
        }
        Ok(())
    }

    /// Phone number in the exact shape `(DDD)DDD-DDDD`.
    pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
        const SHAPE: &[u8] = b"(ddd)ddd-dddd";

        let bytes = value.as_bytes();
        let matches_shape = bytes.len() == SHAPE.len()
            && bytes.iter().zip(SHAPE).all(|(&b, &s)| match s {
                b'd' => b.is_ascii_digit(),
                fixed => b == fixed,
            });

        if matches_shape {
            Ok(())
        } else {
            Err(ValidationError::new(
                "phone number",
                "must look like (951)123-4567",
            ))
        }
    }

    /// Street or city: letters, digits, spaces, hyphens and periods.
    pub fn validate_place(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, "this field is required"));
        }
        if !value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '.'))
        {
            return Err(ValidationError::new(
                field,
                "only letters, digits, spaces, hyphens and periods are allowed",
            ));
        }
        Ok(())
    }

    /// Two-letter uppercase state code.
    pub fn validate_state(value: &str) -> Result<(), ValidationError> {
        if value.len() == 2 && value.chars().all(|c| c.is_ascii_uppercase()) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "state",
                "must be two uppercase letters, e.g. CA",
            ))
        }
    }

    /// Five-digit zip code.
    pub fn validate_zip(value: &str) -> Result<(), ValidationError> {
        if value.len() == 5 && is_digits(value) {
            Ok(())
        } else {
            Err(ValidationError::new("zip code", "must be exactly 5 digits"))
        }
    }

    /// Years of experience, 0 to 99.
    pub fn parse_experience(value: &str) -> Result<i32, ValidationError> {
        let err = || {
            ValidationError::new(
                "years of experience",
                format!("must be a whole number from 0 to {MAX_EXPERIENCE}"),
            )
        };
        if !is_digits(value) {
            return Err(err());
        }
        match value.parse::<i32>() {
            Ok(years) if years <= MAX_EXPERIENCE => Ok(years),
            _ => Err(err()),
        }
    }

    /// 16 ASCII alphanumerics with at least one letter and one digit.
    pub fn validate_vin(value: &str) -> Result<(), ValidationError> {
        if value.len() != VIN_LEN || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::new(
                "VIN",
                format!("must be exactly {VIN_LEN} letters and digits"),
            ));
        }
        if !value.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::new("VIN", "must contain at least one letter"));
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new("VIN", "must contain at least one digit"));
        }
        Ok(())
    }

    fn validate_make_or_model(
        field: &str,
        value: &str,
        extra: &[char],
    ) -> Result<(), ValidationError> {
        validate_length(field, value.trim(), Some(1), None)?;
        validate_length(field, value, None, Some(MAX_MAKE_MODEL_LEN))?;
        if !value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '.') || extra.contains(&c))
        {
            return Err(ValidationError::new(
                field,
                "contains characters that are not allowed",
            ));
        }
        Ok(())
    }

    /// Car make, e.g. `Rolls-Royce` or `A&W`.
    pub fn validate_make(value: &str) -> Result<(), ValidationError> {
        validate_make_or_model("make", value, &['&'])
    }

    pub fn validate_model(value: &str) -> Result<(), ValidationError> {
        validate_make_or_model("model", value, &[])
    }

    /// Four-digit model year inside `range`.
    pub fn parse_year(value: &str, range: YearRange) -> Result<i32, ValidationError> {
        if value.len() != 4 || !is_digits(value) {
            return Err(ValidationError::new("year", "must be exactly 4 digits"));
        }
        let year: i32 = value
            .parse()
            .map_err(|_| ValidationError::new("year", "must be exactly 4 digits"))?;
        if year < range.min_year || year > range.max_year {
            return Err(ValidationError::new(
                "year",
                format!("must be between {} and {}", range.min_year, range.max_year),
            ));
        }
        Ok(year)
    }

    fn parse_whole(field: &str, value: &str) -> Result<i32, ValidationError> {
        if !is_digits(value) {
            return Err(ValidationError::new(field, "digits only"));
        }
        value
            .parse()
            .map_err(|_| ValidationError::new(field, "number is too large"))
    }

    /// Bill amount in whole dollars.
    pub fn parse_bill(value: &str) -> Result<i32, ValidationError> {
        parse_whole("bill", value)
    }

    pub fn parse_odometer(value: &str) -> Result<i32, ValidationError> {
        parse_whole("odometer", value)
    }

    /// Identifier typed by the user, e.g. a service request number.
    pub fn parse_id(field: &str, value: &str) -> Result<i32, ValidationError> {
        parse_whole(field, value)
    }

    /// Number of rows for a top-k report, must be > 0.
    pub fn parse_top_k(value: &str) -> Result<u64, ValidationError> {
        match parse_whole("k", value)? {
            0 => Err(ValidationError::new("k", "must be greater than 0")),
            k => Ok(k.unsigned_abs().into()),
        }
    }

    /// Value is not blank
    pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, "this field is required"));
        }
        Ok(())
    }
}
