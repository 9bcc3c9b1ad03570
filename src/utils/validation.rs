use crate::utils::error::{AssistantError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const PHONE_DIGITS: usize = 10;

static BIRTHDAY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Exactly ten ASCII digits. Separators are not stripped.
pub fn validate_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// `DD.MM.YYYY` naming a real calendar date.
pub fn validate_birthday(value: &str) -> bool {
    parse_birthday(value).is_some()
}

pub fn parse_birthday(value: &str) -> Option<NaiveDate> {
    let caps = BIRTHDAY_PATTERN.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    // from_ymd_opt rejects 31.04 and 29.02 outside leap years
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AssistantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AssistantError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
