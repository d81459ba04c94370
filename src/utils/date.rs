use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::consts::{DATE_FORMAT, TIME_SLOT_FORMAT};
use crate::error::AppError;

static DATE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date label pattern"));

static TIME_SLOT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("time slot pattern"));

/// Directory names of the form YYYY-MM-DD
pub(crate) fn is_date_label(name: &str) -> bool {
    DATE_LABEL.is_match(name)
}

/// Directory names of the form HH-MM-SS
pub(crate) fn is_time_slot_label(name: &str) -> bool {
    TIME_SLOT_LABEL.is_match(name)
}

/// Parse a user-supplied date into the snapshot directory form
pub(crate) fn parse_date(s: &str) -> Result<String, AppError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| AppError::InvalidDate {
            input: trimmed.to_string(),
        })
}

/// Parse a user-supplied time (HH-MM-SS or HH:MM:SS) into a time-slot label
pub(crate) fn parse_time_slot(s: &str) -> Result<String, AppError> {
    let trimmed = s.trim();
    NaiveTime::parse_from_str(trimmed, TIME_SLOT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(|t| t.format(TIME_SLOT_FORMAT).to_string())
        .map_err(|_| AppError::InvalidTime {
            input: trimmed.to_string(),
        })
}
