//! Validation rules applied to a draft before its payload is built.
//!
//! Messages are user-facing and end up verbatim in a warning notification.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("O campo {0} é obrigatório")]
    Required(&'static str),

    #[error("Email inválido: {0}")]
    InvalidEmail(String),

    #[error("Data de nascimento inválida: {0}")]
    InvalidDate(String),

    #[error("Capacidade deve ser um número inteiro maior ou igual a 1: {0}")]
    InvalidCapacity(String),

    #[error("Data e hora inválida: {0}")]
    InvalidDateTime(String),

    #[error("CPF inválido: {0}")]
    InvalidCpf(String),
}

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("valid email regex"));

// Also keeps the CPF safe to embed as a URL path segment.
static CPF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z.\-]+$").expect("valid CPF regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

pub fn required(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(label))
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    required("Email", value)?;
    if EMAIL_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(value.to_string()))
    }
}

/// An empty value is accepted; anything else must be `YYYY-MM-DD`.
pub fn optional_date(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

pub fn capacity(value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|capacity| *capacity >= 1)
        .ok_or_else(|| ValidationError::InvalidCapacity(value.to_string()))
}

pub fn date_time(value: &str) -> Result<(), ValidationError> {
    required("Data e Hora", value)?;
    parse_date_time(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::InvalidDateTime(value.to_string()))
}

pub fn cpf(value: &str) -> Result<(), ValidationError> {
    required("CPF", value)?;
    if CPF_PATTERN.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCpf(value.to_string()))
    }
}

/// Parses the `datetime-local` formats, with or without seconds.
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
