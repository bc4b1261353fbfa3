//! # String Formats
//!
//! The three recognised `format` values. Any other name is not a [`Format`]
//! and is skipped by the string evaluator.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use url::Url;

/// Local date-time layouts accepted in addition to RFC 3339 and RFC 2822.
const NAIVE_DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Uri,
    DateTime,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "uri" => Some(Self::Uri),
            "date-time" => Some(Self::DateTime),
            _ => None,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Email => is_email(value),
            Self::Uri => Url::parse(value).is_ok(),
            Self::DateTime => is_date_time(value),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Email => "Value must be a valid email",
            Self::Uri => "Value must be a valid URI",
            Self::DateTime => "Value must be a valid date-time string",
        }
    }
}

/// `local@domain`: no whitespace, exactly one `@`, and a domain with a dot
/// that has at least one character on each side.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |part: &str| {
        !part.is_empty() && !part.contains('@') && !part.chars().any(char::is_whitespace)
    };
    clean(local)
        && clean(domain)
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn is_date_time(value: &str) -> bool {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value).is_ok()
        || DateTime::parse_from_rfc2822(value).is_ok()
        || NAIVE_DATE_TIME_LAYOUTS
            .iter()
            .any(|layout| NaiveDateTime::parse_from_str(value, layout).is_ok())
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
