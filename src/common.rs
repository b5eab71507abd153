use std::{fmt::Display, str::FromStr};

use anyhow::{bail, Context, Result};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Handler failures. Fetch failures never get here: pages render their empty state instead.
#[derive(Debug)]
pub enum AppError {
    Code(StatusCode),
}

// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Code(c) => (c, c.to_string()).into_response(),
        }
    }
}

// This enables using `?` on a `Result<_, StatusCode>` inside handlers.
impl From<StatusCode> for AppError {
    fn from(err: StatusCode) -> Self {
        Self::Code(err)
    }
}

/// A named grouping of courses, each with its own backend endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(u8);

impl Phase {
    pub fn new(number: u8) -> Self {
        Phase(number)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Path segment used by the site, e.g. `phase3`
    pub fn slug(self) -> String {
        format!("phase{}", self.0)
    }

    pub fn human_display(self) -> String {
        format!("Phase {}", self.0)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Phase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = match s.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("phase") => &s[5..],
            _ => s,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            bail!("phase should be a number, optionally prefixed with \"phase\", but was {s:?}")
        }
        let number: u8 = digits
            .parse()
            .with_context(|| format!("failed to parse phase number from {s:?}"))?;
        if number == 0 {
            bail!("phase numbers start at 1")
        }
        Ok(Phase(number))
    }
}

/// Keys checked, in order, for a record's display title.
const TITLE_KEYS: [&str; 3] = ["title", "name", "course_name"];

/// One item of the backend's course collection. The structure is opaque: nothing is
/// validated, and presentation only reads the attributes it knows how to show.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseRecord(Value);

impl CourseRecord {
    pub fn new(value: Value) -> Self {
        CourseRecord(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn title(&self) -> Option<String> {
        TITLE_KEYS
            .iter()
            .find_map(|key| self.attribute(key).filter(|t| !t.is_empty()))
    }

    /// Key of the attribute `title()` was taken from
    fn title_key(&self) -> Option<&'static str> {
        TITLE_KEYS
            .into_iter()
            .find(|key| self.attribute(key).is_some_and(|t| !t.is_empty()))
    }

    /// The displayable text of a scalar attribute, if the record is an object and has one.
    pub fn attribute(&self, key: &str) -> Option<String> {
        self.0.as_object()?.get(key).and_then(display_value)
    }

    /// Scalar attributes in the order the backend sent them.
    pub fn attributes(&self) -> Vec<(&str, String)> {
        let Some(object) = self.0.as_object() else {
            return Vec::new();
        };
        object
            .iter()
            .filter_map(|(k, v)| display_value(v).map(|v| (k.as_str(), v)))
            .collect()
    }

    /// Scalar attributes minus the one used as the title.
    pub fn details(&self) -> Vec<(&str, String)> {
        let title_key = self.title_key();
        self.attributes()
            .into_iter()
            .filter(|(k, _)| Some(*k) != title_key)
            .collect()
    }
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "yes" } else { "no" }.to_string()),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().filter_map(display_value).collect();
            (!items.is_empty()).then(|| items.join(", "))
        }
    }
}

/// Records in backend response order. Replaced wholesale, never merged.
pub type CourseCollection = Vec<CourseRecord>;

/// `start_date` and `startDate` both become `Start Date`
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in key.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
