//! Request body decoding for the student endpoints
//!
//! Bodies are decoded into a loose JSON object first, then into either a
//! `NewStudent` (all three fields required) or a `StudentPatch` (any subset).
//! Field values are rendered to text the way a JavaScript `String(value)`
//! call would, so numbers, booleans, `null`, arrays and objects all become
//! strings rather than errors.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::store::{Student, StudentId};

const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "course"];

/// Reasons a request body is rejected with 400
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of name/email/course missing or falsy on create
    #[error("name, email, course are required")]
    MissingFields(Vec<&'static str>),

    /// Body is a bare JSON string, number, boolean or null
    #[error("Request body must be a JSON object")]
    NotAnObject,

    /// Body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),
}

/// Parse a raw request body into a JSON object.
///
/// A blank body is `{}`. A top-level array carries no named fields and is
/// also read as `{}`.
pub fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Array(_)) => Ok(Map::new()),
        Ok(_) => Err(ValidationError::NotAnObject),
        Err(e) => Err(ValidationError::InvalidJson(e.to_string())),
    }
}

/// Validated create payload, fields already trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
}

impl NewStudent {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !body.get(*field).is_some_and(is_truthy))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(Self {
            name: field_text(&body["name"]),
            email: field_text(&body["email"]),
            course: field_text(&body["course"]),
        })
    }

    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            course: self.course,
        }
    }
}

/// Partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

impl StudentPatch {
    /// Every field present in the body is taken, whatever its value.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            name: body.get("name").map(field_text),
            email: body.get("email").map(field_text),
            course: body.get("course").map(field_text),
        }
    }

    pub fn apply(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
        if let Some(course) = self.course {
            student.course = course;
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Stored form of a field value: its text, trimmed
fn field_text(value: &Value) -> String {
    to_text(value).trim().to_string()
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Integral floats drop the fraction: `1.0` is `"1"`, `-0.0` is `"0"`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}
