//! Error-collecting reader over a JSON request body.
//!
//! Every entity payload is validated through [`Fields`], which records a
//! `{ field, rule }` pair for each violation instead of bailing on the first
//! one. Server-assigned fields (`id`, timestamps) and unknown keys in client
//! input are ignored. Numeric fields posted as strings (HTML forms) are
//! coerced before a type mismatch is reported.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single validation violation, reported to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub rule: &'static str,
}

impl FieldError {
    pub fn new(field: impl Into<String>, rule: &'static str) -> Self {
        Self { field: field.into(), rule }
    }
}

/// The complete list of violations found in one payload.
#[derive(Debug)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, rule: &'static str) -> Self {
        Self::new(vec![FieldError::new(field, rule)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "validation failed for fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Consumes a JSON object field by field, accumulating violations.
pub struct Fields {
    map: Map<String, Value>,
    errors: Vec<FieldError>,
}

impl Fields {
    /// Wrap a raw body. Anything other than a JSON object is a single
    /// unrecoverable `body/type` violation.
    pub fn new(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self { map, errors: Vec::new() }),
            _ => Err(ValidationError::single("body", "type")),
        }
    }

    fn fail(&mut self, field: &str, rule: &'static str) {
        self.errors.push(FieldError::new(field, rule));
    }

    /// Remove the field from the payload; explicit JSON null counts as absent.
    fn take(&mut self, key: &str) -> Option<Value> {
        match self.map.remove(key) {
            None | Some(Value::Null) => None,
            some => some,
        }
    }

    fn coerce_i64(value: &Value) -> Option<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn req_string(&mut self, key: &str) -> String {
        match self.take(key) {
            Some(Value::String(s)) => s,
            Some(_) => {
                self.fail(key, "type");
                String::new()
            }
            None => {
                self.fail(key, "missing");
                String::new()
            }
        }
    }

    pub fn opt_string(&mut self, key: &str) -> Option<String> {
        match self.take(key) {
            Some(Value::String(s)) => Some(s),
            Some(_) => {
                self.fail(key, "type");
                None
            }
            None => None,
        }
    }

    pub fn req_i64(&mut self, key: &str) -> i64 {
        match self.take(key) {
            Some(v) => Self::coerce_i64(&v).unwrap_or_else(|| {
                self.fail(key, "type");
                0
            }),
            None => {
                self.fail(key, "missing");
                0
            }
        }
    }

    pub fn opt_i64(&mut self, key: &str) -> Option<i64> {
        match self.take(key) {
            Some(v) => match Self::coerce_i64(&v) {
                Some(n) => Some(n),
                None => {
                    self.fail(key, "type");
                    None
                }
            },
            None => None,
        }
    }

    pub fn i64_or(&mut self, key: &str, default: i64) -> i64 {
        self.opt_i64(key).unwrap_or(default)
    }

    /// Required integer constrained to `min..=max`; a violated bound is
    /// reported as `range`, never additionally as `type`.
    pub fn req_i64_range(&mut self, key: &str, min: i64, max: i64) -> i64 {
        match self.take(key) {
            Some(v) => match Self::coerce_i64(&v) {
                Some(n) if (min..=max).contains(&n) => n,
                Some(_) => {
                    self.fail(key, "range");
                    min
                }
                None => {
                    self.fail(key, "type");
                    min
                }
            },
            None => {
                self.fail(key, "missing");
                min
            }
        }
    }

    pub fn req_i64_min(&mut self, key: &str, min: i64) -> i64 {
        self.req_i64_range(key, min, i64::MAX)
    }

    pub fn opt_i64_range(&mut self, key: &str, min: i64, max: i64) -> Option<i64> {
        match self.opt_i64(key) {
            Some(n) if (min..=max).contains(&n) => Some(n),
            Some(_) => {
                self.fail(key, "range");
                None
            }
            None => None,
        }
    }

    pub fn opt_i64_min(&mut self, key: &str, min: i64) -> Option<i64> {
        self.opt_i64_range(key, min, i64::MAX)
    }

    pub fn opt_bool(&mut self, key: &str) -> Option<bool> {
        match self.take(key) {
            Some(Value::Bool(b)) => Some(b),
            Some(_) => {
                self.fail(key, "type");
                None
            }
            None => None,
        }
    }

    pub fn bool_or(&mut self, key: &str, default: bool) -> bool {
        self.opt_bool(key).unwrap_or(default)
    }

    pub fn req_string_array(&mut self, key: &str) -> Vec<String> {
        match self.take(key) {
            Some(Value::Array(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => out.push(s),
                        _ => {
                            self.fail(key, "type");
                            return Vec::new();
                        }
                    }
                }
                out
            }
            Some(_) => {
                self.fail(key, "type");
                Vec::new()
            }
            None => {
                self.fail(key, "missing");
                Vec::new()
            }
        }
    }

    pub fn opt_string_array(&mut self, key: &str) -> Option<Vec<String>> {
        match self.map.get(key) {
            None | Some(Value::Null) => {
                self.map.remove(key);
                None
            }
            Some(_) => {
                let items = self.req_string_array(key);
                // req_string_array already recorded any violation
                if self.errors.iter().any(|e| e.field == key) {
                    None
                } else {
                    Some(items)
                }
            }
        }
    }

    /// Optional RFC 3339 timestamp.
    pub fn opt_datetime(&mut self, key: &str) -> Option<DateTime<Utc>> {
        match self.take(key) {
            Some(Value::String(s)) => match DateTime::parse_from_rfc3339(&s) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(_) => {
                    self.fail(key, "type");
                    None
                }
            },
            Some(_) => {
                self.fail(key, "type");
                None
            }
            None => None,
        }
    }

    /// Optional structured JSON object, stored as-is.
    pub fn opt_object(&mut self, key: &str) -> Option<Value> {
        match self.take(key) {
            Some(v @ Value::Object(_)) => Some(v),
            Some(_) => {
                self.fail(key, "type");
                None
            }
            None => None,
        }
    }

    /// Required enum-tagged string, deserialized into `T`. An unrecognized
    /// tag reports `enum`; a non-string reports `type`.
    pub fn req_enum<T>(&mut self, key: &str) -> T
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match self.take(key) {
            Some(v @ Value::String(_)) => serde_json::from_value(v).unwrap_or_else(|_| {
                self.fail(key, "enum");
                T::default()
            }),
            Some(_) => {
                self.fail(key, "type");
                T::default()
            }
            None => {
                self.fail(key, "missing");
                T::default()
            }
        }
    }

    pub fn opt_enum<T>(&mut self, key: &str) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        match self.take(key) {
            Some(v @ Value::String(_)) => match serde_json::from_value(v) {
                Ok(t) => Some(t),
                Err(_) => {
                    self.fail(key, "enum");
                    None
                }
            },
            Some(_) => {
                self.fail(key, "type");
                None
            }
            None => None,
        }
    }

    /// Succeeds only when no violation was recorded.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}
