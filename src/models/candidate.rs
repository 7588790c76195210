use crate::errors::{AppError, AppResult};
use serde_json::Value;

/// A scan waiting to be recorded: what the decoder or the keyboard produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCandidate {
    pub id: String,
    pub name: Option<String>,
}

impl ScanCandidate {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }

    /// Interpret a raw scanned payload.
    ///
    /// - a JSON object → `{ id, name? }`; `id` may be a string or a number,
    ///   an object without a usable `id` is rejected; a numeric `name` is kept
    ///   as text
    /// - anything else (plain text, bare JSON scalars) → the whole payload is the id
    pub fn parse(payload: &str) -> AppResult<Self> {
        match serde_json::from_str::<Value>(payload) {
            Ok(Value::Object(map)) => {
                let id = match map.get("id") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => return Err(AppError::MissingId),
                };
                let name = match map.get("name") {
                    Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                    Some(Value::Number(n)) => Some(n.to_string()),
                    _ => None,
                };
                Self::new(id, name).validated()
            }
            _ => Self::new(payload, None).validated(),
        }
    }

    /// Empty ids are never stored.
    pub fn validated(self) -> AppResult<Self> {
        if self.id.is_empty() {
            Err(AppError::MissingId)
        } else {
            Ok(self)
        }
    }
}
