//! Riddle request body.
//!
//! A riddle is a prompt (`riddle_description`), a category tag (`riddle_type`) and the solution
//! (`riddle_answer`). The DTO is built from the decoded request body and handed on to the game
//! logic unchanged.
//!
//! Construction never fails on content:
//! - a missing key becomes `None`
//! - an explicit JSON `null` also becomes `None`
//! - unrecognised keys are ignored
//! - non-string values are kept as their compact JSON text, so `42` and `"42"` give equal
//!   riddles; the string form does not say which one was sent
//!
//! The schema published for this body marks all three fields as required, but nothing here
//! enforces that. Callers that need stricter guarantees must check the payload themselves.

use serde_json::{Map, Value};
use utoipa::openapi::schema::Schema;
use utoipa::openapi::RefOr;
use utoipa::ToSchema;

use crate::dto::schema::{RIDDLE_ANSWER, RIDDLE_DESCRIPTION, RIDDLE_REQUEST_BODY, RIDDLE_TYPE};
use crate::error::{json_kind, GameError, GameResult};

/// Riddle carried from an HTTP request into the game logic.
///
/// `None` marks a field that was absent (or `null`) in the source payload. It is distinct from
/// `Some(String::new())`, which is an empty string that was actually sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiddleDto {
    /// Solution to the riddle.
    pub riddle_answer: Option<String>,
    /// Category of the riddle, for example `水果谜`.
    pub riddle_type: Option<String>,
    /// Prompt text shown to the player.
    pub riddle_description: Option<String>,
}

impl RiddleDto {
    /// Creates a riddle from three values, stored verbatim.
    ///
    /// No validation is applied: empty strings are kept as empty strings.
    pub fn new(
        riddle_answer: impl Into<String>,
        riddle_type: impl Into<String>,
        riddle_description: impl Into<String>,
    ) -> Self {
        Self {
            riddle_answer: Some(riddle_answer.into()),
            riddle_type: Some(riddle_type.into()),
            riddle_description: Some(riddle_description.into()),
        }
    }

    /// Builds a riddle from a decoded JSON object.
    ///
    /// Only `riddle_answer`, `riddle_type` and `riddle_description` are looked up. Every other key
    /// is ignored.
    pub fn from_map(data: &Map<String, Value>) -> Self {
        Self {
            riddle_answer: lookup(data, RIDDLE_ANSWER),
            riddle_type: lookup(data, RIDDLE_TYPE),
            riddle_description: lookup(data, RIDDLE_DESCRIPTION),
        }
    }

    /// Returns `true` when all three fields carry a value.
    ///
    /// Informational only; an incomplete riddle is still a valid `RiddleDto`.
    pub fn is_complete(&self) -> bool {
        self.riddle_answer.is_some()
            && self.riddle_type.is_some()
            && self.riddle_description.is_some()
    }
}

fn lookup(data: &Map<String, Value>, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => {
            tracing::debug!("{} is {}, keeping its JSON text", key, json_kind(other));
            Some(other.to_string())
        }
    }
}

impl From<&Map<String, Value>> for RiddleDto {
    fn from(data: &Map<String, Value>) -> Self {
        Self::from_map(data)
    }
}

impl TryFrom<&Value> for RiddleDto {
    type Error = GameError;

    fn try_from(value: &Value) -> GameResult<Self> {
        match value {
            Value::Object(data) => Ok(Self::from_map(data)),
            other => Err(GameError::NotAnObject {
                found: json_kind(other),
            }),
        }
    }
}

impl<'s> ToSchema<'s> for RiddleDto {
    fn schema() -> (&'s str, RefOr<Schema>) {
        (
            "RiddleDto",
            RefOr::T(Schema::Object(RIDDLE_REQUEST_BODY.to_openapi())),
        )
    }
}
