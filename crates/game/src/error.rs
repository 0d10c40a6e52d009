#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

pub type GameResult<T> = std::result::Result<T, GameError>;

/// Name of the JSON value kind, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
