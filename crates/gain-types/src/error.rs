use serde_json::Value;
use thiserror::Error;

/// Errors produced while validating records at the storage boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record set must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("record is missing the required `name` field")]
    MissingName,

    #[error("record `name` must be a string, found {found}")]
    NameNotString { found: &'static str },

    /// A single element of a record set failed validation.
    #[error("record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<RecordError>,
    },
}

/// Convenience alias for record validation.
pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Short JSON type name used in error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_names() {
        assert_eq!(kind_of(&json!(null)), "null");
        assert_eq!(kind_of(&json!(3)), "number");
        assert_eq!(kind_of(&json!([])), "array");
        assert_eq!(kind_of(&json!({})), "object");
    }

    #[test]
    fn nested_message_names_index() {
        let err = RecordError::InvalidRecord {
            index: 4,
            source: Box::new(RecordError::MissingName),
        };
        assert_eq!(
            err.to_string(),
            "record 4: record is missing the required `name` field"
        );
    }
}
