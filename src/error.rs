use thiserror::Error;

pub type TemplateResult<T> = Result<T, TemplateError>;

#[derive(Error, Debug, Clone)]
pub enum TemplateError {
    #[error("Unknown dynamic field key '{key}'. Expected one of: {expected}")]
    UnknownDynamicField { key: String, expected: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::DeserializationError(err.to_string())
    }
}
