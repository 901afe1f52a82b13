use thiserror::Error;

/// Closed set of failure kinds surfaced to callers.
///
/// Repositories normalize store errors into one of these variants; the
/// use-case layer passes them through untouched and the HTTP layer maps
/// each kind to a status code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Message safe to show to API clients. Internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity_and_key() {
        let err = DomainError::not_found("Icon", 7);
        assert_eq!(err.to_string(), "Not found: Icon with id=7");
    }

    #[test]
    fn internal_cause_is_hidden_from_clients() {
        let err = DomainError::internal("connection reset by peer");
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn conflict_message_is_public() {
        let err = DomainError::Conflict("record already exists".into());
        assert_eq!(err.public_message(), "Conflict: record already exists");
    }
}
