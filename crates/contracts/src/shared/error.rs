use thiserror::Error;

/// Application error taxonomy.
///
/// Every error is terminal to the operation that raised it and is surfaced
/// as a single message in the view that triggered it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    ApiError(String),

    #[error("No hay sesión")]
    NoSessionError,

    #[error("Falta: {0}")]
    MissingFieldError(String),

    #[error("Valor inválido en {0}")]
    InvalidFieldError(String),

    #[error("La hora fin debe ser mayor que la hora inicio")]
    OrderingError,

    #[error("La hora fin excede el fin del turno ({0})")]
    ShiftBoundsError(String),
}

impl AppError {
    /// Error for a non-2xx response: the message in the body's `error`
    /// field when present, otherwise a generic status-coded message.
    /// Callers pass `Value::Null` when the body was not parseable JSON.
    pub fn from_response(status: u16, body: &serde_json::Value) -> Self {
        match body.get("error").and_then(|v| v.as_str()) {
            Some(msg) => AppError::ApiError(msg.to_string()),
            None => AppError::ApiError(format!("Error {}", status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_from_body_wins() {
        let err = AppError::from_response(401, &json!({"error": "bad credentials"}));
        assert_eq!(err, AppError::ApiError("bad credentials".to_string()));
        assert_eq!(err.to_string(), "bad credentials");
    }

    #[test]
    fn unparsable_body_falls_back_to_status() {
        let err = AppError::from_response(500, &serde_json::Value::Null);
        assert_eq!(err.to_string(), "Error 500");
    }

    #[test]
    fn body_without_error_field_falls_back_to_status() {
        let err = AppError::from_response(502, &json!({"detail": "gateway"}));
        assert_eq!(err.to_string(), "Error 502");
    }
}
