use axum::http::StatusCode;
use thiserror::Error;

// Display strings double as the response bodies the clients already parse,
// so they must stay stable.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Blockchain verification failed")]
    VerificationFailed,
    // the cause never reaches the response body, only the server log
    #[error("Internal server error")]
    Internal(String),
}

impl PaymentError {
    pub fn status(&self) -> StatusCode {
        match self {
            PaymentError::MissingFields => StatusCode::BAD_REQUEST,
            PaymentError::VerificationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            PaymentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_bodies() {
        assert_eq!(
            PaymentError::MissingFields.to_string(),
            "Missing required fields"
        );
        assert_eq!(
            PaymentError::VerificationFailed.to_string(),
            "Blockchain verification failed"
        );
        assert_eq!(
            PaymentError::Internal("cause stays hidden".to_string()).to_string(),
            "Internal server error"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(PaymentError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            PaymentError::VerificationFailed.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
