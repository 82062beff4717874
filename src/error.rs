use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please provide a name.")]
    Validation,

    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Decode(String),

    #[error("no page found")]
    NoPageFound,

    #[error("short description not found")]
    DescriptionNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent back to the client. Transport and decode failures share one
    /// envelope, an empty lookup gets its own message.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation => self.to_string(),
            AppError::Fetch(_) | AppError::Decode(_) | AppError::NoPageFound => {
                format!("Error fetching short description: {}", self)
            }
            AppError::DescriptionNotFound => "Short description not found.".to_string(),
            AppError::ConfigError(_) => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_a_client_error() {
        let err = AppError::Validation;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Please provide a name.");
    }

    #[test]
    fn pipeline_failures_share_the_fetch_envelope() {
        let fetch = AppError::Fetch("error making http request: boom".into());
        assert_eq!(
            fetch.public_message(),
            "Error fetching short description: error making http request: boom"
        );
        assert_eq!(
            AppError::NoPageFound.public_message(),
            "Error fetching short description: no page found"
        );
        assert_eq!(AppError::NoPageFound.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_description_has_its_own_message() {
        let err = AppError::DescriptionNotFound;
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Short description not found.");
    }
}
