use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid access code {0:?}: expected exactly 4 digits")]
    InvalidCode(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("read-only"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::InvalidCode("12a4".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid access code \"12a4\": expected exactly 4 digits"
        );
    }
}
