use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            AppError::Parse(format!("Invalid JSON: {err}"))
        } else {
            AppError::Serialization(format!("JSON encoding failed: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_includes_status() {
        let err = AppError::Http {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (503): Service Unavailable");
    }

    #[test]
    fn json_syntax_errors_map_to_parse() {
        let err = serde_json::from_str::<u32>("{").map_err(AppError::from);
        assert!(matches!(err, Err(AppError::Parse(_))));

        let err = serde_json::from_str::<u32>("\"five\"").map_err(AppError::from);
        assert!(matches!(err, Err(AppError::Parse(_))));
    }

    #[test]
    fn timeout_error_is_prefixed() {
        let err = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(err.to_string(), "Timeout: Request timed out. Please try again.");
    }
}
