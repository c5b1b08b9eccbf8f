//! SEPTA client error types.

/// Errors from the SEPTA NextToArrive client.
#[derive(Debug, thiserror::Error)]
pub enum SeptaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configured base URL can't be used
    #[error("invalid base URL {url}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API answered with an `{"error": ...}` object
    #[error("SEPTA error: {0}")]
    Provider(String),

    /// Body wasn't the expected JSON
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SeptaError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = SeptaError::Provider("Invalid origin station".into());
        assert_eq!(err.to_string(), "SEPTA error: Invalid origin station");

        let err = SeptaError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error: expected value (body: <html>)"
        );

        let err = SeptaError::Json {
            message: "expected value".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
