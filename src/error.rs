use reqwest::StatusCode;

/// Errors surfaced by the API client, configuration and preference store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response (connect, timeout, TLS).
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("{path} returned HTTP {status}: {body}")]
    Status {
        path: String,
        status: StatusCode,
        body: String,
    },

    /// The body was not valid JSON for the expected shape.
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    /// Local validation of user input, before anything is sent.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("preferences store: {0}")]
    Preferences(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_path_and_code() {
        let err = Error::Status {
            path: "/schedule/board".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("/schedule/board"));
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn invalid_is_shown_verbatim() {
        let err = Error::Invalid("Customer name is required".to_string());
        assert_eq!(err.to_string(), "Customer name is required");
    }
}
