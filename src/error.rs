// src/error.rs
use thiserror::Error;

/// Everything a lookup call can fail with. Each variant renders a distinct
/// user-visible message; all of them are terminal for the current lookup.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("player not found")]
    NotFound,

    #[error("invalid or insufficient API key")]
    Auth,

    #[error("rate limit exceeded, please try again later")]
    RateLimit,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct_and_user_facing() {
        assert!(ApiError::NotFound.to_string().contains("not found"));
        assert!(ApiError::Auth.to_string().contains("API key"));
        assert!(ApiError::RateLimit.to_string().contains("rate limit"));
        assert!(ApiError::Status(503).to_string().contains("503"));
        assert!(
            ApiError::Parse(s!("expected value"))
                .to_string()
                .contains("malformed")
        );
    }
}
