use thiserror::Error;

/// Failures inside the content fetch pipeline.
///
/// None of these reach the caller of `newsroom::fetch_batch`: they are logged
/// at the pipeline boundary and replaced by the fallback batch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider was unreachable or answered with an error status
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered, but the payload is not a usable edition
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(error.to_string())
    }
}
