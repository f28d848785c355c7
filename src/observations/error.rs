use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObservationError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response body from {0}")]
    ResponseDecode(String, #[source] reqwest::Error),

    #[error("Response from {url} is missing field '{field}'")]
    IncompleteResponse { url: String, field: &'static str },
}
