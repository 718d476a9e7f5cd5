use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Response error:\nStatusCode: {0}\nText: {1}")]
    Status(reqwest::StatusCode, String),

    #[error("Failed to decode response for {item}: {source}")]
    Decode {
        item: String,
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed waitlist payload: {source}")]
    MalformedWaitlist {
        payload: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base url: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unknown region: {0}")]
    Region(#[from] strum::ParseError),
}
