//! Unified SDK error types.

use crate::shared::CoinId;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Favorites store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Coin not in the current list: {0}")]
    UnknownCoin(CoinId),
}

/// Failure of one fetch-and-decode round trip.
///
/// The three variants are disjoint; callers branch on [`FetchError::kind`], never on message text.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("Transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Decoding failed: {0}")]
    Decoding(#[from] DecodingError),
}

/// Fieldless discriminant of [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    Request,
    Transport,
    Decoding,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Request(_) => FetchErrorKind::Request,
            FetchError::Transport(_) => FetchErrorKind::Transport,
            FetchError::Decoding(_) => FetchErrorKind::Decoding,
        }
    }
}

/// A request descriptor could not be turned into a URL.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The transport could not deliver a successful response.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Other(String),
}

/// The response body did not match the expected schema.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct DecodingError(#[from] pub serde_json::Error);

/// Favorites persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_kind() {
        let err = FetchError::from(RequestError::InvalidPath("coins".into()));
        assert_eq!(err.kind(), FetchErrorKind::Request);

        let err = FetchError::from(TransportError::Status {
            status: 503,
            body: "unavailable".into(),
        });
        assert_eq!(err.kind(), FetchErrorKind::Transport);

        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = FetchError::from(DecodingError::from(json_err));
        assert_eq!(err.kind(), FetchErrorKind::Decoding);
    }

    #[test]
    fn test_sdk_error_wraps_fetch_error() {
        let err: SdkError = FetchError::from(TransportError::Other("offline".into())).into();
        assert!(matches!(err, SdkError::Fetch(FetchError::Transport(_))));
        assert_eq!(err.to_string(), "Fetch error: Transport failed: offline");
    }
}
