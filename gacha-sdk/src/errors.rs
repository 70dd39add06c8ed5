use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkErrors {
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Relay responded with {status}: {message}")]
    RelayResponseError { status: u16, message: String },
    #[error("Image {0} could not be loaded")]
    ImageError(String),
    #[error("Card catalog is empty")]
    EmptyCatalog,
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
