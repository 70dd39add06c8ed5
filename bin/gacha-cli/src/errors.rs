use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliErrors {
    #[error(transparent)]
    SdkErrors(#[from] gacha_sdk::errors::SdkErrors),
    #[error(transparent)]
    LedgerError(#[from] common::LedgerError),
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error("Slot {0} is out of the 5x5 grid")]
    SlotOutOfRange(usize),
}
