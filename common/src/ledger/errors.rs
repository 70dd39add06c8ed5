use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid base58 encoding: {0}")]
    Encoding(String),
    #[error("checksum mismatch")]
    ChecksumMismatch,
    #[error("unexpected version prefix")]
    UnexpectedVersion,
    #[error("invalid seed")]
    InvalidSeed,
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
    #[error("signature does not match")]
    InvalidSignature,
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
