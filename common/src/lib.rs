pub mod ledger;
pub mod models;
pub mod requests;

pub use ledger::{Keypair, KeyType, LedgerError, Seed};
pub use models::{CardDefinition, MintResponse, NftListResponse, NftSummary, SignatureResult};
pub use requests::{MintAuth, MintRequest, SignRequest};

/// Hex encoding used for messages and signatures on the ledger side (upper case, no prefix).
pub fn ledger_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_upper(bytes)
}
