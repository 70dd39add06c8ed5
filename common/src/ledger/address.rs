use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use super::{codec, LedgerError};

const ACCOUNT_ID_VERSION: [u8; 1] = [0x00];
pub const ACCOUNT_ID_LEN: usize = 20;

/// RIPEMD160(SHA256(public key)).
pub fn account_id(public_key: &[u8]) -> [u8; ACCOUNT_ID_LEN] {
    let digest = Ripemd160::digest(Sha256::digest(public_key));
    let mut id = [0u8; ACCOUNT_ID_LEN];
    id.copy_from_slice(&digest);
    id
}

/// Classic `r...` address of a 33-byte ledger public key.
pub fn classic_address(public_key: &[u8]) -> String {
    codec::encode_check(&ACCOUNT_ID_VERSION, &account_id(public_key))
}

pub fn decode_classic_address(address: &str) -> Result<[u8; ACCOUNT_ID_LEN], LedgerError> {
    let bytes = codec::decode_check(address, &ACCOUNT_ID_VERSION, ACCOUNT_ID_LEN)?;
    let mut id = [0u8; ACCOUNT_ID_LEN];
    id.copy_from_slice(&bytes);
    Ok(id)
}
