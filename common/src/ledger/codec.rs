use sha2::{Digest, Sha256};

use super::LedgerError;

const CHECKSUM_LEN: usize = 4;

fn checksum(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = Sha256::digest(Sha256::digest(bytes));
    let mut sum = [0u8; CHECKSUM_LEN];
    sum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    sum
}

/// Base58check with the ripple alphabet: `version || payload || sha256d[..4]`.
pub fn encode_check(version: &[u8], payload: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(version.len() + payload.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(version);
    bytes.extend_from_slice(payload);
    let sum = checksum(&bytes);
    bytes.extend_from_slice(&sum);
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_string()
}

pub fn decode_check(
    encoded: &str,
    version: &[u8],
    payload_len: usize,
) -> Result<Vec<u8>, LedgerError> {
    let bytes = bs58::decode(encoded)
        .with_alphabet(bs58::Alphabet::RIPPLE)
        .into_vec()
        .map_err(|e| LedgerError::Encoding(e.to_string()))?;
    let expected = version.len() + payload_len + CHECKSUM_LEN;
    if bytes.len() != expected {
        return Err(LedgerError::Encoding(format!(
            "expected {expected} bytes, got {}",
            bytes.len()
        )));
    }
    let (body, sum) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    if checksum(body).as_slice() != sum {
        return Err(LedgerError::ChecksumMismatch);
    }
    if &body[..version.len()] != version {
        return Err(LedgerError::UnexpectedVersion);
    }
    Ok(body[version.len()..].to_vec())
}
