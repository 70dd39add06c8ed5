use ed25519_dalek::{Signer as _, SigningKey, Verifier as _, VerifyingKey};
use secp256k1::{ecdsa, Message, PublicKey, Scalar, Secp256k1, SecretKey};
use sha2::{Digest, Sha512};

use super::{address::classic_address, KeyType, LedgerError, Seed};

const ED25519_KEY_PREFIX: u8 = 0xED;

/// First 32 bytes of SHA-512 over the concatenated chunks.
pub(crate) fn sha512_half(chunks: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    let digest = hasher.finalize();
    let mut half = [0u8; 32];
    half.copy_from_slice(&digest[..32]);
    half
}

pub enum Keypair {
    Ed25519(SigningKey),
    Secp256k1(SecretKey),
}

impl Keypair {
    pub fn derive(seed: &Seed) -> Result<Self, LedgerError> {
        match seed.key_type() {
            KeyType::Ed25519 => Ok(Self::Ed25519(SigningKey::from_bytes(&sha512_half(&[
                seed.entropy().as_slice(),
            ])))),
            KeyType::Secp256k1 => derive_secp256k1(seed.entropy()).map(Self::Secp256k1),
        }
    }

    pub fn key_type(&self) -> KeyType {
        match self {
            Self::Ed25519(_) => KeyType::Ed25519,
            Self::Secp256k1(_) => KeyType::Secp256k1,
        }
    }

    /// 33-byte ledger public key; ed25519 keys carry a 0xED marker byte.
    pub fn public_key(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => {
                let mut bytes = Vec::with_capacity(33);
                bytes.push(ED25519_KEY_PREFIX);
                bytes.extend_from_slice(key.verifying_key().as_bytes());
                bytes
            }
            Self::Secp256k1(key) => PublicKey::from_secret_key(&Secp256k1::new(), key)
                .serialize()
                .to_vec(),
        }
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key())
    }

    pub fn classic_address(&self) -> String {
        classic_address(&self.public_key())
    }

    /// Signs the bytes behind `message_hex`, returning an upper-case hex signature
    /// (raw 64 bytes for ed25519, DER for secp256k1).
    pub fn sign_hex(&self, message_hex: &str) -> Result<String, LedgerError> {
        let message = hex::decode(message_hex)?;
        let signature = match self {
            Self::Ed25519(key) => key.sign(&message).to_bytes().to_vec(),
            Self::Secp256k1(key) => {
                let digest = Message::from_digest(sha512_half(&[message.as_slice()]));
                Secp256k1::signing_only()
                    .sign_ecdsa(&digest, key)
                    .serialize_der()
                    .to_vec()
            }
        };
        Ok(hex::encode_upper(signature))
    }
}

fn derive_secp256k1(entropy: &[u8]) -> Result<SecretKey, LedgerError> {
    let root = derive_scalar(&[entropy])?;
    let root_public = PublicKey::from_secret_key(&Secp256k1::new(), &root).serialize();
    let account_index = 0u32.to_be_bytes();
    let intermediate = derive_scalar(&[root_public.as_slice(), account_index.as_slice()])?;
    let tweak = Scalar::from_be_bytes(intermediate.secret_bytes())
        .map_err(|e| LedgerError::KeyDerivation(e.to_string()))?;
    root.add_tweak(&tweak)
        .map_err(|e| LedgerError::KeyDerivation(e.to_string()))
}

// Hashes `chunks || sequence` until the result is a valid curve scalar.
fn derive_scalar(chunks: &[&[u8]]) -> Result<SecretKey, LedgerError> {
    for sequence in 0..=u32::MAX {
        let sequence = sequence.to_be_bytes();
        let mut parts = chunks.to_vec();
        parts.push(sequence.as_slice());
        if let Ok(key) = SecretKey::from_slice(&sha512_half(&parts)) {
            return Ok(key);
        }
    }
    Err(LedgerError::KeyDerivation(
        "no valid scalar in sequence space".to_string(),
    ))
}

/// Checks `signature_hex` over the bytes behind `message_hex` against a 33-byte
/// ledger public key in hex.
pub fn verify(message_hex: &str, signature_hex: &str, public_key_hex: &str) -> Result<(), LedgerError> {
    let message = hex::decode(message_hex)?;
    let signature = hex::decode(signature_hex)?;
    let public_key = hex::decode(public_key_hex)?;
    match public_key.split_first() {
        Some((&ED25519_KEY_PREFIX, key)) if key.len() == 32 => {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(key);
            let key = VerifyingKey::from_bytes(&bytes)
                .map_err(|e| LedgerError::InvalidPublicKey(e.to_string()))?;
            let signature = ed25519_dalek::Signature::from_slice(&signature)
                .map_err(|_| LedgerError::InvalidSignature)?;
            key.verify(&message, &signature)
                .map_err(|_| LedgerError::InvalidSignature)
        }
        _ => {
            let key = PublicKey::from_slice(&public_key)
                .map_err(|e| LedgerError::InvalidPublicKey(e.to_string()))?;
            let mut signature = ecdsa::Signature::from_der(&signature)
                .map_err(|_| LedgerError::InvalidSignature)?;
            signature.normalize_s();
            let digest = Message::from_digest(sha512_half(&[message.as_slice()]));
            Secp256k1::verification_only()
                .verify_ecdsa(&digest, &signature, &key)
                .map_err(|_| LedgerError::InvalidSignature)
        }
    }
}
