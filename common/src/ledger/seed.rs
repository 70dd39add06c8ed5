use std::{fmt, str::FromStr};

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{codec, keypair::sha512_half, Keypair, LedgerError};

const ED25519_SEED_VERSION: [u8; 3] = [0x01, 0xE1, 0x4B];
const SECP256K1_SEED_VERSION: [u8; 1] = [0x21];
pub const SEED_ENTROPY_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Ed25519,
    Secp256k1,
}

/// A ledger family seed. `Debug` never prints the entropy.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed {
    entropy: [u8; SEED_ENTROPY_LEN],
    key_type: KeyType,
}

impl Seed {
    pub fn new(entropy: [u8; SEED_ENTROPY_LEN], key_type: KeyType) -> Self {
        Self { entropy, key_type }
    }

    pub fn generate(key_type: KeyType) -> Self {
        let mut entropy = [0u8; SEED_ENTROPY_LEN];
        rand::thread_rng().fill_bytes(&mut entropy);
        Self::new(entropy, key_type)
    }

    /// rippled's `wallet_propose` passphrase derivation.
    pub fn from_passphrase(passphrase: &str, key_type: KeyType) -> Self {
        let mut entropy = [0u8; SEED_ENTROPY_LEN];
        entropy.copy_from_slice(&sha512_half(&[passphrase.as_bytes()])[..SEED_ENTROPY_LEN]);
        Self::new(entropy, key_type)
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub(crate) fn entropy(&self) -> &[u8; SEED_ENTROPY_LEN] {
        &self.entropy
    }

    pub fn keypair(&self) -> Result<Keypair, LedgerError> {
        Keypair::derive(self)
    }

    /// The `s...` string form. This is secret material.
    pub fn encode(&self) -> String {
        match self.key_type {
            KeyType::Ed25519 => codec::encode_check(&ED25519_SEED_VERSION, &self.entropy),
            KeyType::Secp256k1 => codec::encode_check(&SECP256K1_SEED_VERSION, &self.entropy),
        }
    }
}

impl FromStr for Seed {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (bytes, key_type) =
            match codec::decode_check(s, &ED25519_SEED_VERSION, SEED_ENTROPY_LEN) {
                Ok(bytes) => (bytes, KeyType::Ed25519),
                Err(_) => (
                    codec::decode_check(s, &SECP256K1_SEED_VERSION, SEED_ENTROPY_LEN)
                        .map_err(|_| LedgerError::InvalidSeed)?,
                    KeyType::Secp256k1,
                ),
            };
        let mut entropy = [0u8; SEED_ENTROPY_LEN];
        entropy.copy_from_slice(&bytes);
        Ok(Self::new(entropy, key_type))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("key_type", &self.key_type)
            .finish_non_exhaustive()
    }
}
