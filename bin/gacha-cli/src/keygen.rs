use clap::{Parser, ValueEnum};
use common::{KeyType, Seed};

use crate::errors::CliErrors;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Algorithm {
    Ed25519,
    Secp256k1,
}

impl From<Algorithm> for KeyType {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Ed25519 => KeyType::Ed25519,
            Algorithm::Secp256k1 => KeyType::Secp256k1,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Keygen {
    #[arg(long, short, value_enum, default_value = "ed25519")]
    pub algorithm: Algorithm,
    /// Derive the seed from a passphrase instead of fresh randomness.
    #[arg(long)]
    pub passphrase: Option<String>,
}

impl Keygen {
    pub fn run(self) -> Result<(), CliErrors> {
        let key_type = KeyType::from(self.algorithm);
        let seed = match &self.passphrase {
            Some(passphrase) => Seed::from_passphrase(passphrase, key_type),
            None => Seed::generate(key_type),
        };
        let keypair = seed.keypair()?;
        println!("SECRET_SEED={}", seed.encode());
        println!("address: {}", keypair.classic_address());
        println!("public key: {}", keypair.public_key_hex());
        Ok(())
    }
}
