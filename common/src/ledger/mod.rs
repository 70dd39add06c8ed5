//! XRP Ledger key material: family seeds, keypairs and classic addresses.
//!
//! Seeds come in two families. `sEd...` seeds derive ed25519 keys, every other
//! `s...` seed derives a secp256k1 key through the root/intermediate scheme used
//! by rippled. Signatures are made over the bytes of a hex-encoded message.

pub mod address;
pub mod codec;
pub mod errors;
pub mod keypair;
pub mod seed;

pub use address::{classic_address, decode_classic_address};
pub use errors::LedgerError;
pub use keypair::{verify, Keypair};
pub use seed::{KeyType, Seed};
