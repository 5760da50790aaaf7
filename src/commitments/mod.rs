//! Commitment schemes
//!
//! Includes:
//! - CDH vector commitments (position binding, constant-size proofs)
//! - Key material: generators, secret exponents, public key and cross-term table

pub mod cdh;
pub mod keys;

pub use cdh::{Commitment, Proof, VectorCommitmentCdh};
pub use keys::{CrossTermTable, Generators, KeyElement, PublicKey, SecretKey};
