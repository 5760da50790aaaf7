//! Trait abstractions for the vector commitment components
//!
//! - [`BilinearGroup`]: the algebraic collaborator (generators, exponentiation,
//!   pairing). Backends live in `crate::backend`.
//! - [`VectorCommitmentScheme`]: the scheme-level seam, so callers and tests can
//!   be written against any implementation.

pub mod group;
pub mod vc;

pub use group::BilinearGroup;
pub use vc::VectorCommitmentScheme;
