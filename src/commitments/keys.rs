//! Key material for CDH vector commitments
//!
//! For a vector length q and secret exponents z₀, …, z_{q-1}:
//!
//! - `h_vec[i] = g^(zᵢ)`, held in both source groups
//! - `h_mat[i][j] = g^(zᵢ·zⱼ)` for i ≠ j, held in G₁
//!
//! `h_mat` is symmetric and has no diagonal, so only the strict upper
//! triangle is stored.

use crate::traits::BilinearGroup;
use ark_std::fmt;
use ark_std::rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Shared group parameters: one generator per source group.
///
/// Established once and handed to every operation. Keys, commitments and
/// proofs are only meaningful against the generators they were made with.
pub struct Generators<G: BilinearGroup> {
    pub g1: G::G1,
    pub g2: G::G2,
}

impl<G: BilinearGroup> Generators<G> {
    pub fn new(g1: G::G1, g2: G::G2) -> Self {
        Self { g1, g2 }
    }

    /// The backend's fixed generators
    pub fn standard() -> Self {
        Self::new(G::g1_generator(), G::g2_generator())
    }

    /// Fresh generators g₁ = G₁^s, g₂ = G₂^s for a random non-zero s
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let zero = G::scalar_from_i64(0);
        let mut s = G::random_scalar(rng);
        while s == zero {
            s = G::random_scalar(rng);
        }
        let generators = Self::new(
            G::pow_g1(&G::g1_generator(), &s),
            G::pow_g2(&G::g2_generator(), &s),
        );
        s.zeroize();
        generators
    }
}

impl<G: BilinearGroup> Clone for Generators<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: BilinearGroup> Copy for Generators<G> {}

impl<G: BilinearGroup> PartialEq for Generators<G> {
    fn eq(&self, other: &Self) -> bool {
        self.g1 == other.g1 && self.g2 == other.g2
    }
}

impl<G: BilinearGroup> Eq for Generators<G> {}

impl<G: BilinearGroup> fmt::Debug for Generators<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generators")
            .field("g1", &self.g1)
            .field("g2", &self.g2)
            .finish()
    }
}

/// Secret exponents z₀, …, z_{q-1}
///
/// Never leaves the committer. The exponents are wiped on drop and `Debug`
/// only reveals the length.
pub struct SecretKey<G: BilinearGroup> {
    z: Vec<G::Scalar>,
}

impl<G: BilinearGroup> SecretKey<G> {
    pub(crate) fn new(z: Vec<G::Scalar>) -> Self {
        Self { z }
    }

    pub fn exponents(&self) -> &[G::Scalar] {
        &self.z
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }
}

impl<G: BilinearGroup> Zeroize for SecretKey<G> {
    fn zeroize(&mut self) {
        self.z.zeroize();
    }
}

impl<G: BilinearGroup> Drop for SecretKey<G> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<G: BilinearGroup> ZeroizeOnDrop for SecretKey<G> {}

impl<G: BilinearGroup> fmt::Debug for SecretKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("len", &self.z.len())
            .finish_non_exhaustive()
    }
}

/// One entry of `h_vec`: g^(zᵢ) in G₁ and in G₂
pub struct KeyElement<G: BilinearGroup> {
    pub g1: G::G1,
    pub g2: G::G2,
}

impl<G: BilinearGroup> Clone for KeyElement<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: BilinearGroup> Copy for KeyElement<G> {}

impl<G: BilinearGroup> PartialEq for KeyElement<G> {
    fn eq(&self, other: &Self) -> bool {
        self.g1 == other.g1 && self.g2 == other.g2
    }
}

impl<G: BilinearGroup> Eq for KeyElement<G> {}

impl<G: BilinearGroup> fmt::Debug for KeyElement<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyElement")
            .field("g1", &self.g1)
            .field("g2", &self.g2)
            .finish()
    }
}

/// The cross-term table `h_mat`, q × q with an absent diagonal
///
/// Entry (i, j) with i < j lives at `i·q − i(i+1)/2 + (j − i − 1)` of the
/// packed upper triangle; (j, i) reads the same slot.
pub struct CrossTermTable<G: BilinearGroup> {
    dim: usize,
    upper: Vec<G::G1>,
}

impl<G: BilinearGroup> CrossTermTable<G> {
    /// Build from the strict upper triangle, row-major.
    ///
    /// Returns `None` if `upper` does not hold exactly q(q−1)/2 entries.
    pub fn from_upper_triangle(dim: usize, upper: Vec<G::G1>) -> Option<Self> {
        if upper.len() != Self::packed_len(dim) {
            return None;
        }
        Some(Self { dim, upper })
    }

    pub fn packed_len(dim: usize) -> usize {
        dim * dim.saturating_sub(1) / 2
    }

    /// q, the vector length this table was generated for
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// `h_mat[i][j]`, or `None` on the diagonal and outside the table
    pub fn get(&self, i: usize, j: usize) -> Option<&G::G1> {
        if i >= self.dim || j >= self.dim || i == j {
            return None;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let offset = lo * self.dim - lo * (lo + 1) / 2 + (hi - lo - 1);
        self.upper.get(offset)
    }

    /// Off-diagonal entries of row `i` as `(j, h_mat[i][j])`
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, &G::G1)> + '_ {
        (0..self.dim).filter_map(move |j| self.get(i, j).map(|h| (j, h)))
    }
}

impl<G: BilinearGroup> Clone for CrossTermTable<G> {
    fn clone(&self) -> Self {
        Self {
            dim: self.dim,
            upper: self.upper.clone(),
        }
    }
}

impl<G: BilinearGroup> PartialEq for CrossTermTable<G> {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.upper == other.upper
    }
}

impl<G: BilinearGroup> Eq for CrossTermTable<G> {}

impl<G: BilinearGroup> fmt::Debug for CrossTermTable<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossTermTable")
            .field("dim", &self.dim)
            .field("stored", &self.upper.len())
            .finish()
    }
}

/// Public key `(h_vec, h_mat)`, safe to publish
pub struct PublicKey<G: BilinearGroup> {
    pub h_vec: Vec<KeyElement<G>>,
    pub h_mat: CrossTermTable<G>,
}

impl<G: BilinearGroup> PublicKey<G> {
    pub fn len(&self) -> usize {
        self.h_vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h_vec.is_empty()
    }
}

impl<G: BilinearGroup> Clone for PublicKey<G> {
    fn clone(&self) -> Self {
        Self {
            h_vec: self.h_vec.clone(),
            h_mat: self.h_mat.clone(),
        }
    }
}

impl<G: BilinearGroup> PartialEq for PublicKey<G> {
    fn eq(&self, other: &Self) -> bool {
        self.h_vec == other.h_vec && self.h_mat == other.h_mat
    }
}

impl<G: BilinearGroup> Eq for PublicKey<G> {}

impl<G: BilinearGroup> fmt::Debug for PublicKey<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("h_vec", &self.h_vec)
            .field("h_mat", &self.h_mat)
            .finish()
    }
}
