//! Hashing primitives for the Concordance Ledger (CCL).
//!
//! Two concerns live here: domain-separated content hashing for ledger
//! stamping ([`ContentHasher`]), and the deterministic binary Merkle root
//! over repository manifest leaves ([`merkle_root`]). Both are release
//! integrity machinery; neither feeds the merge arithmetic.

pub mod hasher;
pub mod merkle;

pub use hasher::{ContentHasher, HasherError};
pub use merkle::{manifest_leaf, merkle_root};
