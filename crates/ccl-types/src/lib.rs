//! Foundation types for the Concordance Ledger (CCL).
//!
//! This crate provides the core value types used throughout the CCL system.
//! Every other CCL crate depends on `ccl-types`.
//!
//! # Key Types
//!
//! - [`Measurement`] — A labeled (value, uncertainty) pair produced by an upstream fit
//! - [`ObserverContext`] — 4-component provenance tensor with a Euclidean distance
//! - [`EpistemicConfig`] — Externally supplied penalty scale constants
//! - [`HorizonAddress`] — UHA provenance address for a calibration anchor
//! - [`Digest`] — Content-addressed identifier (BLAKE3 hash)

pub mod address;
pub mod config;
pub mod context;
pub mod digest;
pub mod error;
pub mod measurement;

pub use address::HorizonAddress;
pub use config::EpistemicConfig;
pub use context::ObserverContext;
pub use digest::Digest;
pub use error::TypeError;
pub use measurement::Measurement;
