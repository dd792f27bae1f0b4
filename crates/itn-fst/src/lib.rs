//! Weighted finite-state transducer construction and matching.
//!
//! This crate is the grammar-composition engine of the ITN cascade. Grammars
//! are built eagerly at initialization as in-memory transducer graphs, then
//! treated as immutable matching engines: applying a grammar to an input
//! string is a weighted shortest-path search that touches no shared mutable
//! state, so built transducers may be shared freely across threads.
//!
//! # Architecture
//!
//! - [`fst`] -- the graph transducer type and its algebra (union,
//!   concatenation, closure, cross, composition, input exclusion, pruning)
//! - [`search`] -- weighted shortest-path matching with deterministic
//!   tie-breaking and a bounded search effort
//! - [`format`] -- compact binary serialization of compiled transducers

pub mod format;
pub mod fst;
pub mod search;

/// Error type for loading persisted transducer data.
#[derive(Debug, thiserror::Error)]
pub enum FstError {
    #[error("invalid magic number in IFST header")]
    InvalidMagic,
    #[error("unsupported IFST format version {0}")]
    BadVersion(u32),
    #[error("data too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("invalid label code {0:#x}")]
    InvalidLabel(u32),
    #[error("transition targets state {target} but only {count} states exist")]
    BadStateIndex { target: u32, count: u32 },
    #[error("state references transition {index} but only {count} transitions exist")]
    BadTransitionIndex { index: u32, count: u32 },
}
