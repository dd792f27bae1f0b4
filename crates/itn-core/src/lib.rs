//! Shared types for the inverse text normalization (ITN) cascade.
//!
//! This crate holds the leaf types the engine and grammar crates agree on:
//!
//! - [`ItnError`] -- the per-input, recoverable failure taxonomy
//! - [`fields`] -- the bracketed field-record intermediate representation
//!   produced by taggers and consumed by verbalizers

pub mod fields;

/// Error type for per-input normalization failures.
///
/// All three variants are local to a single input: callers processing a
/// batch continue with the next input after any one of them. Infrastructure
/// failures (corrupt persisted grammars, etc.) are reported by the crate
/// that loads the data, not through this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItnError {
    /// The input is over the declared alphabet but no accepting path through
    /// the composed transducer consumes it entirely.
    #[error("no accepting path for input {input:?}")]
    NoMatch { input: String },
    /// The input contains a symbol outside the declared alphabet.
    #[error("symbol {symbol:?} is outside the declared alphabet")]
    UnknownSymbol { symbol: char },
    /// A field record handed to the verbalizer violates the bracket/label
    /// schema. This is a caller contract violation, not a grammar gap.
    #[error("malformed field record: {reason}")]
    MalformedFieldRecord { reason: String },
}

impl ItnError {
    /// Convenience constructor for [`ItnError::NoMatch`].
    pub fn no_match(input: impl Into<String>) -> Self {
        ItnError::NoMatch {
            input: input.into(),
        }
    }

    /// Convenience constructor for [`ItnError::MalformedFieldRecord`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        ItnError::MalformedFieldRecord {
            reason: reason.into(),
        }
    }
}
