//! Error types for tsp-evo.
//!
//! Errors fall into three families with different lifetimes:
//!
//! - **Load errors** ([`TspError::MissingField`], [`TspError::Parse`],
//!   [`TspError::UnsupportedEdgeWeightType`], [`TspError::Io`]) — raised
//!   while reading a problem or tour file, before any generation runs.
//! - **Configuration errors** ([`TspError::InvalidConfig`]) — raised by
//!   [`GaConfig::validate`](crate::ga::GaConfig::validate) before the
//!   evolutionary loop starts.
//! - **Invariant violations** ([`TspError::InvariantViolation`]) — raised
//!   by an operator that received corrupted genes. These indicate a
//!   programming error upstream and abort the run; they are never
//!   silently repaired.

use thiserror::Error;

/// Result type alias for tsp-evo operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for all tsp-evo operations.
#[derive(Debug, Error)]
pub enum TspError {
    /// The problem file declares an edge-weight type this crate does not
    /// implement. Detected at load time, never mid-run.
    #[error("unsupported edge weight type: {0}")]
    UnsupportedEdgeWeightType(String),

    /// A required TSPLIB marker is absent from the problem file.
    #[error("missing required field in problem file: {0}")]
    MissingField(&'static str),

    /// A line of the problem or tour file could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Description of what failed to parse.
        message: String,
    },

    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The GA configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A genetic operator received or produced non-permutation genes.
    ///
    /// Carries the operator name and a snapshot of the offending genes so
    /// the upstream corruption can be diagnosed.
    #[error("invariant violation in {operator}: {detail}")]
    InvariantViolation {
        /// Name of the operator that detected the violation.
        operator: &'static str,
        /// Diagnostic, including the offending gene snapshot.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_edge_weight() {
        let err = TspError::UnsupportedEdgeWeightType("GEO".into());
        assert_eq!(err.to_string(), "unsupported edge weight type: GEO");
    }

    #[test]
    fn test_display_parse() {
        let err = TspError::Parse {
            line: 7,
            message: "expected coordinate pair".into(),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TspError = io.into();
        assert!(matches!(err, TspError::Io(_)));
    }

    #[test]
    fn test_invariant_violation_carries_operator() {
        let err = TspError::InvariantViolation {
            operator: "greedy_crossover",
            detail: "gene 3 occurs twice".into(),
        };
        assert!(err.to_string().contains("greedy_crossover"));
    }
}
