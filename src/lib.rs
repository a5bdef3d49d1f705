//! # Algebraic System: finite binary operations, checked
//!
//! This library takes a finite set `S` together with a binary operation
//! written out as an `n x n` Cayley table and reports which algebraic
//! properties the pair satisfies.
//!
//! ## Features
//!
//! - **Basic properties**: closure, commutativity, associativity, idempotence
//! - **Special elements**: identity, zero (absorbing) element, left/right inverses
//! - **Classification**: groupoid ⊃ semigroup ⊃ monoid ⊃ group
//! - **Reporting**: human-readable text or JSON, driven by a pluggable [`Reporter`]
//!
//! ```
//! use algebraic_system::prelude::*;
//!
//! let z3 = CayleyTable::cyclic(3);
//! assert!(z3.is_group().unwrap());
//! assert_eq!(z3.find_identity_index(), Some(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Cayley tables and the predicates defined over them
pub mod algebra;

/// Whole-table analysis and its configuration
pub mod core;

/// Rendering analysis results for humans and machines
pub mod report;

/// Input parsing and other helpers
pub mod utils;

// Re-export commonly used types
pub use self::algebra::{CayleyTable, Element, Encoding, InverseRecord, Structure};
pub use self::core::{analyze, Analysis, AnalysisConfig, OutputFormat};
pub use self::report::{JsonReporter, Reporter, TextReporter};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum AlgebraError {
    /// Set size and table shape disagree, or the size itself is unusable
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A table value had to be used as a table position but is not one
    #[error("Invalid encoding: value {value} is not a position in a table of order {order}")]
    InvalidEncoding {
        /// The offending value, as displayed
        value: String,
        /// Order of the table the lookup was made against
        order: usize,
    },

    /// Malformed textual input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Inconsistent analysis configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, AlgebraError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        algebra::{CayleyTable, Element, Encoding, InverseRecord, Structure},
        core::{analyze, Analysis, AnalysisConfig, OutputFormat},
        report::{JsonReporter, Reporter, TextReporter},
        AlgebraError, Result,
    };
}
