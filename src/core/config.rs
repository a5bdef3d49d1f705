//! Analysis configuration

use crate::algebra::Encoding;
use crate::{AlgebraError, Result};
use serde::{Deserialize, Serialize};

/// How an analysis is rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable sections
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Analysis configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Value-to-position encoding for associativity checks
    pub encoding: Encoding,
    /// Report format
    pub format: OutputFormat,
    /// List left/right inverses of every element in text reports
    pub show_inverses: bool,
    /// Largest set size accepted
    pub max_order: usize,
}

impl AnalysisConfig {
    /// Config for tables whose values are arbitrary members of the set
    pub fn lookup() -> Self {
        AnalysisConfig {
            encoding: Encoding::Lookup,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_order == 0 {
            return Err(AlgebraError::Config(
                "max_order must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Reject sets larger than `max_order`
    pub fn check_order(&self, order: usize) -> Result<()> {
        if order > self.max_order {
            return Err(AlgebraError::InvalidDimension(format!(
                "set of {} elements exceeds the configured maximum of {}",
                order, self.max_order
            )));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            encoding: Encoding::Positional,
            format: OutputFormat::Text,
            show_inverses: true,
            max_order: 256,
        }
    }
}
