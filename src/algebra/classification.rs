//! Placement in the hierarchy groupoid ⊃ semigroup ⊃ monoid ⊃ group

use super::{CayleyTable, Element};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The most specific class an algebraic system belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Structure {
    /// The operation leaves the carrier set
    NotClosed,
    /// Closed operation, nothing more
    Groupoid,
    /// Associative groupoid
    Semigroup,
    /// Semigroup with an identity element
    Monoid,
    /// Monoid in which every element has a unique two-sided inverse
    Group,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Structure::NotClosed => "not closed",
            Structure::Groupoid => "groupoid",
            Structure::Semigroup => "semigroup",
            Structure::Monoid => "monoid",
            Structure::Group => "group",
        };
        f.write_str(name)
    }
}

impl<T: Element> CayleyTable<T> {
    /// A groupoid only needs a closed operation
    pub fn is_groupoid(&self) -> bool {
        self.is_closure()
    }

    /// Groupoid with an associative operation
    pub fn is_semigroup(&self) -> Result<bool> {
        Ok(self.is_groupoid() && self.is_associative()?)
    }

    /// Semigroup with a two-sided identity
    pub fn is_monoid(&self) -> Result<bool> {
        Ok(self.is_semigroup()? && self.find_identity_index().is_some())
    }

    /// Monoid in which every element has exactly one left inverse and
    /// exactly one right inverse, and the two coincide.
    ///
    /// The empty system has no identity and is therefore not a group.
    pub fn is_group(&self) -> Result<bool> {
        if !self.is_monoid()? {
            return Ok(false);
        }

        Ok(self
            .find_inverses()
            .iter()
            .all(|record| record.unique_two_sided().is_some()))
    }

    /// Walk the hierarchy and stop at the first class that fails
    pub fn classify(&self) -> Result<Structure> {
        let structure = if !self.is_groupoid() {
            Structure::NotClosed
        } else if !self.is_semigroup()? {
            Structure::Groupoid
        } else if !self.is_monoid()? {
            Structure::Semigroup
        } else if !self.is_group()? {
            Structure::Monoid
        } else {
            Structure::Group
        };
        Ok(structure)
    }
}
