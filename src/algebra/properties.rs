//! Closure, commutativity, associativity and idempotence

use super::{CayleyTable, Element};
use crate::Result;

impl<T: Element> CayleyTable<T> {
    /// Every table value is a member of the carrier set.
    ///
    /// Membership is tested by value; the first foreign value decides.
    pub fn is_closure(&self) -> bool {
        for ((i, j), value) in self.table().indexed_iter() {
            if !self.contains(value) {
                tracing::trace!(i, j, %value, "value outside the carrier set");
                return false;
            }
        }
        true
    }

    /// `S[i] ∘ S[j] == S[j] ∘ S[i]` for every pair off the diagonal
    pub fn is_commutative(&self) -> bool {
        let n = self.order();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.get(i, j) != self.get(j, i) {
                    tracing::trace!(i, j, "table is not symmetric");
                    return false;
                }
            }
        }
        true
    }

    /// `(x ∘ y) ∘ z == x ∘ (y ∘ z)` for every triple.
    ///
    /// Intermediate results are turned back into table positions with the
    /// table's [`Encoding`](super::Encoding). Each value is resolved only when
    /// the triple being checked needs it, so a counterexample met before an
    /// unresolvable value yields `Ok(false)`.
    ///
    /// # Errors
    /// [`AlgebraError::InvalidEncoding`](crate::AlgebraError::InvalidEncoding)
    /// if a value needed as a position is not one.
    pub fn is_associative(&self) -> Result<bool> {
        let n = self.order();
        for i in 0..n {
            for j in 0..n {
                let ij = self.resolve(self.get(i, j))?;
                for k in 0..n {
                    let left = self.get(ij, k);
                    let jk = self.resolve(self.get(j, k))?;
                    let right = self.get(i, jk);
                    if left != right {
                        tracing::trace!(i, j, k, "associativity fails");
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }

    /// `S[i] ∘ S[i] == S[i]` for every element
    pub fn is_idempotent(&self) -> bool {
        (0..self.order()).all(|i| self.get(i, i) == self.element(i))
    }
}
