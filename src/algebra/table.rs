//! Carrier set paired with its Cayley table

use super::Element;
use crate::{AlgebraError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a table value is turned back into a table position when an
/// operation result has to be fed into another lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// The value itself is the 0-based row/column index
    #[default]
    Positional,
    /// The value is searched for in the carrier set
    Lookup,
}

/// A finite algebraic system `(S, ∘)`.
///
/// - `elements` is the ordered carrier set `S`; the order defines positions
/// - `table[[i, j]]` holds the value of `S[i] ∘ S[j]`
/// - Table entries are values, which may fall outside `S`
///
/// Both parts are fixed at construction; every predicate borrows the table
/// immutably.
#[derive(Clone, PartialEq)]
pub struct CayleyTable<T> {
    elements: Vec<T>,
    table: Array2<T>,
    encoding: Encoding,
}

impl<T: Element> CayleyTable<T> {
    /// Create a system from its carrier set and the table given row by row
    pub fn new(elements: Vec<T>, rows: Vec<Vec<T>>) -> Result<Self> {
        let n = elements.len();
        if rows.len() != n {
            return Err(AlgebraError::InvalidDimension(format!(
                "expected {} rows, found {}",
                n,
                rows.len()
            )));
        }

        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AlgebraError::InvalidDimension(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            values.extend(row);
        }

        Self::from_flat(elements, values)
    }

    /// Create a system from its carrier set and the table in row-major order
    pub fn from_flat(elements: Vec<T>, values: Vec<T>) -> Result<Self> {
        let n = elements.len();
        if values.len() != n * n {
            return Err(AlgebraError::InvalidDimension(format!(
                "a set of {} elements needs {} table entries, found {}",
                n,
                n * n,
                values.len()
            )));
        }

        let table = Array2::from_shape_vec((n, n), values)
            .map_err(|e| AlgebraError::InvalidDimension(e.to_string()))?;

        tracing::debug!(order = n, "built Cayley table");
        Ok(CayleyTable {
            elements,
            table,
            encoding: Encoding::default(),
        })
    }

    /// Use a different value-to-position encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Number of elements `n`
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The carrier set, in position order
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// The element at position `i`
    pub fn element(&self, i: usize) -> &T {
        &self.elements[i]
    }

    /// The value of `S[i] ∘ S[j]`
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.table[[i, j]]
    }

    /// The operation table
    pub fn table(&self) -> &Array2<T> {
        &self.table
    }

    /// Encoding used when values are fed back into the table
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Position of `value` in the carrier set, if it is a member
    pub fn position_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == value)
    }

    /// Whether `value` belongs to the carrier set
    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    /// Turn a table value into a position according to the encoding.
    ///
    /// Fails with [`AlgebraError::InvalidEncoding`] when the value does not
    /// name a position in `[0, n)`.
    pub(crate) fn resolve(&self, value: &T) -> Result<usize> {
        let n = self.order();
        let position = match self.encoding {
            Encoding::Positional => value.as_position().filter(|&p| p < n),
            Encoding::Lookup => self.position_of(value),
        };

        position.ok_or_else(|| AlgebraError::InvalidEncoding {
            value: value.to_string(),
            order: n,
        })
    }
}

impl CayleyTable<usize> {
    /// A table on `{0, ..., n-1}` whose entry at `(r, c)` is `f(r, c)`
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> usize,
    {
        CayleyTable {
            elements: (0..n).collect(),
            table: Array2::from_shape_fn((n, n), |(r, c)| f(r, c)),
            encoding: Encoding::default(),
        }
    }

    /// Integers mod `n` under addition: `table[[r, c]] = (r + c) mod n`.
    ///
    /// Values coincide with positions, so the result is valid under either
    /// encoding.
    pub fn cyclic(n: usize) -> Self {
        Self::from_fn(n, |r, c| (r + c) % n)
    }
}

impl<T: Element> fmt::Debug for CayleyTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CayleyTable(order={}, {:?})", self.order(), self.encoding)?;
        write!(f, "  ∘ |")?;
        for e in &self.elements {
            write!(f, " {}", e)?;
        }
        writeln!(f)?;
        for (i, row) in self.table.rows().into_iter().enumerate() {
            write!(f, "  {} |", self.elements[i])?;
            for v in row {
                write!(f, " {}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
