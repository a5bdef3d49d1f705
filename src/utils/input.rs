//! Whitespace-separated textual input for a Cayley table
//!
//! Layout: the set size `n`, then the `n` elements of the set, then the
//! `n * n` table entries in row-major order.

use crate::algebra::{CayleyTable, Element};
use crate::{AlgebraError, Result};
use std::str::FromStr;

/// Parse `n`, the set and the table from `text`.
///
/// # Errors
/// - [`AlgebraError::InvalidInput`] for an empty input or a token that is
///   not a valid value
/// - [`AlgebraError::InvalidDimension`] for a negative `n` or a token count
///   other than `1 + n + n * n`
pub fn parse_input<T>(text: &str) -> Result<CayleyTable<T>>
where
    T: Element + FromStr,
{
    let mut tokens = text.split_whitespace();

    let size = tokens
        .next()
        .ok_or_else(|| AlgebraError::InvalidInput("missing set size".to_string()))?;
    let n = parse_size(size)?;

    let expected = n
        .checked_mul(n)
        .and_then(|cells| cells.checked_add(n))
        .ok_or_else(|| AlgebraError::InvalidDimension(format!("set size {} is too large", n)))?;

    let mut values = tokens
        .enumerate()
        .map(|(i, token)| {
            token.parse::<T>().map_err(|_| {
                AlgebraError::InvalidInput(format!(
                    "token {} ({:?}) is not a valid value",
                    i + 2,
                    token
                ))
            })
        })
        .collect::<Result<Vec<T>>>()?;

    if values.len() != expected {
        return Err(AlgebraError::InvalidDimension(format!(
            "a set of {} elements needs {} values after the size, found {}",
            n,
            expected,
            values.len()
        )));
    }

    let table = values.split_off(n);
    CayleyTable::from_flat(values, table)
}

fn parse_size(token: &str) -> Result<usize> {
    let n: i64 = token.parse().map_err(|_| {
        AlgebraError::InvalidInput(format!("set size {:?} is not an integer", token))
    })?;

    usize::try_from(n).map_err(|_| {
        AlgebraError::InvalidDimension(format!("set size must be non-negative, got {}", n))
    })
}
