//! One-shot analysis of a Cayley table

use crate::{
    algebra::{CayleyTable, Element, Encoding, InverseRecord, Structure},
    utils::timing::Timer,
    Result,
};
use serde::Serialize;

/// Inverses of a single element, by value
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElementInverses<T> {
    /// The element whose inverses are listed
    pub element: T,
    /// Left inverses, `None` if there are none
    pub left: Option<Vec<T>>,
    /// Right inverses, `None` if there are none
    pub right: Option<Vec<T>>,
}

/// Every verdict about one algebraic system
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis<T> {
    /// Number of elements
    pub order: usize,
    /// Encoding the associativity check ran with
    pub encoding: Encoding,
    /// Closure
    pub closure: bool,
    /// Commutativity
    pub commutative: bool,
    /// Associativity
    pub associative: bool,
    /// Idempotence
    pub idempotent: bool,
    /// The identity element, if any
    pub identity: Option<T>,
    /// Whether a zero (absorbing) element exists
    pub has_zero: bool,
    /// Inverses of every element, in set order
    pub inverses: Vec<ElementInverses<T>>,
    /// Groupoid
    pub groupoid: bool,
    /// Semigroup
    pub semigroup: bool,
    /// Monoid
    pub monoid: bool,
    /// Group
    pub group: bool,
    /// Most specific class reached
    pub structure: Structure,
}

/// Run every predicate over `table`.
///
/// A table that is not closed is reported as such: associativity is only
/// checked over closed tables and is recorded as `false` otherwise.
///
/// # Errors
/// [`AlgebraError::InvalidEncoding`](crate::AlgebraError::InvalidEncoding)
/// if the table is closed but one of its values cannot serve as a position.
pub fn analyze<T: Element>(table: &CayleyTable<T>) -> Result<Analysis<T>> {
    let _timer = Timer::new("analysis");

    let closure = table.is_closure();
    let commutative = table.is_commutative();
    let associative = closure && table.is_associative()?;
    let idempotent = table.is_idempotent();

    let identity = table.identity().cloned();
    let has_zero = table.has_zero_element();
    let records = table.find_inverses();

    let groupoid = closure;
    let semigroup = groupoid && associative;
    let monoid = semigroup && identity.is_some();
    let group = monoid && records.iter().all(|r| r.unique_two_sided().is_some());

    let structure = match (groupoid, semigroup, monoid, group) {
        (false, ..) => Structure::NotClosed,
        (true, false, ..) => Structure::Groupoid,
        (true, true, false, _) => Structure::Semigroup,
        (true, true, true, false) => Structure::Monoid,
        (true, true, true, true) => Structure::Group,
    };

    let inverses = records
        .iter()
        .zip(table.elements())
        .map(|(record, element)| to_values(table, element, record))
        .collect();

    tracing::debug!(order = table.order(), %structure, "analysis complete");

    Ok(Analysis {
        order: table.order(),
        encoding: table.encoding(),
        closure,
        commutative,
        associative,
        idempotent,
        identity,
        has_zero,
        inverses,
        groupoid,
        semigroup,
        monoid,
        group,
        structure,
    })
}

fn to_values<T: Element>(
    table: &CayleyTable<T>,
    element: &T,
    record: &InverseRecord,
) -> ElementInverses<T> {
    let lookup = |positions: &Vec<usize>| -> Vec<T> {
        positions.iter().map(|&p| table.element(p).clone()).collect()
    };

    ElementInverses {
        element: element.clone(),
        left: record.left_inverse.as_ref().map(lookup),
        right: record.right_inverse.as_ref().map(lookup),
    }
}
