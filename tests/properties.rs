//! Property tests for the predicates and the classification hierarchy

use algebraic_system::prelude::*;
use proptest::prelude::*;

/// A table on `{0, ..., n-1}` whose entries may include the foreign value `n`
fn arb_table(max_order: usize, allow_foreign: bool) -> impl Strategy<Value = CayleyTable<usize>> {
    (0..=max_order).prop_flat_map(move |n| {
        let bound = if allow_foreign { n + 1 } else { n.max(1) };
        prop::collection::vec(0..bound, n * n).prop_map(move |values| {
            CayleyTable::from_flat((0..n).collect(), values).unwrap()
        })
    })
}

proptest! {
    /// group ⇒ monoid ⇒ semigroup ⇒ groupoid
    #[test]
    fn hierarchy_is_monotone(table in arb_table(4, true)) {
        let groupoid = table.is_groupoid();
        let semigroup = table.is_semigroup().unwrap();
        let monoid = table.is_monoid().unwrap();
        let group = table.is_group().unwrap();

        prop_assert!(!semigroup || groupoid);
        prop_assert!(!monoid || semigroup);
        prop_assert!(!group || monoid);
    }

    /// Repeated calls on an unchanged table agree
    #[test]
    fn predicates_are_pure(table in arb_table(4, false)) {
        prop_assert_eq!(table.is_closure(), table.is_closure());
        prop_assert_eq!(table.is_commutative(), table.is_commutative());
        prop_assert_eq!(table.is_associative().unwrap(), table.is_associative().unwrap());
        prop_assert_eq!(table.is_idempotent(), table.is_idempotent());
        prop_assert_eq!(table.find_identity_index(), table.find_identity_index());
        prop_assert_eq!(table.has_zero_element(), table.has_zero_element());
        prop_assert_eq!(table.find_inverses(), table.find_inverses());
        prop_assert_eq!(table.classify().unwrap(), table.classify().unwrap());
    }

    /// A reported identity really is one, on both sides
    #[test]
    fn identity_is_two_sided(table in arb_table(4, true)) {
        if let Some(k) = table.find_identity_index() {
            for i in 0..table.order() {
                prop_assert_eq!(table.get(k, i), table.element(i));
                prop_assert_eq!(table.get(i, k), table.element(i));
            }
        }
    }

    /// A zero element exists exactly when some row and column are constant at it
    #[test]
    fn zero_element_matches_definition(table in arb_table(4, true)) {
        let n = table.order();
        let brute_force = (0..n).any(|z| {
            let zero = table.element(z);
            (0..n).all(|x| table.get(z, x) == zero && table.get(x, z) == zero)
        });
        prop_assert_eq!(table.has_zero_element(), brute_force);
    }

    /// Inverse lists contain exactly the positions that compose to the identity
    #[test]
    fn inverses_match_definition(table in arb_table(4, false)) {
        let records = table.find_inverses();
        prop_assert_eq!(records.len(), table.order());

        match table.find_identity_index() {
            None => prop_assert!(records.iter().all(|r| *r == InverseRecord::default())),
            Some(e) => {
                for (x, record) in records.iter().enumerate() {
                    let n = table.order();
                    let right: Vec<usize> = (0..n).filter(|&y| *table.get(x, y) == e).collect();
                    let left: Vec<usize> = (0..n).filter(|&y| *table.get(y, x) == e).collect();
                    prop_assert_eq!(record.right_inverse.clone().unwrap_or_default(), right);
                    prop_assert_eq!(record.left_inverse.clone().unwrap_or_default(), left);
                }
            }
        }
    }

    /// On index-valued sets both encodings read the table identically
    #[test]
    fn encodings_agree_on_index_sets(table in arb_table(4, false)) {
        let positional = table.is_associative().unwrap();
        let lookup = table.clone().with_encoding(Encoding::Lookup).is_associative().unwrap();
        prop_assert_eq!(positional, lookup);
    }

    /// Renaming every element leaves the lookup-encoded classification unchanged
    #[test]
    fn classification_survives_relabeling(table in arb_table(4, false)) {
        let n = table.order();
        let shifted = CayleyTable::from_flat(
            (0..n).map(|x| x as i64 + 10).collect(),
            table.table().iter().map(|&v| v as i64 + 10).collect(),
        )
        .unwrap()
        .with_encoding(Encoding::Lookup);

        prop_assert_eq!(shifted.classify().unwrap(), table.classify().unwrap());
        prop_assert_eq!(shifted.find_identity_index(), table.find_identity_index());
    }

    /// analyze() agrees with the individual predicates
    #[test]
    fn analysis_matches_predicates(table in arb_table(4, false)) {
        let analysis = analyze(&table).unwrap();
        prop_assert_eq!(analysis.commutative, table.is_commutative());
        prop_assert_eq!(analysis.idempotent, table.is_idempotent());
        prop_assert_eq!(analysis.has_zero, table.has_zero_element());
        prop_assert_eq!(analysis.identity, table.identity().copied());
        prop_assert_eq!(analysis.group, table.is_group().unwrap());
        prop_assert_eq!(analysis.structure, table.classify().unwrap());
    }

    /// Foreign values are a verdict, never an error
    #[test]
    fn analysis_reports_foreign_values(table in arb_table(4, true)) {
        let analysis = analyze(&table).unwrap();
        prop_assert_eq!(analysis.closure, table.is_closure());
        prop_assert!(analysis.closure || (!analysis.associative && !analysis.groupoid));

        let by_lookup = analyze(&table.clone().with_encoding(Encoding::Lookup)).unwrap();
        prop_assert_eq!(by_lookup.structure, analysis.structure);
    }

    /// Integers mod n under addition form a group with inverse n - i
    #[test]
    fn cyclic_group_inverses(n in 1usize..=12) {
        let z = CayleyTable::cyclic(n);
        prop_assert!(z.is_group().unwrap());
        for (i, record) in z.find_inverses().iter().enumerate() {
            prop_assert_eq!(record.left_inverse.clone(), Some(vec![(n - i) % n]));
            prop_assert_eq!(record.right_inverse.clone(), Some(vec![(n - i) % n]));
        }
    }
}
