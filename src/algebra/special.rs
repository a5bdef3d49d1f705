//! Identity, zero and inverse elements

use super::{CayleyTable, Element};
use serde::{Deserialize, Serialize};

/// Left and right inverses found for one element, as positions.
///
/// `None` means no inverse on that side; a list with more than one entry
/// means the inverse is not unique. Lists are in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InverseRecord {
    /// Positions `i` with `S[i] ∘ x = e`
    pub left_inverse: Option<Vec<usize>>,
    /// Positions `j` with `x ∘ S[j] = e`
    pub right_inverse: Option<Vec<usize>>,
}

impl InverseRecord {
    /// The single two-sided inverse, if there is exactly one on each side
    /// and both sides agree.
    pub fn unique_two_sided(&self) -> Option<usize> {
        match (self.left_inverse.as_deref(), self.right_inverse.as_deref()) {
            (Some(&[left]), Some(&[right])) if left == right => Some(left),
            _ => None,
        }
    }
}

impl<T: Element> CayleyTable<T> {
    /// Tally, for every position, how many one-sided identity (or zero)
    /// equations it takes part in across the whole table.
    ///
    /// With `absorbing == false`, `counts[k]` grows when `S[k]` leaves the
    /// other operand unchanged; with `absorbing == true`, when `S[k]` wins.
    fn side_counts(&self, absorbing: bool) -> Vec<usize> {
        let n = self.order();
        let mut counts = vec![0; n];
        for i in 0..n {
            for j in 0..n {
                let value = self.get(i, j);
                if value == self.element(i) {
                    counts[if absorbing { i } else { j }] += 1;
                }
                if value == self.element(j) {
                    counts[if absorbing { j } else { i }] += 1;
                }
            }
        }
        counts
    }

    /// Position of the two-sided identity element, if one exists.
    ///
    /// An identity `e` satisfies `e ∘ x = x ∘ e = x` against all `n`
    /// elements, which is exactly `2n` tallies; no other position can
    /// reach that many.
    pub fn find_identity_index(&self) -> Option<usize> {
        let target = 2 * self.order();
        self.side_counts(false)
            .into_iter()
            .position(|count| count == target)
    }

    /// The identity element itself, if one exists
    pub fn identity(&self) -> Option<&T> {
        self.find_identity_index().map(|i| self.element(i))
    }

    /// Whether some element `z` satisfies `z ∘ x = x ∘ z = z` for all `x`
    pub fn has_zero_element(&self) -> bool {
        let target = 2 * self.order();
        self.side_counts(true).contains(&target)
    }

    /// Inverses of every element with respect to the identity.
    ///
    /// Returns one record per position. Without an identity every record is
    /// empty.
    pub fn find_inverses(&self) -> Vec<InverseRecord> {
        let n = self.order();
        let mut records = vec![InverseRecord::default(); n];

        let Some(identity) = self.identity() else {
            return records;
        };

        for i in 0..n {
            for j in 0..n {
                if self.get(i, j) == identity {
                    records[i].right_inverse.get_or_insert_with(Vec::new).push(j);
                    records[j].left_inverse.get_or_insert_with(Vec::new).push(i);
                }
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_in_cyclic_group() {
        let z4 = CayleyTable::cyclic(4);
        assert_eq!(z4.find_identity_index(), Some(0));
        assert_eq!(z4.identity(), Some(&0));
        assert!(!z4.has_zero_element());
    }

    #[test]
    fn test_identity_not_first_position() {
        // Multiplicative {-1, 1}: identity sits at position 1
        let t = CayleyTable::new(vec![-1, 1], vec![vec![1, -1], vec![-1, 1]]).unwrap();
        assert_eq!(t.find_identity_index(), Some(1));
        assert_eq!(t.identity(), Some(&1));
    }

    #[test]
    fn test_one_sided_identity_is_not_enough() {
        // Left projection: every element is a right identity, none is two-sided
        let t = CayleyTable::new(vec![0, 1], vec![vec![0, 0], vec![1, 1]]).unwrap();
        assert_eq!(t.find_identity_index(), None);
        assert!(t.find_inverses().iter().all(|r| *r == InverseRecord::default()));
    }

    #[test]
    fn test_zero_element() {
        let t = CayleyTable::new(
            vec![1, 2, 3],
            vec![vec![1, 2, 3], vec![2, 1, 3], vec![3, 3, 3]],
        )
        .unwrap();
        assert!(t.has_zero_element());
        assert_eq!(t.find_identity_index(), Some(0));
    }

    #[test]
    fn test_empty_system_has_no_special_elements() {
        let t: CayleyTable<i64> = CayleyTable::new(vec![], vec![]).unwrap();
        assert_eq!(t.find_identity_index(), None);
        assert!(!t.has_zero_element());
        assert!(t.find_inverses().is_empty());
    }

    #[test]
    fn test_singleton_is_its_own_everything() {
        let t = CayleyTable::new(vec!['x'], vec![vec!['x']]).unwrap();
        assert_eq!(t.find_identity_index(), Some(0));
        assert!(t.has_zero_element());
        let inverses = t.find_inverses();
        assert_eq!(inverses.len(), 1);
        assert_eq!(inverses[0].unique_two_sided(), Some(0));
    }

    #[test]
    fn test_cyclic_inverses() {
        let z5 = CayleyTable::cyclic(5);
        for (i, record) in z5.find_inverses().iter().enumerate() {
            assert_eq!(record.unique_two_sided(), Some((5 - i) % 5));
        }
    }

    #[test]
    fn test_multiple_inverses_are_kept() {
        // Identity 0; 1 and 2 both map to 0 against each other and themselves
        let t = CayleyTable::new(
            vec![0, 1, 2],
            vec![vec![0, 1, 2], vec![1, 0, 0], vec![2, 0, 0]],
        )
        .unwrap();
        let inverses = t.find_inverses();
        assert_eq!(inverses[1].right_inverse, Some(vec![1, 2]));
        assert_eq!(inverses[1].left_inverse, Some(vec![1, 2]));
        assert_eq!(inverses[1].unique_two_sided(), None);
        assert_eq!(inverses[0].unique_two_sided(), Some(0));
    }

    #[test]
    fn test_unique_two_sided_requires_agreement() {
        let record = InverseRecord {
            left_inverse: Some(vec![1]),
            right_inverse: Some(vec![2]),
        };
        assert_eq!(record.unique_two_sided(), None);

        let record = InverseRecord {
            left_inverse: None,
            right_inverse: Some(vec![2]),
        };
        assert_eq!(record.unique_two_sided(), None);
    }
}
