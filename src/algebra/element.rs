//! Values that can populate a carrier set and its operation table

use num_traits::ToPrimitive;
use std::fmt;

/// A value of the carrier set.
///
/// Elements are compared by value only; their order in the set is what
/// defines table positions. Positional encoding additionally needs a value
/// to double as a row/column index, which [`Element::as_position`] provides.
pub trait Element: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Interpret this value as a 0-based table position, if it can be one.
    fn as_position(&self) -> Option<usize>;
}

macro_rules! integer_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn as_position(&self) -> Option<usize> {
                    self.to_usize()
                }
            }
        )*
    };
}

integer_element!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Element for char {
    fn as_position(&self) -> Option<usize> {
        None
    }
}

impl Element for String {
    fn as_position(&self) -> Option<usize> {
        None
    }
}

impl Element for &str {
    fn as_position(&self) -> Option<usize> {
        None
    }
}
