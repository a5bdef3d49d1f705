//! Finite algebraic systems and their property predicates

mod element;
mod table;
mod properties;
mod special;
mod classification;

pub use element::Element;
pub use table::{CayleyTable, Encoding};
pub use special::InverseRecord;
pub use classification::Structure;
