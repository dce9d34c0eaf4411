//! Classification and value conversion of single ASCII character codes.
//!
//! A character code is an `i32`, so that anything a C `int` can hold is a
//! valid input. Every predicate is total over that domain.

pub mod ctype;
pub use ctype::*;
