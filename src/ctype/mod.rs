pub mod predicate;
pub use predicate::*;

pub mod case;
pub use case::*;

pub mod digit;
pub use digit::*;

pub mod category;
pub use category::*;

/// Horizontal tab
pub const TAB: i32 = b'\t' as i32;

/// Carriage return
pub const CARRIAGE_RETURN: i32 = b'\r' as i32;

/// Space
pub const SPACE: i32 = b' ' as i32;

/// Delete, the only control code above the printable range
pub const DELETE: i32 = 0x7f;
