//! Checked narrowing of integers.
//!
//! [`check`] decides whether a value fits into one of the eight fixed-width
//! integer kinds. [`try_narrow`] and [`assert_narrow`] build typed
//! conversions on top of it.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub use self::cast::assert_narrow;
pub use self::cast::try_narrow;
pub use self::cast::Narrow;
pub use self::cast::Overflow;
pub use self::check::check;
pub use self::check::Outcome;
pub use self::kind::IntKind;
pub use self::kind::UnknownKind;
pub use self::value::Value;

mod cast;
mod check;
mod kind;
mod value;
