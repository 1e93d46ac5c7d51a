use thiserror::Error;

use crate::check;
use crate::IntKind;
use crate::Outcome;
use crate::Value;

/// A value that did not fit into the requested integer type.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
#[error("overflow casting {value} to `{kind}`")]
pub struct Overflow {
    pub kind: IntKind,
    pub value: Value,
}

/// Primitive integer types that can be the target of a checked narrowing.
pub trait Narrow: Copy + Sized {
    const KIND: IntKind;
    /// Converts a value that is already known to be in range.
    fn from_wide_unchecked(wide: i128) -> Self;
}

macro_rules! narrow {
    ($($t:ty => $kind:ident,)*) => {
        $(
            impl Narrow for $t {
                const KIND: IntKind = IntKind::$kind;
                #[inline]
                fn from_wide_unchecked(wide: i128) -> $t {
                    wide as $t
                }
            }
        )*
    };
}

narrow! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
}

#[cold]
#[inline(never)]
fn overflow(overflow: Overflow) -> ! {
    panic!("Overflow casting {} to `{}`", overflow.value, overflow.kind);
}

/// Converts `value` to `T`, failing instead of truncating.
#[inline]
pub fn try_narrow<T: Narrow, V: Into<Value>>(value: V) -> Result<T, Overflow> {
    let value = value.into();
    match check(T::KIND, value) {
        Outcome::Ok => Ok(T::from_wide_unchecked(value.wide())),
        Outcome::Overflow => Err(Overflow { kind: T::KIND, value }),
    }
}

/// Converts `value` to `T`, panicking if it does not fit.
#[inline]
pub fn assert_narrow<T: Narrow, V: Into<Value>>(value: V) -> T {
    match try_narrow(value) {
        Ok(v) => v,
        Err(e) => overflow(e),
    }
}
