use std::fmt;

/// Source of a narrowing conversion.
///
/// No single 64-bit integer holds both `-1` and `u64::MAX`, so the value
/// remembers which representation it came from. `Wide` reaches one step past
/// either end of the 64-bit ranges.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Signed(i64),
    Unsigned(u64),
    Wide(i128),
}

impl Value {
    /// The value as a mathematical integer.
    #[inline]
    pub const fn wide(self) -> i128 {
        match self {
            Value::Signed(v) => v as i128,
            Value::Unsigned(v) => v as i128,
            Value::Wide(v) => v,
        }
    }
}

macro_rules! from_primitive {
    ($variant:ident, $wide:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                #[inline]
                fn from(v: $t) -> Value {
                    Value::$variant(<$wide>::from(v))
                }
            }
        )*
    };
}

from_primitive!(Signed, i64, i8, i16, i32, i64);
from_primitive!(Unsigned, u64, u8, u16, u32, u64);
from_primitive!(Wide, i128, i128);

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Signed(v) => fmt::Display::fmt(&v, f),
            Value::Unsigned(v) => fmt::Display::fmt(&v, f),
            Value::Wide(v) => fmt::Display::fmt(&v, f),
        }
    }
}
