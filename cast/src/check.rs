use std::fmt;

use crate::IntKind;
use crate::Value;

/// Result of a range check.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    Ok,
    Overflow,
}

impl Outcome {
    pub fn is_ok(self) -> bool {
        self == Outcome::Ok
    }
    pub fn is_overflow(self) -> bool {
        self == Outcome::Overflow
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Outcome::Ok => "ok",
            Outcome::Overflow => "overflow",
        })
    }
}

/// Checks whether `value` survives a conversion to `kind` unchanged.
///
/// Returns `Outcome::Overflow` if the value lies outside of
/// `kind.min()..=kind.max()`. The comparison is done in `i128`, which holds
/// every `Value` as well as the bounds of every kind, so the check itself
/// cannot overflow.
#[inline]
#[must_use]
pub fn check<V: Into<Value>>(kind: IntKind, value: V) -> Outcome {
    if kind.contains(value) {
        Outcome::Ok
    } else {
        Outcome::Overflow
    }
}

impl IntKind {
    #[inline]
    pub fn contains<V: Into<Value>>(self, value: V) -> bool {
        let v = value.into().wide();
        self.min() <= v && v <= self.max()
    }
}
