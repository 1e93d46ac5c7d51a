#[macro_use]
extern crate log;

use narrow_cast::check;
use narrow_cast::IntKind;
use narrow_cast::Outcome;
use narrow_cast::Value;
use std::fmt;
use warn::Warn;

pub mod table;

/// A boundary value together with the outcome the range check must give.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Case {
    pub name: &'static str,
    pub kind: IntKind,
    pub value: Value,
    pub expected: Outcome,
}

impl Case {
    pub const fn new(name: &'static str, kind: IntKind, value: Value, expected: Outcome) -> Case {
        Case {
            name,
            kind,
            value,
            expected,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} as {} is {}", self.name, self.value, self.kind, self.expected)
    }
}

/// A case whose range check disagreed with its expectation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Failure {
    pub name: &'static str,
    pub expected: Outcome,
    pub actual: Outcome,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: FAILED (expected {}, got {})", self.name, self.expected, self.actual)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub run: usize,
    pub failed: usize,
    /// Index into the case table of the first failing case.
    pub first_failure: Option<usize>,
}

impl Summary {
    /// Process exit status, `0` if every case passed.
    pub fn status(&self) -> i32 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}

/// Runs the `selected` cases, or all of them if `selected` is empty.
///
/// Every failing case is passed to `warn`, the run continues after a
/// failure. Names that don't appear in `cases` are skipped.
pub fn run<S, W>(cases: &[Case], selected: &[S], warn: &mut W) -> Summary
where
    S: AsRef<str>,
    W: Warn<Failure>,
{
    for name in selected {
        let name = name.as_ref();
        if !cases.iter().any(|c| c.name == name) {
            debug!("skipping unknown case {:?}", name);
        }
    }
    let mut summary = Summary::default();
    for (i, case) in cases.iter().enumerate() {
        if !selected.is_empty() && !selected.iter().any(|s| s.as_ref() == case.name) {
            continue;
        }
        let actual = check(case.kind, case.value);
        debug!("{}: {} as {} is {}", case.name, case.value, case.kind, actual);
        summary.run += 1;
        if actual != case.expected {
            summary.failed += 1;
            if summary.first_failure.is_none() {
                summary.first_failure = Some(i);
            }
            warn.warn(Failure {
                name: case.name,
                expected: case.expected,
                actual,
            });
        }
    }
    info!("ran {} cases, {} failed", summary.run, summary.failed);
    summary
}
