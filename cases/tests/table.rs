use narrow_cases::run;
use narrow_cases::table;
use narrow_cases::table::CASES;
use narrow_cases::Case;
use narrow_cases::Failure;
use narrow_cast::check;
use narrow_cast::IntKind;
use narrow_cast::Outcome;
use narrow_cast::Value;
use std::collections::HashSet;

const ALL: &[&str] = &[];

#[test]
fn all_cases_pass() {
    let mut failures: Vec<Failure> = vec![];
    let summary = run(CASES, ALL, &mut failures);
    assert_eq!(failures, []);
    assert_eq!(summary.run, CASES.len());
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.status(), 0);
}

#[test]
fn unique_names() {
    let mut names = HashSet::new();
    for case in CASES {
        assert!(names.insert(case.name), "duplicate case {}", case.name);
    }
}

#[test]
fn every_kind_has_boundaries() {
    for &kind in &IntKind::ALL {
        let mut suffixes = vec!["one", "zero", "min", "max", "min_minus_one", "max_plus_one"];
        if kind.signed() {
            suffixes.push("minus_one");
        }
        for suffix in suffixes {
            let name = format!("{}_{}", kind, suffix);
            let case = table::find(&name).unwrap_or_else(|| panic!("missing case {}", name));
            assert_eq!(case.kind, kind);
        }
    }
}

#[test]
fn boundaries_are_exact() {
    for &kind in &IntKind::ALL {
        let case = |suffix: &str| table::find(&format!("{}_{}", kind, suffix)).unwrap().value.wide();
        assert_eq!(case("min"), kind.min());
        assert_eq!(case("max"), kind.max());
        assert_eq!(case("min_minus_one"), kind.min() - 1);
        assert_eq!(case("max_plus_one"), kind.max() + 1);
    }
}

#[test]
fn one_wrong_expectation() {
    let mut cases = CASES.to_vec();
    let i = cases.iter().position(|c| c.name == "u16_max_plus_one").unwrap();
    cases[i].expected = Outcome::Ok;

    let mut failures = vec![];
    let summary = run(&cases, ALL, &mut failures);
    assert_eq!(failures, [Failure {
        name: "u16_max_plus_one",
        expected: Outcome::Ok,
        actual: Outcome::Overflow,
    }]);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.first_failure, Some(i));
    assert_ne!(summary.status(), 0);
}

#[test]
fn select_by_name() {
    let mut failures: Vec<Failure> = vec![];
    let summary = run(CASES, &["u64_max", "i64_min_minus_one", "bogus"], &mut failures);
    assert!(failures.is_empty());
    assert_eq!(summary.run, 2);
    assert_eq!(summary.status(), 0);
}

#[test]
fn scenarios() {
    use narrow_cast::IntKind::*;
    use narrow_cast::Value::*;

    let cases = [
        Case::new("i8_127", I8, Signed(127), Outcome::Ok),
        Case::new("i8_128", I8, Signed(128), Outcome::Overflow),
        Case::new("i8_m128", I8, Signed(-128), Outcome::Ok),
        Case::new("i8_m129", I8, Signed(-129), Outcome::Overflow),
        Case::new("u8_255", U8, Unsigned(255), Outcome::Ok),
        Case::new("u8_256", U8, Unsigned(256), Outcome::Overflow),
        Case::new("u8_m1", U8, Signed(-1), Outcome::Overflow),
        Case::new("u64_max", U64, Unsigned(u64::MAX), Outcome::Ok),
        Case::new("i64_min", I64, Signed(i64::MIN), Outcome::Ok),
        Case::new("i64_2p63", I64, Unsigned(1 << 63), Outcome::Overflow),
    ];
    for case in &cases {
        assert_eq!(check(case.kind, case.value), case.expected, "{}", case.name);
    }
    let mut failures: Vec<Failure> = vec![];
    assert_eq!(run(&cases, ALL, &mut failures).status(), 0);
}

#[test]
fn value_representations() {
    for case in CASES {
        if let Value::Wide(v) = case.value {
            assert!(v < i128::from(i64::MIN) || v > i128::from(u64::MAX), "{}", case.name);
        }
    }
}
