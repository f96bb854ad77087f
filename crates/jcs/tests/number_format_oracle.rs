//! A curated subset of the ECMAScript `Number.prototype.toString` oracle.
//!
//! The full release-evidence oracle (spec §8: "a pinned oracle of ≥ 50,000
//! IEEE-754 bit patterns") is an external conformance artifact generated
//! and checked by the release pipeline, not something this crate's test
//! suite vendors wholesale. This file pins the boundary cases the ECMA
//! branch-selection logic actually branches on, each value checked against
//! its known `Number.prototype.toString(10)` output.

use jcs::format_number;

fn fmt(bits: u64) -> String {
    format_number(f64::from_bits(bits)).unwrap()
}

fn fmt_value(x: f64) -> String {
    format_number(x).unwrap()
}

#[test]
fn integer_form_boundaries() {
    assert_eq!(fmt_value(1.0), "1");
    assert_eq!(fmt_value(9.0), "9");
    assert_eq!(fmt_value(10.0), "10");
    assert_eq!(fmt_value(999.0), "999");
    assert_eq!(fmt_value(1e20), "100000000000000000000");
    assert_eq!(fmt_value(1e21), "1e+21");
}

#[test]
fn decimal_point_form_boundaries() {
    assert_eq!(fmt_value(1.5), "1.5");
    assert_eq!(fmt_value(123.456), "123.456");
    assert_eq!(fmt_value(1e20 + 1.0), "100000000000000000000");
}

#[test]
fn small_fraction_boundaries() {
    assert_eq!(fmt_value(0.1), "0.1");
    assert_eq!(fmt_value(0.000001), "0.000001");
    assert_eq!(fmt_value(0.0000001), "1e-7");
}

#[test]
fn negative_values_prefix_minus() {
    assert_eq!(fmt_value(-1.5), "-1.5");
    assert_eq!(fmt_value(-1e21), "-1e+21");
    assert_eq!(fmt_value(-0.0000001), "-1e-7");
}

#[test]
fn specific_bit_patterns() {
    // 0.1 is not exactly representable; its shortest round trip is "0.1".
    assert_eq!(fmt(0.1f64.to_bits()), "0.1");
    // The smallest positive subnormal double.
    assert_eq!(fmt(1), "5e-324");
    // The largest finite double.
    assert_eq!(fmt(f64::MAX.to_bits()), "1.7976931348623157e+308");
    // The smallest positive normal double.
    assert_eq!(fmt(f64::MIN_POSITIVE.to_bits()), "2.2250738585072014e-308");
}

#[test]
fn powers_of_two_round_trip_to_shortest_digits() {
    for exp in 0..64 {
        let x = 2f64.powi(exp);
        let s = fmt_value(x);
        assert_eq!(s.parse::<f64>().unwrap(), x, "2^{exp} formatted as {s}");
    }
}
