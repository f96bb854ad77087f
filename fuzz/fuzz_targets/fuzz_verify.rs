#![no_main]

use jcs::{canonicalize, verify, CanonicalizeOptions};
use libfuzzer_sys::fuzz_target;

// verify(x) succeeds iff x == canonicalize(x) (spec invariant 3), checked
// directly against arbitrary, likely-non-canonical input.
fuzz_target!(|data: &[u8]| {
    let options = CanonicalizeOptions::default();
    let canonical = canonicalize(data, options);
    let verified = verify(data, options);

    match canonical {
        Ok(c) => assert_eq!(verified.is_ok(), c == data),
        Err(_) => assert!(verified.is_err()),
    }
});
