#![no_main]

use jcs::{canonicalize, verify, CanonicalizeOptions};
use libfuzzer_sys::fuzz_target;

// Whatever canonicalize accepts must already be in canonical form, and
// running it through canonicalize (or verify) a second time must be a
// no-op. This is spec invariants 2 and 3 (idempotence, verify agreement).
fuzz_target!(|data: &[u8]| {
    let options = CanonicalizeOptions::default();
    let Ok(once) = canonicalize(data, options) else {
        return;
    };

    let twice = canonicalize(&once, options).expect("canonical output must re-canonicalize");
    assert_eq!(once, twice, "canonicalize is not idempotent");

    let outcome = verify(&once, options).expect("canonical output must verify");
    assert_eq!(outcome.canonical, once);
});
