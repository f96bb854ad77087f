#![no_main]

use jcs::format_number;
use libfuzzer_sys::fuzz_target;

// Every finite f64 formats to a string that parses back to the exact same
// bit pattern (spec invariant 4: correctly-rounded shortest round trip).
fuzz_target!(|bits: u64| {
    let x = f64::from_bits(bits);
    if !x.is_finite() {
        return;
    }

    let s = format_number(x).expect("format_number must accept any finite f64");
    let parsed: f64 = s.parse().expect("formatter produced output that does not parse");
    assert!(
        parsed.to_bits() == x.to_bits() || (parsed == 0.0 && x == 0.0),
        "{x} formatted as {s} which parses back to {parsed}"
    );
});
