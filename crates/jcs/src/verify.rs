//! C5 (verify path): confirms that an input is *already* canonical, rather
//! than producing canonical output from it (spec §4.5, "Verification").
//!
//! Runs the same pipeline as [`crate::canonicalize`] (envelope check,
//! parse, reserialize), then byte-compares the reserialized form against
//! the original body instead of returning it. Any failure along the way
//! (malformed envelope, invalid UTF-8, grammar violation, out-of-domain
//! value, exceeded bound) is reported with its own error class exactly as
//! in the canonicalize path; only a clean parse that reserializes to
//! different bytes produces [`ErrorClass::NotCanonical`].

use alloc::vec::Vec;

use crate::envelope;
use crate::error::{CanonError, ErrorClass};
use crate::options::CanonicalizeOptions;
use crate::parser;
use crate::serializer;

/// The recomputed canonical form of an input that [`verify`] confirmed was
/// already canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    /// The canonical bytes, envelope re-applied if one was configured.
    /// Byte-for-byte identical to the input that was verified.
    pub canonical: Vec<u8>,
}

/// Confirms that `input` is already in canonical form.
///
/// Returns `Ok` with the recomputed canonical bytes (always equal to
/// `input`) when it is; returns `Err(CanonError)` otherwise, with
/// [`ErrorClass::NotCanonical`] specifically meaning "this was valid,
/// in-domain JSON, just not canonically serialized" and every other class
/// meaning the input failed validation before reaching that comparison.
pub fn verify(input: &[u8], options: CanonicalizeOptions) -> Result<VerifyOutcome, CanonError> {
    // Stage 1: envelope.
    let (body, trailing_newline) = envelope::split(input, options.envelope)?;
    // Stage 2: parse (also runs the C1 UTF-8 gate and I-JSON checks).
    let value = parser::parse(body, &options)?;
    // Stage 3: reserialize and compare.
    let mut canonical = Vec::new();
    serializer::serialize(&value, &mut canonical)?;

    if canonical != body {
        let offset = canonical
            .iter()
            .zip(body.iter())
            .position(|(a, b)| a != b)
            .unwrap_or_else(|| canonical.len().min(body.len()));
        return Err(CanonError::new(ErrorClass::NotCanonical, offset));
    }

    if trailing_newline {
        canonical.push(b'\n');
    }
    Ok(VerifyOutcome { canonical })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Envelope;

    #[test]
    fn accepts_already_canonical_input() {
        let outcome = verify(br#"{"a":1,"z":2}"#, CanonicalizeOptions::default()).unwrap();
        assert_eq!(outcome.canonical, br#"{"a":1,"z":2}"#);
    }

    #[test]
    fn rejects_unsorted_keys_as_not_canonical() {
        let err = verify(br#"{"z":2,"a":1}"#, CanonicalizeOptions::default()).unwrap_err();
        assert_eq!(err.class, ErrorClass::NotCanonical);
    }

    #[test]
    fn rejects_insignificant_whitespace_as_not_canonical() {
        let err = verify(br#"{ "a": 1 }"#, CanonicalizeOptions::default()).unwrap_err();
        assert_eq!(err.class, ErrorClass::NotCanonical);
    }

    #[test]
    fn propagates_grammar_errors_unchanged() {
        let err = verify(b"{", CanonicalizeOptions::default()).unwrap_err();
        assert_eq!(err.class, ErrorClass::InvalidGrammar);
    }

    #[test]
    fn accepts_trailing_lf_envelope_around_canonical_body() {
        let options = CanonicalizeOptions {
            envelope: Envelope::TrailingLf,
            ..Default::default()
        };
        let outcome = verify(b"{\"a\":1}\n", options).unwrap();
        assert_eq!(outcome.canonical, b"{\"a\":1}\n");
    }
}
