//! A strict, fail-closed implementation of the JSON Canonicalization Scheme
//! (JCS, RFC 8785) over the I-JSON profile (RFC 7493).
//!
//! This crate never repairs malformed input. Any byte sequence that is not
//! both valid JSON grammar and within the I-JSON domain (no duplicate member
//! names, no lone surrogates, no noncharacters, no `-0`, no non-finite
//! numbers, no silent underflow-to-zero) is rejected with a specific error
//! class and byte offset rather than being coerced into something that
//! parses. The canonical bytes this crate produces are meant to be hashed or
//! signed, so silently accepting an out-of-domain input would be a
//! correctness bug, not a convenience.
//!
//! ```
//! use jcs::{canonicalize, CanonicalizeOptions};
//!
//! let out = canonicalize(br#"  { "z": 3, "a": 1.0 }  "#, CanonicalizeOptions::default()).unwrap();
//! assert_eq!(out, b"{\"a\":1,\"z\":3}");
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod envelope;
mod error;
mod format;
mod options;
mod parser;
mod serializer;
mod utf8;
mod value;
mod verify;

pub use envelope::Envelope;
pub use error::{CanonError, ErrorClass};
pub use format::format_number;
pub use options::CanonicalizeOptions;
pub use parser::parse;
pub use value::{Array, Object, Value};
pub use verify::{verify, VerifyOutcome};

use alloc::vec::Vec;

/// Parses `input` and re-emits it as canonical JCS bytes.
///
/// Fails closed: on any grammar, UTF-8, I-JSON, or bound violation the first
/// violation encountered along the pipeline is returned, together with its
/// byte offset. No partial output is ever returned.
pub fn canonicalize(input: &[u8], options: CanonicalizeOptions) -> Result<Vec<u8>, CanonError> {
    let (body, trailing_newline) = envelope::split(input, options.envelope)?;
    let value = parser::parse(body, &options)?;
    let mut out = Vec::new();
    serializer::serialize(&value, &mut out)?;
    if trailing_newline {
        out.push(b'\n');
    }
    Ok(out)
}
