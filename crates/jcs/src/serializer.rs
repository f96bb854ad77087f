//! C5: canonical serializer (spec §4.5, "Canonical serialization").
//!
//! Emits a [`Value`] as the unique canonical byte string: no insignificant
//! whitespace, object members sorted by UTF-16 code-unit order of their
//! decoded key, the minimal escape set, and numbers via [`format_number`].

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{CanonError, ErrorClass};
use crate::format::format_number;
use crate::value::{Object, Value};

pub(crate) fn serialize(value: &Value, out: &mut Vec<u8>) -> Result<(), CanonError> {
    match value {
        Value::Null => out.extend_from_slice(b"null"),
        Value::Bool(true) => out.extend_from_slice(b"true"),
        Value::Bool(false) => out.extend_from_slice(b"false"),
        Value::Number(x) => {
            debug_assert!(x.is_finite(), "Value::Number is always finite (spec §3 invariant)");
            let s = format_number(*x).map_err(|_| CanonError::new(ErrorClass::InternalError, 0))?;
            out.extend_from_slice(s.as_bytes());
        }
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => {
            out.push(b'[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serialize(element, out)?;
            }
            out.push(b']');
        }
        Value::Object(members) => write_object(out, members)?,
    }
    Ok(())
}

fn write_object(out: &mut Vec<u8>, members: &Object) -> Result<(), CanonError> {
    let mut sorted: Vec<&(String, Value)> = members.iter().collect();
    sorted.sort_by(|a, b| compare_utf16(&a.0, &b.0));

    out.push(b'{');
    for (i, (key, value)) in sorted.into_iter().enumerate() {
        if i > 0 {
            out.push(b',');
        }
        write_string(out, key);
        out.push(b':');
        serialize(value, out)?;
    }
    out.push(b'}');
    Ok(())
}

/// Orders keys by UTF-16 code-unit sequence, per RFC 8785 §3.2.3 (spec §4.5
/// "sort keys"). Decoded `String`s hold Unicode scalar values one-to-one
/// with UTF-8, but JCS key order is defined over UTF-16 code units, so
/// comparing the `String`s directly (UTF-8 byte order, which happens to
/// agree with scalar-value order) would diverge from spec for any pair of
/// keys straddling a surrogate-pair boundary.
fn compare_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

fn write_string(out: &mut Vec<u8>, s: &str) {
    out.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\u{8}' => out.extend_from_slice(b"\\b"),
            '\u{9}' => out.extend_from_slice(b"\\t"),
            '\u{A}' => out.extend_from_slice(b"\\n"),
            '\u{C}' => out.extend_from_slice(b"\\f"),
            '\u{D}' => out.extend_from_slice(b"\\r"),
            c if (c as u32) < 0x20 => write_short_u_escape(out, c as u32),
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}

/// Writes `\u00XX` for a control byte outside the shorthand set. Every
/// remaining C0 control fits in two hex digits, so this never needs the
/// full four-digit `\uXXXX` form.
fn write_short_u_escape(out: &mut Vec<u8>, scalar: u32) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.extend_from_slice(b"\\u00");
    out.push(HEX[((scalar >> 4) & 0xF) as usize]);
    out.push(HEX[(scalar & 0xF) as usize]);
}
