//! C3: string decoder and I-JSON gate (spec §4.3).

use alloc::string::String;

use crate::error::{CanonError, ErrorClass};

/// Returns `true` for the 66 noncharacters spec §4.3/GLOSSARY forbid:
/// `U+FDD0..=U+FDEF`, and `U+xFFFE`/`U+xFFFF` for every plane `0..=16`.
fn is_noncharacter(scalar: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&scalar) || (scalar & 0xFFFE) == 0xFFFE
}

/// Decodes the string literal beginning at `bytes[start]` (which must be a
/// `"` byte) out of the already UTF-8-validated `body`.
///
/// Returns the decoded scalar sequence and the offset one past the closing
/// `"`. Rejects unescaped control bytes, unknown escapes, unpaired
/// surrogates (escaped or raw), and noncharacter scalars (escaped or raw).
pub(crate) fn parse(
    body: &str,
    start: usize,
    max_string_bytes: usize,
) -> Result<(String, usize), CanonError> {
    debug_assert_eq!(body.as_bytes()[start], b'"');
    let bytes = body.as_bytes();
    let mut pos = start + 1;
    let mut out = String::new();

    loop {
        let Some(&b) = bytes.get(pos) else {
            return Err(grammar(pos));
        };

        match b {
            b'"' => return Ok((out, pos + 1)),
            b'\\' => {
                let (scalar, next) = decode_escape(bytes, pos)?;
                push_scalar(&mut out, scalar, pos)?;
                check_bound(&out, max_string_bytes, pos)?;
                pos = next;
            }
            0x00..=0x1F => return Err(grammar(pos)),
            0x00..=0x7F => {
                out.push(b as char);
                check_bound(&out, max_string_bytes, pos)?;
                pos += 1;
            }
            _ => {
                // Multi-byte scalar; `body` is already confirmed well-formed
                // UTF-8 (and free of surrogate encodings) by the validator
                // that ran before parsing started, so this index should
                // always be a char boundary.
                debug_assert!(body.is_char_boundary(pos));
                let Some(ch) = body[pos..].chars().next() else {
                    return Err(CanonError::new(ErrorClass::InternalError, pos));
                };
                if is_noncharacter(ch as u32) {
                    return Err(CanonError::new(ErrorClass::Noncharacter, pos));
                }
                out.push(ch);
                check_bound(&out, max_string_bytes, pos)?;
                pos += ch.len_utf8();
            }
        }
    }
}

fn check_bound(out: &String, max_string_bytes: usize, pos: usize) -> Result<(), CanonError> {
    if out.len() > max_string_bytes {
        Err(CanonError::new(ErrorClass::BoundExceeded, pos))
    } else {
        Ok(())
    }
}

fn push_scalar(out: &mut String, scalar: u32, pos: usize) -> Result<(), CanonError> {
    if is_noncharacter(scalar) {
        return Err(CanonError::new(ErrorClass::Noncharacter, pos));
    }
    let ch = char::from_u32(scalar).ok_or_else(|| CanonError::new(ErrorClass::InternalError, pos))?;
    out.push(ch);
    Ok(())
}

/// Decodes one escape sequence starting at `bytes[pos]` (the `\` byte).
/// Returns the decoded scalar and the offset one past the escape.
fn decode_escape(bytes: &[u8], pos: usize) -> Result<(u32, usize), CanonError> {
    let esc = *bytes.get(pos + 1).ok_or_else(|| grammar(pos + 1))?;
    match esc {
        b'"' => Ok(('"' as u32, pos + 2)),
        b'\\' => Ok(('\\' as u32, pos + 2)),
        b'/' => Ok(('/' as u32, pos + 2)),
        b'b' => Ok((0x08, pos + 2)),
        b'f' => Ok((0x0C, pos + 2)),
        b'n' => Ok((0x0A, pos + 2)),
        b'r' => Ok((0x0D, pos + 2)),
        b't' => Ok((0x09, pos + 2)),
        b'u' => decode_unicode_escape(bytes, pos),
        _ => Err(grammar(pos + 1)),
    }
}

/// Decodes `\uXXXX`, pairing with a following `\uYYYY` low surrogate when
/// `XXXX` is a high surrogate. `pos` points at the `\` of the first escape.
fn decode_unicode_escape(bytes: &[u8], pos: usize) -> Result<(u32, usize), CanonError> {
    let (hi, after_hi) = parse_hex4(bytes, pos + 2)?;

    if (0xDC00..=0xDFFF).contains(&hi) {
        // A lone low surrogate with nothing preceding it.
        return Err(CanonError::new(ErrorClass::LoneSurrogate, pos));
    }

    if (0xD800..=0xDBFF).contains(&hi) {
        if bytes.get(after_hi) != Some(&b'\\') || bytes.get(after_hi + 1) != Some(&b'u') {
            return Err(CanonError::new(ErrorClass::LoneSurrogate, pos));
        }
        let (lo, after_lo) = parse_hex4(bytes, after_hi + 2)?;
        if !(0xDC00..=0xDFFF).contains(&lo) {
            return Err(CanonError::new(ErrorClass::LoneSurrogate, pos));
        }
        let scalar = 0x10000 + ((hi - 0xD800) << 10) + (lo - 0xDC00);
        return Ok((scalar, after_lo));
    }

    Ok((hi, after_hi))
}

/// Parses the 4 hex digits of a `\uXXXX` escape, where `pos` is the offset
/// of the first hex digit (just after `\u`). Upper and lower case are both
/// accepted, per spec §4.2.
fn parse_hex4(bytes: &[u8], pos: usize) -> Result<(u32, usize), CanonError> {
    let digits = bytes.get(pos..pos + 4).ok_or_else(|| grammar(pos))?;
    let mut value: u32 = 0;
    for &b in digits {
        let nibble = match b {
            b'0'..=b'9' => u32::from(b - b'0'),
            b'a'..=b'f' => u32::from(b - b'a' + 10),
            b'A'..=b'F' => u32::from(b - b'A' + 10),
            _ => return Err(grammar(pos)),
        };
        value = (value << 4) | nibble;
    }
    Ok((value, pos + 4))
}

fn grammar(pos: usize) -> CanonError {
    CanonError::new(ErrorClass::InvalidGrammar, pos)
}
