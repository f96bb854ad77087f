//! C1: UTF-8 validator (spec §4.1).
//!
//! A deterministic finite-state classifier over the raw byte stream. It is
//! run before any `Value` is built, over the *entire* input (including bytes
//! that end up inside string literals), so a malformed sequence hiding
//! inside a quoted string is rejected just as surely as one in whitespace.

use crate::error::{CanonError, ErrorClass};

/// Confirms that `input` is well-formed UTF-8 per RFC 3629, rejecting
/// continuation bytes without a lead byte, truncated multi-byte sequences,
/// overlong encodings, the bytes `0xFE`/`0xFF`, and any encoding of a
/// surrogate code point `U+D800..=U+DFFF`.
///
/// On success returns the offset one past the last validated byte (i.e.
/// `input.len()`); on failure returns the byte offset of the first
/// violating byte.
pub fn validate(input: &[u8]) -> Result<(), CanonError> {
    let mut i = 0;
    let len = input.len();
    while i < len {
        let b0 = input[i];
        let seq_len = match b0 {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            // 0xC0, 0xC1: always overlong. 0xF5..=0xFF (includes 0xFE/0xFF):
            // never a valid lead byte. 0x80..=0xBF: a continuation byte with
            // no lead byte.
            _ => return Err(err(i)),
        };
        if i + seq_len > len {
            return Err(err(i));
        }
        match seq_len {
            1 => {}
            2 => {
                let b1 = input[i + 1];
                if !is_cont(b1) {
                    return Err(err(i));
                }
            }
            3 => {
                let b1 = input[i + 1];
                let b2 = input[i + 2];
                let lo = match b0 {
                    0xE0 => 0xA0,
                    0xED => 0x80,
                    _ => 0x80,
                };
                let hi = match b0 {
                    0xED => 0x9F,
                    _ => 0xBF,
                };
                if !(lo..=hi).contains(&b1) || !is_cont(b2) {
                    return Err(err(i));
                }
            }
            4 => {
                let b1 = input[i + 1];
                let b2 = input[i + 2];
                let b3 = input[i + 3];
                let lo = if b0 == 0xF0 { 0x90 } else { 0x80 };
                let hi = if b0 == 0xF4 { 0x8F } else { 0xBF };
                if !(lo..=hi).contains(&b1) || !is_cont(b2) || !is_cont(b3) {
                    return Err(err(i));
                }
            }
            _ => unreachable!("seq_len is always 1..=4"),
        }
        i += seq_len;
    }
    Ok(())
}

fn is_cont(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

fn err(offset: usize) -> CanonError {
    CanonError::new(ErrorClass::InvalidUtf8, offset)
}
