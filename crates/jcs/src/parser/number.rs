//! Number lexing and conversion (spec §4.2, "Numbers" and "Number
//! conversion").

use crate::error::{CanonError, ErrorClass};

/// Scans a `number` token starting at `bytes[start]` per the grammar
///
/// ```text
/// number = [ minus ] int [ frac ] [ exp ]
/// int    = "0" / ( digit1-9 *DIGIT )
/// frac   = "." 1*DIGIT
/// exp    = ( "e" / "E" ) [ "-" / "+" ] 1*DIGIT
/// ```
///
/// Returns the exclusive end offset of the lexeme (the byte offset one past
/// its last character).
pub(crate) fn lex(bytes: &[u8], start: usize) -> Result<usize, CanonError> {
    let mut pos = start;
    let err = |at: usize| CanonError::new(ErrorClass::InvalidGrammar, at);

    if bytes.get(pos) == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => {
            pos += 1;
            while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        _ => return Err(err(pos)),
    }

    if bytes.get(pos) == Some(&b'.') {
        let dot = pos;
        pos += 1;
        if !matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            return Err(err(dot + 1));
        }
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let e = pos;
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        if !matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            return Err(err(e + 1));
        }
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
    }

    Ok(pos)
}

/// Converts a lexeme already validated by [`lex`] to a binary64, applying
/// the negative-zero, overflow, and underflow checks from spec §4.2.
///
/// The "is this lexeme's significand zero" check looks only at the digits
/// of the integer and fractional parts (never the exponent digits), since
/// `0 * 10^n == 0` for any exponent: a lexeme like `"-0e400"` is just as
/// much a spelling of negative zero as `"-0"` is, and spec §3's invariant
/// ("the stored zero is always +0") has to hold for it too, not only for
/// the bare two-character spelling spec §8's S4 scenario happens to show.
pub(crate) fn convert(lexeme: &str, start: usize) -> Result<f64, CanonError> {
    let is_negative = lexeme.starts_with('-');
    let significand = lexeme
        .trim_start_matches('-')
        .split(['e', 'E'])
        .next()
        .unwrap_or("");
    let significand_is_zero = significand.bytes().all(|b| b == b'0' || b == b'.');

    if significand_is_zero {
        return if is_negative {
            Err(CanonError::new(ErrorClass::NumberNegZero, start))
        } else {
            Ok(0.0)
        };
    }

    let value: f64 = lexeme
        .parse()
        .map_err(|_| CanonError::new(ErrorClass::InternalError, start))?;

    if value.is_infinite() {
        Err(CanonError::new(ErrorClass::NumberOverflow, start))
    } else if value == 0.0 {
        Err(CanonError::new(ErrorClass::NumberUnderflow, start))
    } else {
        Ok(value)
    }
}
