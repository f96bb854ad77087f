//! C2: tokenizer and recursive-descent parser (spec §4.2).
//!
//! Produces a [`Value`] tree from raw input bytes, enforcing RFC 8259
//! grammar, the I-JSON restrictions C3 delegates to [`string`], and every
//! configured resource bound along the way. Nothing here attempts partial
//! recovery: the first violation encountered aborts the whole parse.

mod number;
mod string;

use alloc::vec::Vec;

use crate::error::{CanonError, ErrorClass};
use crate::options::CanonicalizeOptions;
use crate::utf8;
use crate::value::{Object, Value};

/// Parses `input` into a [`Value`], enforcing the I-JSON domain and every
/// bound in `options`.
///
/// `input` must be the canonical *body* (envelope already stripped by
/// [`crate::envelope::split`]).
pub fn parse(input: &[u8], options: &CanonicalizeOptions) -> Result<Value, CanonError> {
    if input.len() > options.max_input_bytes {
        return Err(bound(0));
    }

    utf8::validate(input)?;
    // SAFETY: `utf8::validate` just confirmed `input` is well-formed UTF-8.
    let body = unsafe { core::str::from_utf8_unchecked(input) };

    let mut parser = Parser {
        body,
        options,
        value_count: 0,
    };

    let start = skip_ws(body.as_bytes(), 0);
    let (value, end) = parser.parse_value(start, 0)?;
    let end = skip_ws(body.as_bytes(), end);
    if end != body.len() {
        return Err(grammar(end));
    }
    Ok(value)
}

struct Parser<'a> {
    body: &'a str,
    options: &'a CanonicalizeOptions,
    value_count: usize,
}

impl<'a> Parser<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.body.as_bytes()
    }

    fn count_value(&mut self, at: usize) -> Result<(), CanonError> {
        self.value_count += 1;
        if self.value_count > self.options.max_value_count {
            return Err(bound(at));
        }
        Ok(())
    }

    /// Parses one value starting at `pos`, which must point at its first
    /// non-whitespace byte. Returns the value and the offset one past it.
    fn parse_value(&mut self, pos: usize, depth: usize) -> Result<(Value, usize), CanonError> {
        if depth > self.options.max_depth {
            return Err(bound(pos));
        }
        self.count_value(pos)?;

        match self.bytes().get(pos) {
            Some(b'{') => self.parse_object(pos, depth),
            Some(b'[') => self.parse_array(pos, depth),
            Some(b'"') => {
                let (s, end) = string::parse(self.body, pos, self.options.max_string_bytes)?;
                Ok((Value::String(s), end))
            }
            Some(b't') => self.parse_literal(pos, "true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(pos, "false", Value::Bool(false)),
            Some(b'n') => self.parse_literal(pos, "null", Value::Null),
            Some(b'-' | b'0'..=b'9') => self.parse_number(pos),
            _ => Err(grammar(pos)),
        }
    }

    fn parse_literal(
        &self,
        pos: usize,
        lit: &'static str,
        value: Value,
    ) -> Result<(Value, usize), CanonError> {
        let end = pos + lit.len();
        if self.body.as_bytes().get(pos..end) == Some(lit.as_bytes()) {
            Ok((value, end))
        } else {
            Err(grammar(pos))
        }
    }

    fn parse_number(&self, pos: usize) -> Result<(Value, usize), CanonError> {
        let end = number::lex(self.bytes(), pos)?;
        if end - pos > self.options.max_number_token {
            return Err(bound(pos));
        }
        let value = number::convert(&self.body[pos..end], pos)?;
        Ok((Value::Number(value), end))
    }

    fn parse_object(&mut self, pos: usize, depth: usize) -> Result<(Value, usize), CanonError> {
        debug_assert_eq!(self.bytes()[pos], b'{');
        let mut members: Object = Vec::new();
        let mut cursor = skip_ws(self.bytes(), pos + 1);

        if self.bytes().get(cursor) == Some(&b'}') {
            return Ok((Value::Object(members), cursor + 1));
        }

        loop {
            let key_start = cursor;
            if self.bytes().get(cursor) != Some(&b'"') {
                return Err(grammar(cursor));
            }
            let (key, after_key) = string::parse(self.body, cursor, self.options.max_string_bytes)?;

            cursor = skip_ws(self.bytes(), after_key);
            if self.bytes().get(cursor) != Some(&b':') {
                return Err(grammar(cursor));
            }
            cursor = skip_ws(self.bytes(), cursor + 1);

            let (value, after_value) = self.parse_value(cursor, depth + 1)?;

            if members.iter().any(|(k, _)| k == &key) {
                return Err(CanonError::new(ErrorClass::DuplicateKey, key_start));
            }
            members.push((key, value));
            if members.len() > self.options.max_object_members {
                return Err(bound(after_value));
            }

            cursor = skip_ws(self.bytes(), after_value);
            match self.bytes().get(cursor) {
                Some(b',') => {
                    cursor = skip_ws(self.bytes(), cursor + 1);
                }
                Some(b'}') => return Ok((Value::Object(members), cursor + 1)),
                _ => return Err(grammar(cursor)),
            }
        }
    }

    fn parse_array(&mut self, pos: usize, depth: usize) -> Result<(Value, usize), CanonError> {
        debug_assert_eq!(self.bytes()[pos], b'[');
        let mut elements = Vec::new();
        let mut cursor = skip_ws(self.bytes(), pos + 1);

        if self.bytes().get(cursor) == Some(&b']') {
            return Ok((Value::Array(elements), cursor + 1));
        }

        loop {
            let (value, after_value) = self.parse_value(cursor, depth + 1)?;
            elements.push(value);
            if elements.len() > self.options.max_array_elements {
                return Err(bound(after_value));
            }

            cursor = skip_ws(self.bytes(), after_value);
            match self.bytes().get(cursor) {
                Some(b',') => {
                    cursor = skip_ws(self.bytes(), cursor + 1);
                }
                Some(b']') => return Ok((Value::Array(elements), cursor + 1)),
                _ => return Err(grammar(cursor)),
            }
        }
    }
}

/// Skips RFC 8259 insignificant whitespace (space, tab, LF, CR) starting at
/// `pos`, returning the offset of the next non-whitespace byte (or
/// `bytes.len()` if none remains).
fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while matches!(bytes.get(pos), Some(b' ' | b'\t' | b'\n' | b'\r')) {
        pos += 1;
    }
    pos
}

fn grammar(offset: usize) -> CanonError {
    CanonError::new(ErrorClass::InvalidGrammar, offset)
}

fn bound(offset: usize) -> CanonError {
    CanonError::new(ErrorClass::BoundExceeded, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(input: &[u8]) -> Result<Value, CanonError> {
        parse(input, &CanonicalizeOptions::default())
    }

    #[test]
    fn parses_scalars() {
        assert_eq!(parse_default(b"null").unwrap(), Value::Null);
        assert_eq!(parse_default(b"true").unwrap(), Value::Bool(true));
        assert_eq!(parse_default(b"false").unwrap(), Value::Bool(false));
        assert_eq!(parse_default(b"1.5").unwrap(), Value::Number(1.5));
    }

    #[test]
    fn parses_nested_object_and_array() {
        let value = parse_default(br#"{"a":[1,2,{"b":true}],"c":null}"#).unwrap();
        let Value::Object(members) = value else {
            panic!("expected object");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].0, "a");
    }

    #[test]
    fn skips_surrounding_whitespace() {
        assert_eq!(parse_default(b"  \t\n 42 \n").unwrap(), Value::Number(42.0));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse_default(b"1 2").is_err());
    }

    #[test]
    fn rejects_trailing_comma_in_array() {
        assert!(parse_default(b"[1,2,]").is_err());
    }

    #[test]
    fn rejects_trailing_comma_in_object() {
        assert!(parse_default(br#"{"a":1,}"#).is_err());
    }

    #[test]
    fn rejects_duplicate_object_key() {
        let err = parse_default(br#"{"a":1,"a":2}"#).unwrap_err();
        assert_eq!(err.class, ErrorClass::DuplicateKey);
        // Offset of the second key's opening quote, not its value.
        assert_eq!(err.offset, 7);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(parse_default(b"").is_err());
    }

    #[test]
    fn rejects_unterminated_object() {
        assert!(parse_default(br#"{"a":1"#).is_err());
    }

    #[test]
    fn enforces_max_depth() {
        let options = CanonicalizeOptions {
            max_depth: 2,
            ..Default::default()
        };
        let err = parse(b"[[[1]]]", &options).unwrap_err();
        assert_eq!(err.class, ErrorClass::BoundExceeded);
    }

    #[test]
    fn enforces_max_array_elements() {
        let options = CanonicalizeOptions {
            max_array_elements: 2,
            ..Default::default()
        };
        let err = parse(b"[1,2,3]", &options).unwrap_err();
        assert_eq!(err.class, ErrorClass::BoundExceeded);
    }

    #[test]
    fn empty_object_and_array() {
        assert_eq!(parse_default(b"{}").unwrap(), Value::Object(Vec::new()));
        assert_eq!(parse_default(b"[]").unwrap(), Value::Array(Vec::new()));
    }
}
