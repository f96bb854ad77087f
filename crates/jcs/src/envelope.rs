//! The optional trailing-LF envelope variant (spec §9 "Envelope variant").

use crate::error::{CanonError, ErrorClass};

/// Whether [`crate::canonicalize`]/[`crate::verify`] operate on a bare
/// canonical body or one wrapped in the trailing-newline envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Envelope {
    /// No envelope: the input is the canonical body itself.
    #[default]
    None,
    /// Exactly one trailing `0x0A` wraps the canonical body. No other
    /// `0x0A` and no `0x0D` byte may appear anywhere in the input.
    TrailingLf,
}

/// Strips the envelope (if any) from `input`, returning the body and
/// whether the envelope's trailing newline must be re-appended on output.
///
/// Envelope failures are checked before the body is handed to the parser,
/// so a malformed envelope is always reported instead of whatever grammar
/// or UTF-8 error happens to lie inside it.
pub(crate) fn split(input: &[u8], envelope: Envelope) -> Result<(&[u8], bool), CanonError> {
    if input.is_empty() {
        return Err(grammar(0));
    }

    match envelope {
        Envelope::None => Ok((input, false)),
        Envelope::TrailingLf => {
            if let Some(offset) = input.iter().position(|&b| b == 0x0D) {
                return Err(grammar(offset));
            }
            if input[input.len() - 1] != b'\n' {
                return Err(grammar(input.len() - 1));
            }
            let body = &input[..input.len() - 1];
            if body.is_empty() {
                return Err(grammar(0));
            }
            if let Some(offset) = body.iter().position(|&b| b == b'\n') {
                return Err(grammar(offset));
            }
            Ok((body, true))
        }
    }
}

fn grammar(offset: usize) -> CanonError {
    CanonError::new(ErrorClass::InvalidGrammar, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_passes_input_through() {
        let (body, trailing) = split(b"{}", Envelope::None).unwrap();
        assert_eq!(body, b"{}");
        assert!(!trailing);
    }

    #[test]
    fn trailing_lf_strips_one_newline() {
        let (body, trailing) = split(b"{}\n", Envelope::TrailingLf).unwrap();
        assert_eq!(body, b"{}");
        assert!(trailing);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(split(b"", Envelope::None).is_err());
        assert!(split(b"", Envelope::TrailingLf).is_err());
    }

    #[test]
    fn rejects_missing_trailing_newline() {
        assert!(split(b"{}", Envelope::TrailingLf).is_err());
    }

    #[test]
    fn rejects_carriage_return_anywhere() {
        assert!(split(b"{}\r\n", Envelope::TrailingLf).is_err());
    }

    #[test]
    fn rejects_extra_newline_inside_body() {
        assert!(split(b"{}\n\n", Envelope::TrailingLf).is_err());
    }

    #[test]
    fn rejects_body_that_is_only_the_newline() {
        assert!(split(b"\n", Envelope::TrailingLf).is_err());
    }
}
