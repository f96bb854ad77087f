//! The closed failure taxonomy (spec §7) and the error type that carries it.

use core::fmt;

use thiserror::Error;

/// One of the fixed failure classes a canonicalize/verify call can return.
///
/// This enum is intentionally closed: adding a new variant is a breaking
/// change, because callers are expected to match on it exhaustively (e.g. to
/// map it to a process exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorClass {
    /// C1: malformed, overlong, or otherwise ill-formed UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// C2: any RFC 8259 grammar violation.
    #[error("invalid JSON grammar")]
    InvalidGrammar,
    /// C3: an unpaired UTF-16 surrogate, escaped or raw.
    #[error("lone surrogate")]
    LoneSurrogate,
    /// C3: a scalar in the 66-codepoint noncharacter set.
    #[error("noncharacter")]
    Noncharacter,
    /// C3: a second occurrence of a decoded key within one object.
    #[error("duplicate object member name")]
    DuplicateKey,
    /// C2: a number lexeme converts to an infinity.
    #[error("number overflows to infinity")]
    NumberOverflow,
    /// C2: the lexeme is exactly `-0`.
    #[error("negative zero is not permitted")]
    NumberNegZero,
    /// C2: a non-zero lexeme converts to `0`.
    #[error("number underflows to zero")]
    NumberUnderflow,
    /// C2: a configured bound was exceeded.
    #[error("a configured bound was exceeded")]
    BoundExceeded,
    /// C5: verify-only mismatch between input and its canonical form.
    #[error("input is not canonical")]
    NotCanonical,
    /// A core invariant failed. Should never occur on any input; if it does,
    /// it indicates a bug in this crate rather than in the caller's data.
    #[error("internal error")]
    InternalError,
}

/// A failure produced anywhere in the canonicalize/verify pipeline: a fixed
/// [`ErrorClass`] plus the byte offset into the original input where the
/// violation was detected, when detectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonError {
    /// Which of the closed failure classes this is.
    pub class: ErrorClass,
    /// Byte offset into the original input at which the failure was
    /// observed. `0` when no more specific offset applies (e.g. an empty
    /// envelope).
    pub offset: usize,
}

impl CanonError {
    pub(crate) fn new(class: ErrorClass, offset: usize) -> Self {
        Self { class, offset }
    }
}

impl fmt::Display for CanonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.class, self.offset)
    }
}

impl core::error::Error for CanonError {}
