//! The [`Value`] data model (spec §3).

use alloc::string::String;
use alloc::vec::Vec;

/// An ordered sequence of `(key, value)` pairs as parsed, before any
/// canonical reordering.
///
/// Deliberately not a hash map or a `BTreeMap`: spec §3 requires parse-time
/// insertion order to be retained (for diagnostics) and spec §9 explicitly
/// forbids a hash-based store as the primary representation, since its
/// iteration order must never leak into output. Canonical emission sorts a
/// copy of this sequence by UTF-16 code-unit order of the decoded keys; it
/// does not mutate the parsed tree.
pub type Object = Vec<(String, Value)>;

/// An ordered sequence of values, emitted in the same order on canonical
/// output (spec §4.5: "Array elements are emitted in input order").
pub type Array = Vec<Value>;

/// A parsed JSON value restricted to the I-JSON domain (spec §3).
///
/// A `Value` is only ever constructed by [`crate::parse`] from already
/// validated input; every invariant spec §3 lists (finite numbers, no
/// `-0`, strings free of surrogates and noncharacters, bounded aggregate
/// sizes) holds for every `Value` a caller can observe. There is no public
/// constructor that bypasses validation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// The JSON literal `null`.
    Null,
    /// The JSON literals `true`/`false`.
    Bool(bool),
    /// A finite IEEE-754 binary64. Never `-0`, and never `0` unless the
    /// source lexeme was itself `0`.
    Number(f64),
    /// A sequence of Unicode scalar values, free of surrogates and
    /// noncharacters.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// An ordered sequence of unique `(key, value)` pairs.
    Object(Object),
}
