//! Configuration for [`crate::canonicalize`] and [`crate::verify`] (spec §6).

use crate::envelope::Envelope;

/// Configuration options for [`crate::canonicalize`] and [`crate::verify`].
///
/// All fields are optional in the sense that [`Default`] provides the
/// fail-closed defaults from spec §6. The numeric bound defaults here are a
/// concrete host policy choice (spec's Open Questions note that the core
/// only promises "enforced with a distinct failure class", not specific
/// numbers); callers needing different limits should construct this
/// directly rather than relying on `Default`.
///
/// # Examples
///
/// ```
/// use jcs::CanonicalizeOptions;
///
/// let options = CanonicalizeOptions {
///     max_depth: 64,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalizeOptions {
    /// Hard cap on input length, in bytes.
    ///
    /// # Default
    ///
    /// 64 MiB (`64 * 1024 * 1024`).
    pub max_input_bytes: usize,

    /// Maximum nested-container depth (objects and arrays combined).
    ///
    /// # Default
    ///
    /// `1000`.
    pub max_depth: usize,

    /// Maximum number of members per object.
    ///
    /// # Default
    ///
    /// `1_000_000`.
    pub max_object_members: usize,

    /// Maximum number of elements per array.
    ///
    /// # Default
    ///
    /// `1_000_000`.
    pub max_array_elements: usize,

    /// Maximum decoded string length, in bytes of its UTF-8 encoding.
    ///
    /// # Default
    ///
    /// `16 * 1024 * 1024` (16 MiB).
    pub max_string_bytes: usize,

    /// Maximum number of characters in a single number token's lexeme.
    ///
    /// # Default
    ///
    /// `64`.
    pub max_number_token: usize,

    /// Maximum total number of values (scalars plus containers) in the
    /// input.
    ///
    /// # Default
    ///
    /// `4_000_000`.
    pub max_value_count: usize,

    /// The envelope variant to require/produce.
    ///
    /// # Default
    ///
    /// [`Envelope::None`].
    pub envelope: Envelope,
}

impl Default for CanonicalizeOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: 64 * 1024 * 1024,
            max_depth: 1000,
            max_object_members: 1_000_000,
            max_array_elements: 1_000_000,
            max_string_bytes: 16 * 1024 * 1024,
            max_number_token: 64,
            max_value_count: 4_000_000,
            envelope: Envelope::None,
        }
    }
}
