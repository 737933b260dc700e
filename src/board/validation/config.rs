//! Configuration for message validation rules.

/// Maximum message text length, in characters, used by the default config.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 250;

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use message_board::board::validation::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_text_length, 250);
///
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.max_text_length, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum text length in characters (inclusive).
    pub max_text_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration with a custom text length limit.
    #[must_use]
    pub const fn with_max_text_length(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    /// Creates a strict configuration with a 200 character limit.
    #[must_use]
    pub const fn strict() -> Self {
        Self::with_max_text_length(200)
    }
}
