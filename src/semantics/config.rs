/// The maximal number of arguments a framework may have for its subsets to be enumerated.
///
/// Subsets are encoded as 64-bit masks.
pub const MAX_ENUMERABLE_ARGUMENTS: usize = 63;

/// The default value of [`EngineConfig::max_arguments`].
pub const DEFAULT_MAX_ARGUMENTS: usize = 16;

/// The configuration of a [`SemanticsEngine`](crate::semantics::SemanticsEngine).
///
/// # Example
///
/// ```
/// # use crustext::semantics::EngineConfig;
/// let config = EngineConfig::default().with_max_arguments(12).with_narration(true);
/// assert_eq!(12, config.max_arguments());
/// assert!(config.narrate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_arguments: usize,
    narrate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_arguments: DEFAULT_MAX_ARGUMENTS,
            narrate: false,
        }
    }
}

impl EngineConfig {
    /// Sets the maximal number of arguments a framework may have.
    ///
    /// Enumerating the subsets of a framework takes a time exponential in its number of arguments.
    /// Requests on larger frameworks are rejected before the enumeration starts.
    /// The value is capped to [`MAX_ENUMERABLE_ARGUMENTS`].
    pub fn with_max_arguments(mut self, max_arguments: usize) -> Self {
        self.max_arguments = max_arguments.min(MAX_ENUMERABLE_ARGUMENTS);
        self
    }

    /// Sets whether narration events must be produced.
    pub fn with_narration(mut self, narrate: bool) -> Self {
        self.narrate = narrate;
        self
    }

    /// Returns the maximal number of arguments a framework may have.
    pub fn max_arguments(&self) -> usize {
        self.max_arguments
    }

    /// Returns `true` iff narration events must be produced.
    pub fn narrate(&self) -> bool {
        self.narrate
    }
}
