use crate::system::SourceSystem;

/// Configuration errors raised while setting up a line filter.
///
/// These are never produced by noisy log content; they indicate a caller mistake
/// and abort the invocation.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// System token did not name a known source system
    #[error("Unknown source system '{0}' (expected one of: system-a, system-b)")]
    UnknownSystem(String),

    /// Prefix token was empty
    #[error("Prefix token must not be empty")]
    EmptyPrefix,

    /// Prefix token is not part of the recognized prefix set
    #[error("Unrecognized prefix '{prefix}'. Recognized prefixes: {known}")]
    UnrecognizedPrefix {
        /// The rejected prefix
        prefix: String,
        /// Comma separated list of recognized prefixes
        known: String,
    },

    /// Prefix does not belong to the requested system's benchmark family
    #[error("Prefix '{prefix}' does not select {system} rows (expected '{}...')", .system.family_prefix())]
    ForeignPrefix {
        /// The rejected prefix
        prefix: String,
        /// The system the rows were requested for
        system: SourceSystem,
    },
}
