//! Error types for rule configuration

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON, has the wrong shape,
    /// or holds a severity other than off/warn/error/0/1/2
    #[error("Invalid configuration syntax: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A rule name that is not in the registry
    #[error("Unknown rule: {0}")]
    UnknownRule(String),

    /// The same rule under two keys, e.g. `no-literal` and `custom/no-literal`
    #[error("Rule configured more than once: {0}")]
    DuplicateRule(String),
}
