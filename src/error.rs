//! Error types for the generator framework.
//!
//! Only two conditions are allowed to abort a generation run: a name
//! collision reported by the collision guard and a malformed hook
//! declaration caught at class-definition time. A hook whose target
//! cannot be resolved is reported through the status channel and never
//! surfaces as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for framework operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the generator framework.
#[derive(Debug, Error)]
pub enum Error {
    /// A proposed generated name already exists in the host environment.
    #[error(
        "the name '{name}' is already used in your application or reserved; \
         please choose an alternative name and re-run"
    )]
    NameCollision { name: String },

    /// A hook was declared with conflicting or invalid settings.
    #[error("malformed hook '{name}': {reason}")]
    MalformedHook { name: String, reason: String },

    /// Error loading configuration.
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// The templating collaborator failed while invoking a generator.
    #[error("invocation of '{namespace}' failed: {message}")]
    Invoke { namespace: String, message: String },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax.
    #[error("invalid TOML in {}: {message}", path.display())]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a name collision error.
    pub fn collision(name: impl Into<String>) -> Self {
        Self::NameCollision { name: name.into() }
    }

    /// Create a malformed hook error.
    pub fn malformed_hook(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedHook {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invocation error.
    pub fn invoke(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invoke {
            namespace: namespace.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_carries_name_and_hint() {
        let err = Error::collision("Foo::Bar");
        let msg = err.to_string();
        assert!(msg.contains("Foo::Bar"));
        assert!(msg.contains("choose an alternative name"));
    }

    #[test]
    fn test_malformed_hook_message() {
        let err = Error::malformed_hook("orm", "boolean hook cannot carry a string default");
        assert!(err.to_string().contains("orm"));
        assert!(err.to_string().contains("boolean hook"));
    }
}
