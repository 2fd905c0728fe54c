/// Convenience result type used across ffcue.
pub type CueResult<T> = Result<T, CueError>;

/// Which parameters document a diagnostic refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamScope {
    /// The host-supplied system parameters document.
    System,
    /// The optional user overrides document.
    User,
}

impl std::fmt::Display for ParamScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => f.write_str("system"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Top-level error taxonomy used by the compile pipeline.
///
/// The `Display` line of each variant is the exact diagnostic written to the
/// host channel when an invocation aborts, so wording changes here are
/// host-visible.
#[derive(thiserror::Error, Debug)]
pub enum CueError {
    /// A parameters document is absent or unreadable.
    #[error("provided parameters file {0} does not exist or is unreadable")]
    MissingSource(String),

    /// A parameters document is not valid JSON.
    #[error("failed to parse parameters file {path}: {source}")]
    Parse {
        /// Path of the offending document.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A required key is absent from a loaded document.
    #[error("{key} key not found in {scope} parameters file")]
    MissingKey {
        /// Which document was missing the key.
        scope: ParamScope,
        /// The absent key.
        key: String,
    },

    /// A user parameter that may never be set.
    #[error("{key} is a forbidden parameter and cannot be set, provided in user parameters file")]
    Forbidden {
        /// The offending key, in tool-native hyphen form.
        key: String,
    },

    /// A user parameter shadowing a host-owned system parameter.
    #[error("{key} is a host parameter and cannot be overridden, provided in user parameters file")]
    HostOwned {
        /// The offending key, in tool-native hyphen form.
        key: String,
    },

    /// A user parameter touching a conformance-mandated flag.
    #[error(
        "{key} is required for stream conformance and cannot be overridden, {provided} provided in user parameters file"
    )]
    Compliance {
        /// The mandated flag.
        key: String,
        /// The form the user actually supplied (the flag or its `no-` negation).
        provided: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CueError {
    /// Build a [`CueError::MissingKey`] value.
    pub fn missing_key(scope: ParamScope, key: impl Into<String>) -> Self {
        Self::MissingKey {
            scope,
            key: key.into(),
        }
    }

    /// Build a [`CueError::Forbidden`] value.
    pub fn forbidden(key: impl Into<String>) -> Self {
        Self::Forbidden { key: key.into() }
    }

    /// Build a [`CueError::HostOwned`] value.
    pub fn host_owned(key: impl Into<String>) -> Self {
        Self::HostOwned { key: key.into() }
    }

    /// Build a [`CueError::Compliance`] value.
    pub fn compliance(key: impl Into<String>, provided: impl Into<String>) -> Self {
        Self::Compliance {
            key: key.into(),
            provided: provided.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
