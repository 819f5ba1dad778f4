use thiserror::Error;

/// Failures surfaced by the content store and its storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused a read, write or removal (quota exceeded, storage
    /// disabled, I/O error).
    #[error("storage backend failed for `{key}`: {message}")]
    Backend {
        /// Key being read or written.
        key: String,
        /// Backend error text.
        message: String,
    },

    /// A stored value under `key` is not valid JSON for its collection.
    #[error("stored value under `{key}` is corrupt")]
    Corrupt {
        /// Key holding the bad value.
        key: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A collection could not be encoded before writing.
    #[error("failed to serialize `{key}`")]
    Serialize {
        /// Key that was about to be written.
        key: String,
        /// Encoder error.
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Shorthand for [`StoreError::Backend`].
    pub fn backend(key: &str, message: impl std::fmt::Display) -> Self {
        StoreError::Backend {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    /// Key the failure happened on.
    pub fn key(&self) -> &str {
        match self {
            StoreError::Backend { key, .. }
            | StoreError::Corrupt { key, .. }
            | StoreError::Serialize { key, .. } => key,
        }
    }
}

/// Result alias used across the crate.
pub type StoreResult<T> = Result<T, StoreError>;
