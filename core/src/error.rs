use thiserror::Error;

/// docker-imgsha error types
#[derive(Error, Debug)]
pub enum ImgShaError {
    /// The Docker daemon could not be reached
    #[error("Cannot connect to the Docker daemon ({0}). Is the daemon running?")]
    DaemonUnreachable(String),

    /// Inspect target does not exist in the local image store
    #[error("Image '{image}' not found locally")]
    ImageNotFound { image: String },

    /// The daemon answered with an error other than not-found
    #[error("Docker daemon error: {0}")]
    Daemon(String),

    /// Template parse or execution error
    #[error("Template error: {0}")]
    Template(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// `--host` value that cannot be turned into a daemon connection
    #[error("Invalid Docker host '{0}': expected unix://, npipe://, tcp:// or http://")]
    InvalidHost(String),
}

impl From<serde_json::Error> for ImgShaError {
    fn from(err: serde_json::Error) -> Self {
        ImgShaError::Serialization(err.to_string())
    }
}

/// Result type alias for docker-imgsha operations
pub type Result<T> = std::result::Result<T, ImgShaError>;
