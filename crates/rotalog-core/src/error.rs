//! Error types for rotalog

use std::path::PathBuf;

/// rotalog error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to append to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for rotalog
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Whether the stream must stop. A failed append only loses its own line.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = Error::Rename {
            from: PathBuf::from("/var/log/app.log"),
            to: PathBuf::from("/var/log/app.log.1"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to rename /var/log/app.log to /var/log/app.log.1: denied"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Read(_)));
    }

    #[test]
    fn test_only_write_errors_are_recoverable() {
        let write = Error::Write {
            path: PathBuf::from("app.log"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert!(!write.is_fatal());

        let metadata = Error::Metadata {
            path: PathBuf::from("app.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(metadata.is_fatal());
        assert!(Error::config("max_backups must be at least 1").is_fatal());
    }
}
