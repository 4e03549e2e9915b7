use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage quota exhausted")]
    StorageFull,
}

impl StoreError {
    /// True when the underlying failure means the durable store is out of
    /// room, as opposed to any other write problem.
    pub fn is_storage_full(&self) -> bool {
        match self {
            StoreError::StorageFull => true,
            StoreError::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::StorageFull | std::io::ErrorKind::QuotaExceeded
            ),
            _ => false,
        }
    }
}

/// Convenience type alias for Results with StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_storage_full_detection() {
        assert!(StoreError::StorageFull.is_storage_full());

        let io_err = std::io::Error::new(std::io::ErrorKind::StorageFull, "disk full");
        let err: StoreError = io_err.into();
        assert!(err.is_storage_full());

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: StoreError = io_err.into();
        assert!(!err.is_storage_full());
    }
}
