//! Expense Store Errors

/// Errors that can occur in the expense store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row with this id (zero rows affected)
    #[error("Expense not found: {0}")]
    NotFound(i32),

    /// Store unreachable, timed out, or rejected the statement
    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if the caller may retry the same request.
    ///
    /// Connectivity faults are retryable; statement rejections (constraint
    /// violations, bad data) are not going to succeed on a second attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::NotFound(_) => false,
            StoreError::Persistence(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::Protocol(_)
                    | sqlx::Error::WorkerCrashed
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_retryable() {
        let err = StoreError::NotFound(7);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Expense not found: 7");
    }

    #[test]
    fn test_pool_timeout_is_retryable() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Persistence(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_row_not_found_is_not_retryable() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(!err.is_retryable());
    }
}
