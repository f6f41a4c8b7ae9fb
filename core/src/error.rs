use thiserror::Error as ThisError;

/// Errors produced by the core itself. Repository I/O failures are
/// propagated as `anyhow::Error` by the storage layer instead.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid task: {0}")]
    Validation(String),

    #[error("task {0} not found")]
    NotFound(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = Error::Validation("title must not be empty".to_string());
        assert_eq!(err.to_string(), "invalid task: title must not be empty");
        assert_eq!(Error::NotFound(7).to_string(), "task 7 not found");
    }
}
