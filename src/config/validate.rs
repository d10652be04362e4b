// src/config/validate.rs

use std::num::NonZeroUsize;

use crate::config::model::PoolOptions;
use crate::errors::{Result, TaskpoolError};

impl PoolOptions {
    /// Build options from the raw `-p` value.
    ///
    /// Zero and negative values are rejected before anything is loaded.
    pub fn from_concurrency(raw: i64) -> Result<Self> {
        let concurrency = usize::try_from(raw)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| {
                TaskpoolError::ConfigError(format!(
                    "concurrency must be a positive integer (got {raw})"
                ))
            })?;
        Ok(PoolOptions::new(concurrency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RENDER_INTERVAL;

    #[test]
    fn positive_concurrency_is_accepted() {
        let opts = PoolOptions::from_concurrency(3).unwrap();
        assert_eq!(opts.concurrency.get(), 3);
        assert_eq!(opts.render_interval, DEFAULT_RENDER_INTERVAL);
    }

    #[test]
    fn zero_and_negative_concurrency_are_config_errors() {
        for raw in [0, -1, -42] {
            match PoolOptions::from_concurrency(raw) {
                Err(TaskpoolError::ConfigError(msg)) => {
                    assert!(msg.contains("positive"), "unexpected message: {msg}");
                    assert!(msg.contains(&raw.to_string()));
                }
                other => panic!("expected ConfigError for {raw}, got {other:?}"),
            }
        }
    }
}
