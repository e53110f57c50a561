//! Manager configuration.
//!
//! [`OrderManagerConfig`] holds the options recognized at construction time.
//! The persistence adapter and the random source are passed separately to the
//! [`OrderManagerBuilder`](crate::OrderManagerBuilder) because they are
//! capabilities, not data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_MAX_LIMIT;

/// Options for an [`OrderManager`](crate::OrderManager).
///
/// Missing fields take their defaults, so a config can be deserialized from a
/// partial document:
///
/// ```
/// use sticky_order::OrderManagerConfig;
///
/// let config: OrderManagerConfig = serde_json::from_str(r#"{"maxLimit": 50}"#)?;
/// assert_eq!(config.max_limit, 50);
///
/// let config: OrderManagerConfig = serde_json::from_str("{}")?;
/// assert_eq!(config, OrderManagerConfig::default());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderManagerConfig {
    /// Maximum number of persisted records, live and tombstoned together.
    pub max_limit: usize,
}

impl Default for OrderManagerConfig {
    fn default() -> Self {
        Self {
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}

impl OrderManagerConfig {
    /// Returns a config with the given record budget.
    pub fn with_max_limit(max_limit: usize) -> Self {
        Self { max_limit }
    }

    /// Checks that the options are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit == 0 {
            return Err(ConfigError::InvalidMaxLimit {
                value: self.max_limit,
            });
        }
        Ok(())
    }
}

/// Configuration errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The record budget cannot hold a single record.
    #[error("Invalid max limit {value}: must be at least 1")]
    InvalidMaxLimit { value: usize },
}

// Conversion from ConfigError to the main Error type
impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
