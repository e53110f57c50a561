use crate::Result;
use crate::config::OrderManagerConfig;
use crate::persistence::Persistence;
use crate::random::{RandomSource, ThreadRandom};

use super::OrderManager;

/// Builder for an [`OrderManager`].
///
/// ```
/// use sticky_order::{OrderManager, SeededRandom, persistence::InMemory};
///
/// let manager = OrderManager::builder(InMemory::new())
///     .max_limit(50)
///     .random(SeededRandom::new(3))
///     .build()?;
/// assert_eq!(manager.config().max_limit, 50);
/// # Ok::<(), sticky_order::Error>(())
/// ```
#[derive(Debug)]
pub struct OrderManagerBuilder<P> {
    persistence: P,
    config: OrderManagerConfig,
    random: Option<Box<dyn RandomSource>>,
}

impl<P: Persistence + 'static> OrderManagerBuilder<P> {
    pub(super) fn new(persistence: P) -> Self {
        Self {
            persistence,
            config: OrderManagerConfig::default(),
            random: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: OrderManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the cull budget.
    pub fn max_limit(mut self, max_limit: usize) -> Self {
        self.config.max_limit = max_limit;
        self
    }

    /// Uses `random` for new-group placement instead of the thread-local generator.
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Validates the configuration and loads the persisted order.
    pub fn build(self) -> Result<OrderManager> {
        self.config.validate()?;
        let random = self.random.unwrap_or_else(|| Box::new(ThreadRandom));
        OrderManager::from_parts(Box::new(self.persistence), self.config, random)
    }
}
