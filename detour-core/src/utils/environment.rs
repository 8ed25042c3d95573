use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the router.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Keeps track of environment specific information which influences routing behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with a seeded random generator, useful for reproducible runs.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }

    /// Creates an instance of `Environment` which forwards log messages to the given logger.
    pub fn new_with_logger(logger: InfoLogger) -> Self {
        Self { logger, ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|_| {}) }
    }
}
