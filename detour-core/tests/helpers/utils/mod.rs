pub use self::random::*;

use crate::routing::{HybridRouter, RoutingConfig};
use crate::storage::InMemoryStore;
use crate::utils::{DefaultRandom, Environment};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub fn create_test_environment() -> Arc<Environment> {
    Arc::new(Environment::new_with_seed(42))
}

/// Creates an environment which keeps all logged messages.
pub fn create_logging_environment() -> (Arc<Environment>, Rc<RefCell<Vec<String>>>) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink = messages.clone();

    let logger = Arc::new(move |msg: &str| sink.borrow_mut().push(msg.to_string()));
    let environment =
        Environment { random: Arc::new(DefaultRandom::new_with_seed(42)), ..Environment::new_with_logger(logger) };

    (Arc::new(environment), messages)
}

pub fn create_test_router(config: RoutingConfig) -> (HybridRouter, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    let router = HybridRouter::new(config, store.clone(), create_test_environment()).expect("cannot create router");

    (router, store)
}
