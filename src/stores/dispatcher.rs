use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
  actions::{Action, ActionDomain},
  stores::ActionProcessor,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
  #[error("a processor is already registered for the {0} domain")]
  DuplicateProcessor(ActionDomain),
}

/// Where actions are sent. Handed to callers by injection.
pub trait ActionSink: fmt::Debug + Send + Sync {
  fn dispatch(&self, action: Action);
}

/// Routes each action to the single processor registered for its domain.
#[derive(Debug, Default)]
pub struct Dispatcher {
  processors: RwLock<HashMap<ActionDomain, Arc<dyn ActionProcessor>>>,
}

impl Dispatcher {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn register<P: ActionProcessor + 'static>(&self, processor: P) -> Result<(), DispatchError> {
    let domain = processor.handles();
    let mut processors = self.processors.write();
    if processors.contains_key(&domain) {
      return Err(DispatchError::DuplicateProcessor(domain));
    }

    processors.insert(domain, Arc::new(processor));
    debug!(path = "stores.dispatcher.register", %domain, "processor registered");
    Ok(())
  }

  pub fn unregister(&self, domain: ActionDomain) -> bool {
    self.processors.write().remove(&domain).is_some()
  }

  pub fn is_registered(&self, domain: ActionDomain) -> bool {
    self.processors.read().contains_key(&domain)
  }
}

impl ActionSink for Dispatcher {
  fn dispatch(&self, action: Action) {
    let domain = action.domain();
    // Released before processing so a processor may dispatch again.
    let processor = self.processors.read().get(&domain).cloned();

    match processor {
      Some(processor) => processor.process(action),
      None => warn!(path = "stores.dispatcher.dispatch", %domain, "no processor registered, action dropped"),
    }
  }
}
