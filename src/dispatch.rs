//! Action dispatcher
//!
//! Routes an [`ActionEnvelope`] to the pricing engine and hands back whatever
//! it returns.

use tracing::debug;

use crate::pricing::{ActionEnvelope, Outcome, PricingEngine, PricingResult};

#[derive(Debug, Clone)]
pub struct Dispatcher {
    engine: PricingEngine,
}

impl Dispatcher {
    pub fn new(engine: PricingEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    pub fn dispatch(&self, envelope: &ActionEnvelope) -> PricingResult<Option<Outcome>> {
        debug!(action = %envelope.action, datas = %envelope.datas, "dispatching");
        let result = self.engine.process(envelope);
        if let Ok(None) = result {
            debug!(action = %envelope.action, "unrecognized action, no result");
        }
        result
    }
}
