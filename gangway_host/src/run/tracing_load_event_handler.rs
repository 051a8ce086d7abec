use gangway_engine::LoadState;
use tracing::debug;

use crate::run::{LoadEventHandler, StateChangeEvent};

pub struct TracingLoadEventHandler {}

impl TracingLoadEventHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TracingLoadEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LoadEventHandler<C, ()> for TracingLoadEventHandler {
    fn handle_state_changed(&mut self, event: StateChangeEvent<'_, C>) -> Result<(), ()> {
        match event.state {
            LoadState::Idle => debug!(r#""{}" is idle."#, event.reference),
            LoadState::Loading => debug!(r#"Loading "{}"..."#, event.reference),
            LoadState::Resolved(_) => debug!(r#""{}" resolved."#, event.reference),
            LoadState::Failed => debug!(r#""{}" failed to load."#, event.reference),
        }

        Ok(())
    }
}
