use crate::run::{LoadEventHandler, StateChangeEvent};

pub struct SinkLoadEventHandler {}

impl SinkLoadEventHandler {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for SinkLoadEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> LoadEventHandler<C, ()> for SinkLoadEventHandler {
    fn handle_state_changed(&mut self, _event: StateChangeEvent<'_, C>) -> Result<(), ()> {
        Ok(())
    }
}
