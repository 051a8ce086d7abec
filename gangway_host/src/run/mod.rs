use gangway_engine::{LoadSession, LoadState, ModuleReference};
use thiserror::Error;

mod sink_load_event_handler;
mod tracing_load_event_handler;

pub use sink_load_event_handler::SinkLoadEventHandler;
pub use tracing_load_event_handler::TracingLoadEventHandler;

#[derive(Error, Debug)]
pub enum LoadHostError<THostError> {
    #[error("Host error.\n{0:#?}")]
    HostError(THostError),
}

pub struct StateChangeEvent<'state, C> {
    pub reference: &'state ModuleReference,
    pub state: &'state LoadState<C>,
    pub is_settled: bool,
}

pub trait LoadEventHandler<C, THostError> {
    fn handle_state_changed(
        &mut self,
        event: StateChangeEvent<'_, C>,
    ) -> Result<(), THostError>;
}

/// Establishes `reference` on the session and drives the request to
/// settlement, emitting a state-change event on entering `Loading` and on
/// settlement.
///
/// Engine-level failures never propagate from here: they are folded into
/// `LoadState::Failed` by the session. Only host errors from the event
/// handler are returned.
pub async fn load_module<C: Clone, THostError>(
    session: &LoadSession<C>,
    reference: ModuleReference,
    event_handler: &mut impl LoadEventHandler<C, THostError>,
) -> Result<(), LoadHostError<THostError>> {
    let request = session.set_reference(reference.clone());

    let state = session.state();
    event_handler
        .handle_state_changed(StateChangeEvent {
            reference: &reference,
            state: &state,
            is_settled: state.is_settled(),
        })
        .map_err(LoadHostError::HostError)?;

    let Some(request) = request else {
        return Ok(());
    };

    request.await;

    let state = session.state();
    event_handler
        .handle_state_changed(StateChangeEvent {
            reference: &reference,
            state: &state,
            is_settled: state.is_settled(),
        })
        .map_err(LoadHostError::HostError)?;

    Ok(())
}
