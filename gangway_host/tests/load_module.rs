use common_macros::gangway_test_async;
use common_test_utils::mr;
use common_test_utils::stub_resolver::{StubImportResolver, StubSettlement, stub_session};
use gangway_engine::LoadState;
use gangway_host::run::{
    LoadEventHandler, SinkLoadEventHandler, StateChangeEvent, TracingLoadEventHandler,
    load_module,
};
use serde_json::{Value, json};

struct RecordingEventHandler {
    states: Vec<LoadState<Value>>,
}

impl LoadEventHandler<Value, ()> for RecordingEventHandler {
    fn handle_state_changed(&mut self, event: StateChangeEvent<'_, Value>) -> Result<(), ()> {
        self.states.push(event.state.clone());
        Ok(())
    }
}

#[gangway_test_async]
async fn it_should_emit_loading_then_settled_events() {
    let resolver = StubImportResolver::new();
    resolver.on_resolve(
        "shell/header",
        StubSettlement::DefaultExport(json!("header-component")),
    );

    let session = stub_session(&resolver);
    let mut event_handler = RecordingEventHandler { states: vec![] };

    load_module(&session, mr("shell", "header"), &mut event_handler)
        .await
        .unwrap();

    assert_eq!(
        event_handler.states,
        vec![
            LoadState::Loading,
            LoadState::Resolved(json!("header-component")),
        ]
    );
}

#[gangway_test_async]
async fn it_should_emit_a_single_idle_event_for_an_unloadable_reference() {
    let resolver = StubImportResolver::new();

    let session = stub_session(&resolver);
    let mut event_handler = RecordingEventHandler { states: vec![] };

    load_module(&session, mr("shell", ""), &mut event_handler)
        .await
        .unwrap();

    assert_eq!(event_handler.states, vec![LoadState::Idle]);
    assert!(resolver.calls().is_empty());
}

#[gangway_test_async]
async fn it_should_load_with_the_tracing_event_handler() {
    let resolver = StubImportResolver::new();
    resolver.on_resolve(
        "shell/header",
        StubSettlement::DefaultExport(json!("header-component")),
    );

    let session = stub_session(&resolver);

    load_module(
        &session,
        mr("shell", "header"),
        &mut TracingLoadEventHandler::new(),
    )
    .await
    .unwrap();

    assert_eq!(
        session.state(),
        LoadState::Resolved(json!("header-component"))
    );
}

#[gangway_test_async]
async fn it_should_load_with_the_sink_event_handler() {
    let resolver = StubImportResolver::new();
    resolver.on_resolve("shell/header", StubSettlement::NoDefaultExport);

    let session = stub_session(&resolver);

    load_module(
        &session,
        mr("shell", "header"),
        &mut SinkLoadEventHandler::new(),
    )
    .await
    .unwrap();

    assert_eq!(session.state(), LoadState::Failed);
}
