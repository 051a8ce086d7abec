use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use anyhow::anyhow;
use async_trait::async_trait;
use futures::channel::oneshot;
use gangway_engine::{ImportResolver, LoadSession, ResolvedModule};

/// How a stubbed request should settle.
#[derive(Debug)]
pub enum StubSettlement {
    DefaultExport(serde_json::Value),
    NoDefaultExport,
    Error(String),
}

impl StubSettlement {
    fn into_result(self) -> Result<ResolvedModule<serde_json::Value>, anyhow::Error> {
        match self {
            StubSettlement::DefaultExport(component) => Ok(ResolvedModule {
                default: Some(component),
            }),
            StubSettlement::NoDefaultExport => Ok(ResolvedModule { default: None }),
            StubSettlement::Error(message) => Err(anyhow!(message)),
        }
    }
}

/// An import resolver whose settlements are scripted by the test.
///
/// Settlements queued with `on_resolve` are delivered as soon as the request
/// is driven. Settlements supplied later with `settle` release a request
/// that is already awaiting, which lets tests control settlement order.
#[derive(Default)]
pub struct StubImportResolver {
    queued: RefCell<HashMap<String, VecDeque<StubSettlement>>>,
    waiting: RefCell<HashMap<String, VecDeque<oneshot::Sender<StubSettlement>>>>,
    calls: RefCell<Vec<String>>,
}

impl StubImportResolver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Queues a settlement for the next request for `specifier`.
    pub fn on_resolve(&self, specifier: &str, settlement: StubSettlement) {
        self.queued
            .borrow_mut()
            .entry(specifier.to_string())
            .or_default()
            .push_back(settlement);
    }

    /// Settles the oldest request for `specifier`, whether or not it has
    /// been driven yet.
    pub fn settle(&self, specifier: &str, settlement: StubSettlement) {
        let waiting = self
            .waiting
            .borrow_mut()
            .get_mut(specifier)
            .and_then(|queue| queue.pop_front());

        match waiting {
            Some(sender) => sender.send(settlement).unwrap_or_else(|_| {
                panic!("request for \"{}\" was dropped before settling", specifier)
            }),
            None => self.on_resolve(specifier, settlement),
        }
    }

    /// Every specifier that has been requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// A load session backed by the given stub resolver.
pub fn stub_session(resolver: &Rc<StubImportResolver>) -> LoadSession<serde_json::Value> {
    LoadSession::new(Rc::clone(resolver) as Rc<dyn ImportResolver<serde_json::Value>>)
}

#[async_trait(?Send)]
impl ImportResolver<serde_json::Value> for StubImportResolver {
    async fn resolve(
        &self,
        specifier: &str,
    ) -> Result<ResolvedModule<serde_json::Value>, anyhow::Error> {
        self.calls.borrow_mut().push(specifier.to_string());

        let queued = self
            .queued
            .borrow_mut()
            .get_mut(specifier)
            .and_then(|queue| queue.pop_front());

        let settlement = match queued {
            Some(settlement) => settlement,
            None => {
                let (sender, receiver) = oneshot::channel();
                self.waiting
                    .borrow_mut()
                    .entry(specifier.to_string())
                    .or_default()
                    .push_back(sender);

                receiver.await.map_err(|_| {
                    anyhow!("stub resolver was dropped before settling \"{}\"", specifier)
                })?
            }
        };

        settlement.into_result()
    }
}
