use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, trace};

use crate::errors::ModuleLoadError;
use crate::{ImportResolver, ModuleReference, ResolvedModule};

/// The observable state of a remote module request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<C> {
    /// No loadable reference has been supplied.
    Idle,

    /// A request for the current reference is in flight.
    Loading,

    /// The resolver returned a usable component reference.
    Resolved(C),

    /// The resolver raised, or settled without a usable default export.
    Failed,
}

impl<C> LoadState<C> {
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Resolved(_) | LoadState::Failed)
    }
}

/// Tracks the load state of a single remote module slot over its owner's
/// lifetime.
///
/// The session issues at most one resolver request per distinct reference.
/// Requests cannot be cancelled, so each one is stamped with the generation
/// it was issued for and a settlement is applied only if its generation is
/// still current. A request superseded by a reference change is abandoned,
/// not cancelled: its settlement still arrives and is discarded.
///
/// Scheduling is single-threaded cooperative. `set_reference` transitions
/// synchronously and hands back the settlement future for the host's event
/// loop to drive.
pub struct LoadSession<C> {
    resolver: Rc<dyn ImportResolver<C>>,
    inner: RefCell<SessionInner<C>>,
}

struct SessionInner<C> {
    reference: ModuleReference,
    state: LoadState<C>,
    generation: u64,
}

impl<C> LoadSession<C> {
    pub fn new(resolver: Rc<dyn ImportResolver<C>>) -> Self {
        Self {
            resolver,
            inner: RefCell::new(SessionInner {
                reference: ModuleReference::empty(),
                state: LoadState::Idle,
                generation: 0,
            }),
        }
    }

    pub fn reference(&self) -> ModuleReference {
        self.inner.borrow().reference.clone()
    }

    /// Establishes the current module reference.
    ///
    /// An unchanged reference is a no-op: no new request is issued. An
    /// unloadable reference moves the session to `Idle`. Otherwise the
    /// session moves to `Loading` before this returns, and the returned
    /// future performs the resolver request and settles the state.
    pub fn set_reference(
        &self,
        reference: ModuleReference,
    ) -> Option<impl Future<Output = ()> + '_> {
        let generation = {
            let mut inner = self.inner.borrow_mut();

            if inner.reference == reference {
                return None;
            }

            // Any outstanding request now belongs to a superseded generation
            // and its settlement will be discarded.
            inner.generation += 1;
            inner.reference = reference.clone();

            if !reference.is_loadable() {
                inner.state = LoadState::Idle;
                return None;
            }

            inner.state = LoadState::Loading;
            inner.generation
        };

        let specifier = reference.specifier();
        debug!("Loading remote module: {}", specifier);

        let resolver = Rc::clone(&self.resolver);
        Some(async move {
            let result = resolver.resolve(&specifier).await;
            self.settle(generation, reference, result);
        })
    }

    fn settle(
        &self,
        generation: u64,
        reference: ModuleReference,
        result: Result<ResolvedModule<C>, anyhow::Error>,
    ) {
        let mut inner = self.inner.borrow_mut();

        if inner.generation != generation {
            trace!(
                "Discarding stale settlement for superseded module \"{}\".",
                reference
            );
            return;
        }

        inner.state = match result {
            Ok(module) => match module.default {
                Some(component) => {
                    debug!("Resolved remote module \"{}\".", reference);
                    LoadState::Resolved(component)
                }
                None => {
                    error!("{}", ModuleLoadError::MissingDefaultExport { reference });
                    LoadState::Failed
                }
            },
            Err(source) => {
                error!("{}", ModuleLoadError::ResolutionFailed { reference, source });
                LoadState::Failed
            }
        };
    }
}

impl<C: Clone> LoadSession<C> {
    pub fn state(&self) -> LoadState<C> {
        self.inner.borrow().state.clone()
    }
}
