use std::rc::Rc;

use gangway_engine::{ImportResolver, LoadSession, ModuleReference};

use crate::present::{Boundary, present};

/// A UI slot whose implementation is fetched from a remote module at render
/// time.
///
/// Construction configures the slot; nothing is requested until [`load`]
/// is called by the owning host, at which point the session moves to
/// `Loading` synchronously and the returned future settles it.
///
/// [`load`]: LazyComponent::load
pub struct LazyComponent<C, R> {
    reference: ModuleReference,
    fallback: Option<R>,
    render: Box<dyn Fn(&C) -> R>,
    session: LoadSession<C>,
}

pub struct LazyComponentBuilder<C, R> {
    scope: String,
    module: String,
    fallback: Option<R>,
    render: Option<Box<dyn Fn(&C) -> R>>,
    resolver: Option<Rc<dyn ImportResolver<C>>>,
}

impl<C, R> LazyComponentBuilder<C, R> {
    pub fn new() -> Self {
        Self {
            scope: String::new(),
            module: String::new(),
            fallback: None,
            render: None,
            resolver: None,
        }
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self
    }

    pub fn module(mut self, module: &str) -> Self {
        self.module = module.to_string();
        self
    }

    /// Content shown while idle or loading, and as the suspension fallback.
    pub fn fallback(mut self, fallback: R) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn render(mut self, render: impl Fn(&C) -> R + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn resolver(mut self, resolver: Rc<dyn ImportResolver<C>>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn build(self) -> LazyComponent<C, R> {
        let resolver = self
            .resolver
            .expect("A lazy component requires an import resolver");
        let render = self
            .render
            .expect("A lazy component requires a render function");

        LazyComponent {
            reference: ModuleReference::new(&self.scope, &self.module),
            fallback: self.fallback,
            render,
            session: LoadSession::new(resolver),
        }
    }
}

impl<C, R> Default for LazyComponentBuilder<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> LazyComponent<C, R> {
    pub fn builder() -> LazyComponentBuilder<C, R> {
        LazyComponentBuilder::new()
    }

    /// Issues the configured reference to the session.
    ///
    /// Returns the settlement future for the host to drive, or `None` if no
    /// request was needed (reference unchanged or not loadable). Calling
    /// this again for an unchanged reference never re-issues a request.
    pub fn load(&self) -> Option<impl Future<Output = ()> + '_> {
        self.session.set_reference(self.reference.clone())
    }

    /// Re-keys the slot to a different remote module.
    pub fn set_reference(
        &self,
        reference: ModuleReference,
    ) -> Option<impl Future<Output = ()> + '_> {
        self.session.set_reference(reference)
    }
}

impl<C: Clone, R: Clone> LazyComponent<C, R> {
    /// Presents the current load state (see [`present`]).
    pub fn view(&self) -> Boundary<R> {
        let reference = self.session.reference();
        let state = self.session.state();

        present(
            &reference,
            Some(&state),
            self.fallback.as_ref(),
            |component| (self.render)(component),
        )
    }
}
