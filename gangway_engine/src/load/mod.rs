use async_trait::async_trait;

mod load_session;

pub use load_session::{LoadSession, LoadState};

/// The settled value of a remote module request.
///
/// Mirrors the module record shape of the remote runtime: the component
/// reference is the module's default export, which may be absent if the
/// remote was built without one.
#[derive(Clone, Debug)]
pub struct ResolvedModule<C> {
    pub default: Option<C>,
}

/// Locates, downloads and instantiates a remote module.
///
/// This is an external collaborator: implementations may cache or dedup
/// network fetches, none of which is visible to the load session. All
/// failure signals are treated uniformly, so the error type is opaque.
#[async_trait(?Send)]
pub trait ImportResolver<C> {
    async fn resolve(&self, specifier: &str) -> Result<ResolvedModule<C>, anyhow::Error>;
}
