use thiserror::Error;

use crate::ModuleReference;

#[derive(Error, Debug)]
pub enum ModuleReferenceError {
    #[error("Invalid {primitive_type}: {message}")]
    InvalidFormat {
        primitive_type: String,
        message: String,
    },
}

/// Why a load attempt settled as `Failed`.
///
/// Neither variant escapes the load session: both are reported to the
/// tracing sink and folded into `LoadState::Failed`.
#[derive(Error, Debug)]
pub enum ModuleLoadError {
    #[error("Remote module resolution failed for \"{reference}\".\n{source}")]
    ResolutionFailed {
        reference: ModuleReference,
        #[source]
        source: anyhow::Error,
    },

    #[error("Remote module \"{reference}\" resolved without a default export.")]
    MissingDefaultExport { reference: ModuleReference },
}
