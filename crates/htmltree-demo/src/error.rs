//! Demo CLI error types.

use htmltree::RenderError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DemoError {
    #[error("{0}")]
    Render(#[from] RenderError),
}
