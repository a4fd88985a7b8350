//! App error types.

use braille_core::DotError;
use thiserror::Error;

/// Errors returned by [`crate::App::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppError {
    /// Cell mutation refused.
    #[error(transparent)]
    Dot(#[from] DotError),
}
