//! Error types for the primitive dispatcher
//!
//! This module defines the error types returned by draw calls, vertex
//! declaration compilation and backend registration.

use std::fmt;
use crate::backend::BackendKind;
use crate::vertex::{PrimAttribute, PrimStorage};

/// Result type for dispatcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Dispatcher errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (software, OpenGL, Direct3D)
    BackendError(String),

    /// Invalid resource (bitmap, lock, vertex declaration, etc.)
    InvalidResource(String),

    /// Initialization failed (backend registration, context setup)
    InitializationFailed(String),

    /// The target lives on the GPU but the display advertises no GPU path
    NoEligibleBackend,

    /// The selected backend was never registered with the dispatcher
    BackendUnavailable(BackendKind),

    /// A vertex attribute storage has no native declaration type
    UnsupportedStorage {
        attribute: PrimAttribute,
        storage: PrimStorage,
    },

    /// Raw primitive type outside the valid range
    InvalidPrimType(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::NoEligibleBackend => {
                write!(f, "No eligible backend: display has neither OpenGL nor Direct3D capability")
            }
            Error::BackendUnavailable(kind) => write!(f, "Backend not registered: {}", kind),
            Error::UnsupportedStorage { attribute, storage } => {
                write!(f, "Unsupported storage {:?} for attribute {:?}", storage, attribute)
            }
            Error::InvalidPrimType(raw) => write!(f, "Invalid primitive type: {}", raw),
        }
    }
}

impl std::error::Error for Error {}

/// Build a `BackendError`, logging it at ERROR level with file:line
///
/// # Example
///
/// ```ignore
/// let err = prim_err!("prim::Dispatcher", "Draw failed: {}", reason);
/// ```
#[macro_export]
macro_rules! prim_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::prim::Error::BackendError(message)
    }};
}

/// Return early with a logged `BackendError`
///
/// # Example
///
/// ```ignore
/// if stride == 0 {
///     prim_bail!("prim::VertexDecl", "Stride must be non-zero");
/// }
/// ```
#[macro_export]
macro_rules! prim_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::prim_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
