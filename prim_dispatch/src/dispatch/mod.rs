//! Dispatch module
//!
//! The draw call dispatcher, its configuration, and the transform guard
//! applied around sub-bitmap targets.

mod config;
mod dispatcher;
mod transform_guard;

pub use config::Config;
pub use dispatcher::PrimitiveDispatcher;
pub use transform_guard::TransformGuard;
