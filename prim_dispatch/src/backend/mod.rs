/// Backend module - the backend seam and the selection strategy

pub mod backend;
pub mod selector;

pub use backend::*;
pub use selector::*;

// Mock backend for tests (no GPU required)
#[cfg(test)]
pub mod mock_backend;
