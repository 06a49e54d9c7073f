/*!
# prim_dispatch

Primitive-rendering dispatch for a 2D game library.

Given a vertex buffer, a vertex declaration, an optional texture and a
primitive topology, the dispatcher picks one rendering backend (software,
OpenGL-class or Direct3D-class) for the current render target and forwards
the draw call to it. Backends are supplied by the application through the
[`PrimitiveBackend`](crate::backend::PrimitiveBackend) trait.

## Architecture

- **PrimitiveDispatcher**: backend registry, draw calls, vertex declarations
- **select_backend**: per-draw backend choice from target, texture and display
- **RenderContext**: explicit display / target / transform state
- **VertexDecl**: attribute layout plus optional backend-native form
- **Color / PrimColor / PackedColor**: color representations
*/

// Internal modules
mod error;
mod version;
pub mod log;
pub mod backend;
pub mod color;
pub mod dispatch;
pub mod surface;
pub mod vertex;

// Main prim namespace module
pub mod prim {
    // Error types
    pub use crate::error::{Error, Result};

    // Dispatcher
    pub use crate::dispatch::{Config, PrimitiveDispatcher};

    // Version
    pub use crate::version::primitives_version;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Backend sub-module
    pub mod backend {
        pub use crate::backend::*;
    }

    // Color sub-module
    pub mod color {
        pub use crate::color::*;
    }

    // Surface sub-module
    pub mod surface {
        pub use crate::surface::*;
    }

    // Vertex sub-module
    pub mod vertex {
        pub use crate::vertex::*;
    }
}

// Re-export math library at crate root
pub use glam;
