//! Surface module - the host-side state the dispatcher decides on.
//!
//! Passive value types: bitmaps (targets and textures), the display's
//! capability flags, the active transform, and the render context that
//! bundles them for a draw call.

mod bitmap;
mod context;
mod display;
mod transform;

pub use bitmap::{Bitmap, BitmapFlags, Region, is_region_locked};
pub use context::RenderContext;
pub use display::{Display, DisplayFlags, ShaderVersion};
pub use transform::Transform;
