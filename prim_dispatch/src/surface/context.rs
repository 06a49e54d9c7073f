/// Render context - the explicit replacement for the host's
/// "current display / current target / current transform" state.
///
/// Passed by `&mut` into every draw call. The dispatcher may temporarily
/// change the transform but always hands the context back unchanged.

use super::bitmap::Bitmap;
use super::display::Display;
use super::transform::Transform;

/// Per-thread drawing state owned by the caller
#[derive(Debug, Clone)]
pub struct RenderContext {
    display: Display,
    target: Bitmap,
    transform: Transform,
}

impl RenderContext {
    /// Create a context drawing into `target` with the identity transform
    pub fn new(display: Display, target: Bitmap) -> Self {
        Self {
            display,
            target,
            transform: Transform::IDENTITY,
        }
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    pub fn target(&self) -> &Bitmap {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut Bitmap {
        &mut self.target
    }

    /// Switch the render target, returning the previous one
    pub fn set_target(&mut self, target: Bitmap) -> Bitmap {
        std::mem::replace(&mut self.target, target)
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Make `transform` the active transform
    pub fn use_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
