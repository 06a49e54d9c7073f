/// Backend selection strategy.

use crate::error::{Error, Result};
use crate::surface::{Bitmap, DisplayFlags};
use super::backend::BackendKind;

/// Choose the backend for one draw call
///
/// Memory bitmaps can only be reached by the software backend, so a memory
/// target or a memory texture forces it. Otherwise the display flags decide,
/// OpenGL first.
///
/// # Errors
///
/// Returns `NoEligibleBackend` when the target is GPU-resident and the
/// display has neither the OpenGL nor the Direct3D flag.
pub fn select_backend(
    target: &Bitmap,
    texture: Option<&Bitmap>,
    display_flags: DisplayFlags,
) -> Result<BackendKind> {
    if target.is_memory() || texture.is_some_and(Bitmap::is_memory) {
        return Ok(BackendKind::Software);
    }

    if display_flags.contains(DisplayFlags::OPENGL) {
        Ok(BackendKind::OpenGl)
    } else if display_flags.contains(DisplayFlags::DIRECT3D) {
        Ok(BackendKind::Direct3D)
    } else {
        Err(Error::NoEligibleBackend)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
