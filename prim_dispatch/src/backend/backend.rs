/// Backend trait - the seam to the software, OpenGL-class and
/// Direct3D-class primitive renderers.

use std::fmt;
use crate::error::{Error, Result};
use crate::surface::{Bitmap, RenderContext, ShaderVersion};
use crate::vertex::{NativeVertexElement, NativeVertexLayout, PrimType, VertexDecl};

/// Identifies one of the three backend families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// CPU rasterizer, the only backend able to draw to or from memory bitmaps
    Software,
    /// OpenGL-class GPU path
    OpenGl,
    /// Direct3D-class GPU path
    Direct3D,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Software => write!(f, "software"),
            BackendKind::OpenGl => write!(f, "opengl"),
            BackendKind::Direct3D => write!(f, "direct3d"),
        }
    }
}

/// Inputs shared by the ranged and indexed draw calls
#[derive(Debug, Clone, Copy)]
pub struct PrimDraw<'a> {
    /// Raw vertex records
    pub vertices: &'a [u8],
    /// Layout of `vertices`; `None` means the built-in `Vertex` record
    pub decl: Option<&'a VertexDecl>,
    pub texture: Option<&'a Bitmap>,
    pub prim_type: PrimType,
}

/// Primitive backend
///
/// Implemented by each rendering backend. The dispatcher calls exactly one
/// backend per draw, with the context transform already adjusted for the
/// target's sub-bitmap offset.
pub trait PrimitiveBackend: Send + Sync {
    /// Which backend family this is
    fn kind(&self) -> BackendKind;

    /// Draw vertices `start..end`
    ///
    /// # Returns
    ///
    /// The number of primitives rendered
    fn draw_prim(
        &mut self,
        ctx: &RenderContext,
        draw: &PrimDraw<'_>,
        start: usize,
        end: usize,
    ) -> Result<u32>;

    /// Draw the vertices selected by `indices`
    ///
    /// # Returns
    ///
    /// The number of primitives rendered
    fn draw_indexed_prim(
        &mut self,
        ctx: &RenderContext,
        draw: &PrimDraw<'_>,
        indices: &[i32],
    ) -> Result<u32>;

    /// Pixel shader version of the underlying device, if it has one
    fn pixel_shader_version(&self) -> Option<ShaderVersion> {
        None
    }

    /// Build a device vertex layout from a terminator-ended element list
    ///
    /// Only Direct3D-class backends override this.
    fn create_vertex_layout(
        &mut self,
        _elements: &[NativeVertexElement],
    ) -> Result<Box<dyn NativeVertexLayout>> {
        Err(Error::BackendError(format!(
            "{} backend does not build native vertex layouts",
            self.kind()
        )))
    }
}
