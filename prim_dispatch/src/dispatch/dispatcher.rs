/// Primitive dispatcher - routes draw calls to exactly one backend and
/// compiles vertex declarations.

use rustc_hash::FxHashMap;
use crate::backend::{BackendKind, PrimDraw, PrimitiveBackend, select_backend};
use crate::error::{Error, Result};
use crate::surface::{Bitmap, RenderContext};
use crate::vertex::{NativeDecl, PrimType, Vertex, VertexDecl, VertexElement, compile_native_elements};
use super::config::Config;
use super::transform_guard::TransformGuard;

/// Draw call dispatcher
///
/// Owns the registered backends (at most one per [`BackendKind`]) and picks
/// one per draw call from the render context.
///
/// # Example
///
/// ```ignore
/// let mut dispatcher = PrimitiveDispatcher::new(Config::default());
/// dispatcher.register_backend(SoftwareBackend::new())?;
///
/// let mut ctx = RenderContext::new(display, Bitmap::memory(640, 480));
/// let drawn = dispatcher.draw_prim(
///     &mut ctx, Vertex::as_bytes(&vertices), None, None, 0, vertices.len(), PrimType::TriangleList,
/// )?;
/// ```
pub struct PrimitiveDispatcher {
    backends: FxHashMap<BackendKind, Box<dyn PrimitiveBackend>>,
    config: Config,
}

impl PrimitiveDispatcher {
    /// Log errors before returning them
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::BackendError(msg) => {
                crate::prim_error!("prim::Dispatcher", "Backend error: {}", msg);
            }
            _ => {
                crate::prim_error!("prim::Dispatcher", "Dispatch error: {}", error);
            }
        }
        error
    }

    /// Create a dispatcher with no backends registered
    pub fn new(config: Config) -> Self {
        Self {
            backends: FxHashMap::default(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Register a backend under its [`PrimitiveBackend::kind`]
    ///
    /// # Errors
    ///
    /// Returns an error if a backend of the same kind is already registered.
    pub fn register_backend<B: PrimitiveBackend + 'static>(&mut self, backend: B) -> Result<()> {
        let kind = backend.kind();
        if self.backends.contains_key(&kind) {
            return Err(Self::log_and_return_error(Error::InitializationFailed(format!(
                "A {} backend is already registered", kind
            ))));
        }

        self.backends.insert(kind, Box::new(backend));
        crate::prim_info!("prim::Dispatcher", "Registered {} backend", kind);
        Ok(())
    }

    /// Unregister a backend, returning it
    pub fn remove_backend(&mut self, kind: BackendKind) -> Option<Box<dyn PrimitiveBackend>> {
        self.backends.remove(&kind)
    }

    pub fn has_backend(&self, kind: BackendKind) -> bool {
        self.backends.contains_key(&kind)
    }

    pub fn backend_count(&self) -> usize {
        self.backends.len()
    }

    /// Pick the backend for a draw and make sure it is registered
    fn backend_for(
        &mut self,
        ctx: &RenderContext,
        texture: Option<&Bitmap>,
    ) -> Result<&mut Box<dyn PrimitiveBackend>> {
        let kind = select_backend(ctx.target(), texture, ctx.display().flags())
            .map_err(Self::log_and_return_error)?;

        self.backends
            .get_mut(&kind)
            .ok_or_else(|| Self::log_and_return_error(Error::BackendUnavailable(kind)))
    }

    /// Draw vertices `start..end` of `vertices`
    ///
    /// `decl` describes the vertex records; `None` means the built-in
    /// [`Vertex`] record. If the target is a sub-bitmap, the context
    /// transform is offset for the duration of the call and restored
    /// afterwards, even if the backend fails or panics.
    ///
    /// # Panics
    ///
    /// Panics if `vertices` is empty, if `end < start`, or if vertex `end`
    /// lies past the end of `vertices`.
    ///
    /// # Errors
    ///
    /// - `NoEligibleBackend` if the target is GPU-resident and the display
    ///   has no GPU capability flag
    /// - `BackendUnavailable` if the selected backend is not registered
    /// - any error reported by the backend
    #[allow(clippy::too_many_arguments)]
    pub fn draw_prim(
        &mut self,
        ctx: &mut RenderContext,
        vertices: &[u8],
        decl: Option<&VertexDecl>,
        texture: Option<&Bitmap>,
        start: usize,
        end: usize,
        prim_type: PrimType,
    ) -> Result<u32> {
        assert!(!vertices.is_empty(), "draw_prim: vertex buffer is empty");
        assert!(end >= start, "draw_prim: end ({}) < start ({})", end, start);
        let stride = record_stride(decl);
        assert!(
            end.checked_mul(stride).is_some_and(|bytes| bytes <= vertices.len()),
            "draw_prim: vertex {} is past the end of a {} byte buffer (stride {})",
            end, vertices.len(), stride
        );

        let log_draw_calls = self.config.log_draw_calls;
        let backend = self.backend_for(ctx, texture)?;
        if log_draw_calls {
            crate::prim_trace!("prim::Dispatcher", "draw_prim {:?} [{}..{}] on {} backend",
                prim_type, start, end, backend.kind());
        }

        let draw = PrimDraw { vertices, decl, texture, prim_type };
        let guard = TransformGuard::new(ctx);
        let drawn = backend.draw_prim(&guard, &draw, start, end);
        drop(guard);

        drawn.map_err(Self::log_and_return_error)
    }

    /// Draw the vertices of `vertices` selected by `indices`
    ///
    /// The vertex count is `indices.len()`. Transform handling matches
    /// [`PrimitiveDispatcher::draw_prim`].
    ///
    /// # Panics
    ///
    /// Panics if `vertices` or `indices` is empty.
    ///
    /// # Errors
    ///
    /// Same as [`PrimitiveDispatcher::draw_prim`].
    pub fn draw_indexed_prim(
        &mut self,
        ctx: &mut RenderContext,
        vertices: &[u8],
        decl: Option<&VertexDecl>,
        texture: Option<&Bitmap>,
        indices: &[i32],
        prim_type: PrimType,
    ) -> Result<u32> {
        assert!(!vertices.is_empty(), "draw_indexed_prim: vertex buffer is empty");
        assert!(!indices.is_empty(), "draw_indexed_prim: index list is empty");

        let log_draw_calls = self.config.log_draw_calls;
        let backend = self.backend_for(ctx, texture)?;
        if log_draw_calls {
            crate::prim_trace!("prim::Dispatcher", "draw_indexed_prim {:?} ({} indices) on {} backend",
                prim_type, indices.len(), backend.kind());
        }

        let draw = PrimDraw { vertices, decl, texture, prim_type };
        let guard = TransformGuard::new(ctx);
        let drawn = backend.draw_indexed_prim(&guard, &draw, indices);
        drop(guard);

        drawn.map_err(Self::log_and_return_error)
    }

    /// Build a vertex declaration for the context's display
    ///
    /// Later elements for the same attribute replace earlier ones. On a
    /// Direct3D display whose device meets
    /// [`Config::min_native_shader_version`], the native layout is compiled
    /// and attached; on a weaker device it is left unset.
    ///
    /// # Errors
    ///
    /// - `BackendUnavailable` if the display is Direct3D but no Direct3D
    ///   backend is registered
    /// - `UnsupportedStorage` if an attribute has no native type
    /// - any error reported by the backend while building the layout
    pub fn create_vertex_decl(
        &mut self,
        ctx: &RenderContext,
        elements: &[VertexElement],
        stride: u32,
    ) -> Result<VertexDecl> {
        let mut decl = VertexDecl::new(elements, stride);

        if !ctx.display().is_direct3d() {
            return Ok(decl);
        }

        let min_version = self.config.min_native_shader_version;
        let backend = self.backends
            .get_mut(&BackendKind::Direct3D)
            .ok_or_else(|| Self::log_and_return_error(Error::BackendUnavailable(BackendKind::Direct3D)))?;

        match backend.pixel_shader_version() {
            Some(version) if version >= min_version => {
                let native = compile_native_elements(&decl).map_err(Self::log_and_return_error)?;
                let layout = backend.create_vertex_layout(&native).map_err(Self::log_and_return_error)?;
                decl.set_native(NativeDecl::new(BackendKind::Direct3D, layout));
            }
            version => {
                crate::prim_debug!("prim::Dispatcher",
                    "Pixel shader version {:?} below {}, no native vertex layout", version, min_version);
            }
        }

        Ok(decl)
    }

    /// Release a vertex declaration together with its native layout
    pub fn destroy_vertex_decl(&self, decl: VertexDecl) {
        if let Some(native) = decl.native() {
            crate::prim_debug!("prim::Dispatcher", "Releasing {} native vertex layout", native.backend());
        }
        drop(decl);
    }
}

/// Byte stride of one vertex record
fn record_stride(decl: Option<&VertexDecl>) -> usize {
    match decl {
        Some(decl) => decl.stride() as usize,
        None => Vertex::STRIDE as usize,
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
