/// Mock backend for unit tests (no GPU required)
///
/// Records every call it receives, including the transform active at the
/// time, and can be told to fail or panic.

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use crate::backend::{BackendKind, PrimDraw, PrimitiveBackend};
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::surface::{RenderContext, ShaderVersion, Transform};
#[cfg(test)]
use crate::vertex::{NativeVertexElement, NativeVertexLayout};

// ============================================================================
// Recorded calls
// ============================================================================

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Draw {
        backend: BackendKind,
        start: usize,
        end: usize,
        transform: Transform,
    },
    DrawIndexed {
        backend: BackendKind,
        indices: Vec<i32>,
        transform: Transform,
    },
    CreateLayout {
        backend: BackendKind,
        elements: Vec<NativeVertexElement>,
    },
}

/// What the mock does when asked to draw
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Report primitive counts from the topology
    Succeed,
    /// Return a BackendError
    Fail,
    /// Panic inside the backend
    Panic,
}

// ============================================================================
// Mock layout
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockVertexLayout {
    pub elements: Vec<NativeVertexElement>,
    released: Arc<AtomicUsize>,
}

#[cfg(test)]
impl NativeVertexLayout for MockVertexLayout {}

#[cfg(test)]
impl Drop for MockVertexLayout {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Mock backend
// ============================================================================

#[cfg(test)]
pub struct MockBackend {
    kind: BackendKind,
    behavior: MockBehavior,
    shader_version: Option<ShaderVersion>,
    calls: Arc<Mutex<Vec<MockCall>>>,
    released_layouts: Arc<AtomicUsize>,
}

#[cfg(test)]
impl MockBackend {
    pub fn new(kind: BackendKind, calls: Arc<Mutex<Vec<MockCall>>>) -> Self {
        Self {
            kind,
            behavior: MockBehavior::Succeed,
            shader_version: None,
            calls,
            released_layouts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_behavior(mut self, behavior: MockBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_shader_version(mut self, version: ShaderVersion) -> Self {
        self.shader_version = Some(version);
        self
    }

    /// Counter incremented each time a layout from this backend is dropped
    pub fn released_layouts(&self) -> Arc<AtomicUsize> {
        self.released_layouts.clone()
    }

    fn respond(&self, vertex_count: usize, draw: &PrimDraw<'_>) -> Result<u32> {
        match self.behavior {
            MockBehavior::Succeed => Ok(draw.prim_type.primitive_count(vertex_count) as u32),
            MockBehavior::Fail => Err(Error::BackendError(format!("{} mock failure", self.kind))),
            MockBehavior::Panic => panic!("{} mock panic", self.kind),
        }
    }
}

#[cfg(test)]
impl PrimitiveBackend for MockBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn draw_prim(
        &mut self,
        ctx: &RenderContext,
        draw: &PrimDraw<'_>,
        start: usize,
        end: usize,
    ) -> Result<u32> {
        self.calls.lock().unwrap().push(MockCall::Draw {
            backend: self.kind,
            start,
            end,
            transform: *ctx.transform(),
        });
        self.respond(end - start, draw)
    }

    fn draw_indexed_prim(
        &mut self,
        ctx: &RenderContext,
        draw: &PrimDraw<'_>,
        indices: &[i32],
    ) -> Result<u32> {
        self.calls.lock().unwrap().push(MockCall::DrawIndexed {
            backend: self.kind,
            indices: indices.to_vec(),
            transform: *ctx.transform(),
        });
        self.respond(indices.len(), draw)
    }

    fn pixel_shader_version(&self) -> Option<ShaderVersion> {
        self.shader_version
    }

    fn create_vertex_layout(
        &mut self,
        elements: &[NativeVertexElement],
    ) -> Result<Box<dyn NativeVertexLayout>> {
        self.calls.lock().unwrap().push(MockCall::CreateLayout {
            backend: self.kind,
            elements: elements.to_vec(),
        });
        Ok(Box::new(MockVertexLayout {
            elements: elements.to_vec(),
            released: self.released_layouts.clone(),
        }))
    }
}
