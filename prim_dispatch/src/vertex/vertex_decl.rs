/// Vertex declaration - layout of caller-defined vertex records.

use std::fmt;
use crate::backend::BackendKind;
use super::native_layout::NativeVertexLayout;
use super::vertex::Vertex;

/// Semantic attribute slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimAttribute {
    /// Vertex position
    Position,
    /// Vertex color
    Color,
    /// Texture coordinates, normalized to [0, 1]
    TexCoord,
    /// Texture coordinates in texture pixels
    TexCoordPixel,
}

impl PrimAttribute {
    /// Number of attribute slots
    pub const COUNT: usize = 4;

    pub const ALL: [PrimAttribute; Self::COUNT] = [
        PrimAttribute::Position,
        PrimAttribute::Color,
        PrimAttribute::TexCoord,
        PrimAttribute::TexCoordPixel,
    ];

    /// Table index of this slot
    pub fn index(self) -> usize {
        match self {
            PrimAttribute::Position => 0,
            PrimAttribute::Color => 1,
            PrimAttribute::TexCoord => 2,
            PrimAttribute::TexCoordPixel => 3,
        }
    }
}

/// Storage format of one attribute inside a vertex record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimStorage {
    Float1,
    Float2,
    Float3,
    Float4,
    Short2,
    Short4,
    UByte4,
    NormalizedUByte4,
    /// 32-bit ARGB, see [`PackedColor`](crate::color::PackedColor)
    PackedColor,
}

impl PrimStorage {
    /// Returns size in bytes for this storage
    pub fn size_bytes(&self) -> u32 {
        match self {
            PrimStorage::Float1 => 4,
            PrimStorage::Float2 => 8,
            PrimStorage::Float3 => 12,
            PrimStorage::Float4 => 16,
            PrimStorage::Short2 => 4,
            PrimStorage::Short4 => 8,
            PrimStorage::UByte4 | PrimStorage::NormalizedUByte4 | PrimStorage::PackedColor => 4,
        }
    }
}

/// One entry of an attribute list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexElement {
    pub attribute: PrimAttribute,
    pub storage: PrimStorage,
    /// Byte offset inside the vertex record
    pub offset: u32,
}

impl VertexElement {
    pub fn new(attribute: PrimAttribute, storage: PrimStorage, offset: u32) -> Self {
        Self { attribute, storage, offset }
    }

    /// Bytes this element occupies in a record
    pub fn size_bytes(&self) -> u32 {
        self.storage.size_bytes()
    }
}

/// Backend-native compiled form of a declaration, tagged with its backend
///
/// The layout handle is released when this value is dropped.
#[derive(Debug)]
pub struct NativeDecl {
    backend: BackendKind,
    layout: Box<dyn NativeVertexLayout>,
}

impl NativeDecl {
    pub fn new(backend: BackendKind, layout: Box<dyn NativeVertexLayout>) -> Self {
        Self { backend, layout }
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    pub fn layout(&self) -> &dyn NativeVertexLayout {
        self.layout.as_ref()
    }
}

/// Layout of a caller-defined vertex record
///
/// Holds at most one element per attribute slot. Absent slots are ignored
/// by every backend. Backends that need a compiled layout find it in
/// [`VertexDecl::native`].
pub struct VertexDecl {
    elements: [Option<VertexElement>; PrimAttribute::COUNT],
    stride: u32,
    native: Option<NativeDecl>,
}

impl VertexDecl {
    /// Build a backend-agnostic declaration
    ///
    /// Elements are applied in order; a later element for the same slot
    /// replaces the earlier one.
    pub fn new(elements: &[VertexElement], stride: u32) -> Self {
        let mut table = [None; PrimAttribute::COUNT];
        for element in elements {
            table[element.attribute.index()] = Some(*element);
        }

        Self {
            elements: table,
            stride,
            native: None,
        }
    }

    /// Declaration describing the built-in [`Vertex`] record
    ///
    /// The color element points at the packed field of the vertex's
    /// `PrimColor`, the one Direct3D-class backends read.
    pub fn default_layout() -> Self {
        Self::new(
            &[
                VertexElement::new(PrimAttribute::Position, PrimStorage::Float3, 0),
                VertexElement::new(PrimAttribute::TexCoordPixel, PrimStorage::Float2, 12),
                VertexElement::new(PrimAttribute::Color, PrimStorage::PackedColor, 36),
            ],
            Vertex::STRIDE,
        )
    }

    /// Element bound to `attribute`, if any
    pub fn element(&self, attribute: PrimAttribute) -> Option<&VertexElement> {
        self.elements[attribute.index()].as_ref()
    }

    /// Iterate over present elements in slot order
    pub fn elements(&self) -> impl Iterator<Item = &VertexElement> {
        self.elements.iter().flatten()
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn native(&self) -> Option<&NativeDecl> {
        self.native.as_ref()
    }

    pub fn has_native(&self) -> bool {
        self.native.is_some()
    }

    pub(crate) fn set_native(&mut self, native: NativeDecl) {
        self.native = Some(native);
    }
}

impl fmt::Debug for VertexDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VertexDecl")
            .field("elements", &self.elements)
            .field("stride", &self.stride)
            .field("native", &self.native.as_ref().map(|n| n.backend()))
            .finish()
    }
}

#[cfg(test)]
#[path = "vertex_decl_tests.rs"]
mod tests;
