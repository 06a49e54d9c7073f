//! Native vertex layout compilation for Direct3D-class backends.
//!
//! Translates the slot table of a [`VertexDecl`] into the flat,
//! terminator-ended element list those backends build their vertex
//! declaration objects from.

use std::fmt::Debug;
use crate::error::{Error, Result};
use super::vertex_decl::{PrimAttribute, PrimStorage, VertexDecl, VertexElement};

/// Component type of a native vertex element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeDeclType {
    Float2,
    Float3,
    Short2,
    /// 32-bit packed ARGB color
    PackedColor,
    /// Terminator type
    Unused,
}

/// Semantic usage of a native vertex element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeDeclUsage {
    Position,
    TexCoord,
    Color,
    /// Terminator usage
    None,
}

/// One native vertex element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeVertexElement {
    pub stream: u16,
    pub offset: u16,
    pub ty: NativeDeclType,
    pub usage: NativeDeclUsage,
    pub usage_index: u8,
}

impl NativeVertexElement {
    /// Stream index marking the end of an element list
    pub const END_STREAM: u16 = 0xFF;

    /// Terminator element closing every compiled list
    pub const END: NativeVertexElement = NativeVertexElement {
        stream: Self::END_STREAM,
        offset: 0,
        ty: NativeDeclType::Unused,
        usage: NativeDeclUsage::None,
        usage_index: 0,
    };

    fn new(element: &VertexElement, ty: NativeDeclType, usage: NativeDeclUsage) -> Result<Self> {
        let offset = u16::try_from(element.offset).map_err(|_| {
            Error::InvalidResource(format!(
                "{:?} offset {} does not fit a native vertex element",
                element.attribute, element.offset
            ))
        })?;

        Ok(Self {
            stream: 0,
            offset,
            ty,
            usage,
            usage_index: 0,
        })
    }

    pub fn is_end(&self) -> bool {
        self.stream == Self::END_STREAM
    }
}

/// Compiled layout handle owned by a backend
///
/// Implementations release the underlying device object in `Drop`.
pub trait NativeVertexLayout: Send + Sync + Debug {}

fn unsupported(element: &VertexElement) -> Error {
    Error::UnsupportedStorage {
        attribute: element.attribute,
        storage: element.storage,
    }
}

/// Compile the native element list for `decl`
///
/// Emits position, then texture coordinates (the pixel-space slot stands in
/// when the normalized one is absent), then color, then [`NativeVertexElement::END`].
///
/// # Errors
///
/// Returns `UnsupportedStorage` for a position or texture coordinate
/// storage that has no native type, and `InvalidResource` for an offset
/// beyond 16 bits.
pub fn compile_native_elements(decl: &VertexDecl) -> Result<Vec<NativeVertexElement>> {
    let mut native = Vec::with_capacity(PrimAttribute::COUNT);

    if let Some(e) = decl.element(PrimAttribute::Position) {
        let ty = match e.storage {
            PrimStorage::Float2 => NativeDeclType::Float2,
            PrimStorage::Float3 => NativeDeclType::Float3,
            PrimStorage::Short2 => NativeDeclType::Short2,
            _ => return Err(unsupported(e)),
        };
        native.push(NativeVertexElement::new(e, ty, NativeDeclUsage::Position)?);
    }

    let tex_coord = decl.element(PrimAttribute::TexCoord)
        .or_else(|| decl.element(PrimAttribute::TexCoordPixel));
    if let Some(e) = tex_coord {
        let ty = match e.storage {
            PrimStorage::Float2 | PrimStorage::Float3 => NativeDeclType::Float2,
            PrimStorage::Short2 => NativeDeclType::Short2,
            _ => return Err(unsupported(e)),
        };
        native.push(NativeVertexElement::new(e, ty, NativeDeclUsage::TexCoord)?);
    }

    if let Some(e) = decl.element(PrimAttribute::Color) {
        native.push(NativeVertexElement::new(e, NativeDeclType::PackedColor, NativeDeclUsage::Color)?);
    }

    native.push(NativeVertexElement::END);
    Ok(native)
}

#[cfg(test)]
#[path = "native_layout_tests.rs"]
mod tests;
