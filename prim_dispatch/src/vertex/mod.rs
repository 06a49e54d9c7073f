//! Vertex module - topology, vertex records and vertex declarations.

mod native_layout;
mod prim_type;
mod vertex;
mod vertex_decl;

pub use native_layout::{
    NativeDeclType, NativeDeclUsage, NativeVertexElement, NativeVertexLayout,
    compile_native_elements,
};
pub use prim_type::PrimType;
pub use vertex::Vertex;
pub use vertex_decl::{NativeDecl, PrimAttribute, PrimStorage, VertexDecl, VertexElement};
