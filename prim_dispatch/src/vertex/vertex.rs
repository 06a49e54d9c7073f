/// Built-in vertex record, used when a draw call supplies no declaration

use bytemuck::{Pod, Zeroable};
use crate::color::{Color, PrimColor, color_to_prim};

/// Default vertex: position, texture coordinates in pixels, color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub u: f32,
    pub v: f32,
    pub color: PrimColor,
}

impl Vertex {
    /// Byte size of one record
    pub const STRIDE: u32 = std::mem::size_of::<Vertex>() as u32;

    pub fn new(x: f32, y: f32, u: f32, v: f32, color: Color) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            u,
            v,
            color: color_to_prim(color),
        }
    }

    /// View a vertex slice as the raw byte buffer draw calls take
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
