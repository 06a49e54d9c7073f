/// Primitive topology

use crate::error::Error;

/// How a flat vertex sequence is grouped into primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimType {
    PointList,
    LineList,
    LineStrip,
    LineLoop,
    TriangleList,
    TriangleStrip,
    TriangleFan,
}

impl PrimType {
    /// Number of topology kinds
    pub const COUNT: usize = 7;

    /// Number of primitives formed by `vertex_count` vertices
    ///
    /// Incomplete trailing primitives are not counted.
    pub fn primitive_count(self, vertex_count: usize) -> usize {
        match self {
            PrimType::PointList => vertex_count,
            PrimType::LineList => vertex_count / 2,
            PrimType::LineStrip => vertex_count.saturating_sub(1),
            PrimType::LineLoop => match vertex_count {
                0 | 1 => 0,
                2 => 1,
                n => n,
            },
            PrimType::TriangleList => vertex_count / 3,
            PrimType::TriangleStrip | PrimType::TriangleFan => vertex_count.saturating_sub(2),
        }
    }
}

impl TryFrom<i32> for PrimType {
    type Error = Error;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(PrimType::PointList),
            1 => Ok(PrimType::LineList),
            2 => Ok(PrimType::LineStrip),
            3 => Ok(PrimType::LineLoop),
            4 => Ok(PrimType::TriangleList),
            5 => Ok(PrimType::TriangleStrip),
            6 => Ok(PrimType::TriangleFan),
            _ => Err(Error::InvalidPrimType(raw)),
        }
    }
}

#[cfg(test)]
#[path = "prim_type_tests.rs"]
mod tests;
