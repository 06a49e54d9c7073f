//! Unit tests for prim_type.rs

use super::*;

#[test]
fn test_try_from_valid_range() {
    let expected = [
        PrimType::PointList,
        PrimType::LineList,
        PrimType::LineStrip,
        PrimType::LineLoop,
        PrimType::TriangleList,
        PrimType::TriangleStrip,
        PrimType::TriangleFan,
    ];
    assert_eq!(expected.len(), PrimType::COUNT);
    for (raw, prim_type) in expected.iter().enumerate() {
        assert_eq!(PrimType::try_from(raw as i32), Ok(*prim_type));
    }
}

#[test]
fn test_try_from_out_of_range() {
    assert_eq!(PrimType::try_from(-1), Err(Error::InvalidPrimType(-1)));
    assert_eq!(PrimType::try_from(7), Err(Error::InvalidPrimType(7)));
}

#[test]
fn test_primitive_counts() {
    assert_eq!(PrimType::PointList.primitive_count(5), 5);
    assert_eq!(PrimType::LineList.primitive_count(5), 2);
    assert_eq!(PrimType::LineStrip.primitive_count(5), 4);
    assert_eq!(PrimType::LineLoop.primitive_count(5), 5);
    assert_eq!(PrimType::LineLoop.primitive_count(2), 1);
    assert_eq!(PrimType::TriangleList.primitive_count(7), 2);
    assert_eq!(PrimType::TriangleStrip.primitive_count(5), 3);
    assert_eq!(PrimType::TriangleFan.primitive_count(5), 3);
}

#[test]
fn test_primitive_counts_degenerate() {
    assert_eq!(PrimType::LineStrip.primitive_count(0), 0);
    assert_eq!(PrimType::LineLoop.primitive_count(1), 0);
    assert_eq!(PrimType::TriangleStrip.primitive_count(2), 0);
    assert_eq!(PrimType::TriangleFan.primitive_count(1), 0);
}
