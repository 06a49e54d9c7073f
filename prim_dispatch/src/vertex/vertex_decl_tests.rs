/// Tests for VertexDecl
///
/// These tests validate slot table construction, duplicate handling and the
/// built-in layout.

use super::*;

fn position_color_elements() -> Vec<VertexElement> {
    vec![
        VertexElement::new(PrimAttribute::Position, PrimStorage::Float2, 0),
        VertexElement::new(PrimAttribute::Color, PrimStorage::PackedColor, 8),
    ]
}

// ============================================================================
// Tests: Construction
// ============================================================================

#[test]
fn test_new_fills_present_slots() {
    let decl = VertexDecl::new(&position_color_elements(), 12);

    assert_eq!(decl.stride(), 12);
    assert_eq!(
        decl.element(PrimAttribute::Position),
        Some(&VertexElement::new(PrimAttribute::Position, PrimStorage::Float2, 0))
    );
    assert_eq!(decl.element(PrimAttribute::Color).map(|e| e.offset), Some(8));
    assert!(!decl.has_native());
    assert!(decl.native().is_none());
}

#[test]
fn test_absent_slots_are_none() {
    let decl = VertexDecl::new(&position_color_elements(), 12);

    assert!(decl.element(PrimAttribute::TexCoord).is_none());
    assert!(decl.element(PrimAttribute::TexCoordPixel).is_none());
    assert_eq!(decl.elements().count(), 2);
}

#[test]
fn test_empty_element_list() {
    let decl = VertexDecl::new(&[], 0);
    assert_eq!(decl.elements().count(), 0);
}

#[test]
fn test_later_duplicate_wins() {
    let decl = VertexDecl::new(
        &[
            VertexElement::new(PrimAttribute::Position, PrimStorage::Float2, 0),
            VertexElement::new(PrimAttribute::Color, PrimStorage::Float4, 8),
            VertexElement::new(PrimAttribute::Position, PrimStorage::Float3, 28),
        ],
        40,
    );

    let position = decl.element(PrimAttribute::Position).unwrap();
    assert_eq!(position.storage, PrimStorage::Float3);
    assert_eq!(position.offset, 28);
    assert_eq!(decl.elements().count(), 2);
}

#[test]
fn test_elements_iterate_in_slot_order() {
    let decl = VertexDecl::new(
        &[
            VertexElement::new(PrimAttribute::TexCoordPixel, PrimStorage::Float2, 8),
            VertexElement::new(PrimAttribute::Position, PrimStorage::Float2, 0),
        ],
        16,
    );

    let order: Vec<PrimAttribute> = decl.elements().map(|e| e.attribute).collect();
    assert_eq!(order, vec![PrimAttribute::Position, PrimAttribute::TexCoordPixel]);
}

// ============================================================================
// Tests: Built-in layout
// ============================================================================

#[test]
fn test_default_layout_matches_vertex() {
    let decl = VertexDecl::default_layout();
    assert_eq!(decl.stride(), Vertex::STRIDE);
    assert_eq!(Vertex::STRIDE, 40);

    let color = decl.element(PrimAttribute::Color).unwrap();
    assert_eq!(color.offset + color.size_bytes(), Vertex::STRIDE);
    assert_eq!(decl.element(PrimAttribute::TexCoordPixel).unwrap().offset, 12);
}

// ============================================================================
// Tests: Sizes and slots
// ============================================================================

#[test]
fn test_storage_sizes() {
    assert_eq!(PrimStorage::Float1.size_bytes(), 4);
    assert_eq!(PrimStorage::Float2.size_bytes(), 8);
    assert_eq!(PrimStorage::Float3.size_bytes(), 12);
    assert_eq!(PrimStorage::Float4.size_bytes(), 16);
    assert_eq!(PrimStorage::Short2.size_bytes(), 4);
    assert_eq!(PrimStorage::Short4.size_bytes(), 8);
    assert_eq!(PrimStorage::UByte4.size_bytes(), 4);
    assert_eq!(PrimStorage::PackedColor.size_bytes(), 4);
}

#[test]
fn test_attribute_indices_are_distinct() {
    let mut seen = [false; PrimAttribute::COUNT];
    for attribute in PrimAttribute::ALL {
        assert!(!seen[attribute.index()]);
        seen[attribute.index()] = true;
    }
}
