/// Tests for select_backend
///
/// Every combination of target residency, texture residency and display
/// flags must resolve to exactly one backend or to NoEligibleBackend.

use super::*;

const NO_FLAGS: DisplayFlags = DisplayFlags::empty();

fn all_flag_sets() -> [DisplayFlags; 4] {
    [
        NO_FLAGS,
        DisplayFlags::OPENGL,
        DisplayFlags::DIRECT3D,
        DisplayFlags::OPENGL.union(DisplayFlags::DIRECT3D),
    ]
}

// ============================================================================
// Tests: Software path
// ============================================================================

#[test]
fn test_memory_target_forces_software() {
    let target = Bitmap::memory(64, 64);
    for flags in all_flag_sets() {
        assert_eq!(select_backend(&target, None, flags), Ok(BackendKind::Software));
    }
}

#[test]
fn test_memory_texture_forces_software() {
    let target = Bitmap::video(64, 64);
    let texture = Bitmap::memory(16, 16);
    for flags in all_flag_sets() {
        assert_eq!(select_backend(&target, Some(&texture), flags), Ok(BackendKind::Software));
    }
}

#[test]
fn test_memory_sub_bitmap_target_forces_software() {
    let target = Bitmap::memory(64, 64).sub_bitmap(8, 8, 16, 16).unwrap();
    assert_eq!(
        select_backend(&target, None, DisplayFlags::OPENGL),
        Ok(BackendKind::Software)
    );
}

// ============================================================================
// Tests: GPU paths
// ============================================================================

#[test]
fn test_opengl_flag_selects_opengl() {
    let target = Bitmap::video(64, 64);
    let texture = Bitmap::video(16, 16);
    assert_eq!(select_backend(&target, None, DisplayFlags::OPENGL), Ok(BackendKind::OpenGl));
    assert_eq!(
        select_backend(&target, Some(&texture), DisplayFlags::OPENGL | DisplayFlags::WINDOWED),
        Ok(BackendKind::OpenGl)
    );
}

#[test]
fn test_direct3d_flag_selects_direct3d() {
    let target = Bitmap::video(64, 64);
    assert_eq!(select_backend(&target, None, DisplayFlags::DIRECT3D), Ok(BackendKind::Direct3D));
}

#[test]
fn test_opengl_wins_when_both_flags_set() {
    let target = Bitmap::video(64, 64);
    assert_eq!(
        select_backend(&target, None, DisplayFlags::OPENGL | DisplayFlags::DIRECT3D),
        Ok(BackendKind::OpenGl)
    );
}

#[test]
fn test_no_gpu_flag_is_no_eligible_backend() {
    let target = Bitmap::video(64, 64);
    assert_eq!(select_backend(&target, None, NO_FLAGS), Err(Error::NoEligibleBackend));
    assert_eq!(
        select_backend(&target, None, DisplayFlags::WINDOWED | DisplayFlags::FULLSCREEN),
        Err(Error::NoEligibleBackend)
    );
}
