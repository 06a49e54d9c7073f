/// Bitmap - the value model of a host render target or texture.
///
/// Only the properties the dispatcher decides on are modeled: size,
/// residency flags, the sub-bitmap offset, and the locked rectangle.
/// Pixel storage belongs to the host.

use bitflags::bitflags;
use crate::error::{Error, Result};
use crate::prim_bail;

bitflags! {
    /// Bitmap creation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BitmapFlags: u32 {
        /// Pixels live in system memory; GPU backends cannot touch them
        const MEMORY_BITMAP = 0x0001;
        /// Pixels live in video memory
        const VIDEO_BITMAP = 0x0400;
    }
}

/// Rectangle in bitmap pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Strictly positive overlap on both axes
    ///
    /// Empty or negative-sized regions never overlap anything.
    pub fn overlaps(&self, other: &Region) -> bool {
        axis_overlap(self.x, self.width, other.x, other.width) > 0
            && axis_overlap(self.y, self.height, other.y, other.height) > 0
    }
}

/// Length of the intersection of two spans, in i64 so no sum can overflow
fn axis_overlap(a_start: i32, a_len: i32, b_start: i32, b_len: i32) -> i64 {
    let a_end = a_start as i64 + a_len as i64;
    let b_end = b_start as i64 + b_len as i64;
    a_end.min(b_end) - (a_start as i64).max(b_start as i64)
}

/// Render target or texture as seen by the dispatcher
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: i32,
    height: i32,
    flags: BitmapFlags,
    /// Offset into the root surface, `Some` only for sub-bitmaps
    parent_offset: Option<(i32, i32)>,
    lock: Option<Region>,
}

impl Bitmap {
    /// Create a standalone bitmap
    pub fn new(width: i32, height: i32, flags: BitmapFlags) -> Self {
        Self {
            width,
            height,
            flags,
            parent_offset: None,
            lock: None,
        }
    }

    /// Create a memory-backed bitmap
    pub fn memory(width: i32, height: i32) -> Self {
        Self::new(width, height, BitmapFlags::MEMORY_BITMAP)
    }

    /// Create a video (GPU-resident) bitmap
    pub fn video(width: i32, height: i32) -> Self {
        Self::new(width, height, BitmapFlags::VIDEO_BITMAP)
    }

    /// Create a sub-bitmap view into `self`
    ///
    /// The view shares residency with its parent. Offsets of nested
    /// sub-bitmaps accumulate so the result is always relative to the root.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is negative or the accumulated offset
    /// does not fit in an `i32`.
    pub fn sub_bitmap(&self, x: i32, y: i32, width: i32, height: i32) -> Result<Bitmap> {
        if width < 0 || height < 0 {
            prim_bail!("prim::Bitmap", "Sub-bitmap size {}x{} is negative", width, height);
        }

        let (parent_x, parent_y) = self.parent_offset.unwrap_or((0, 0));
        let (Some(root_x), Some(root_y)) = (parent_x.checked_add(x), parent_y.checked_add(y)) else {
            prim_bail!("prim::Bitmap", "Sub-bitmap offset ({}, {}) overflows its root surface", x, y);
        };
        Ok(Bitmap {
            width,
            height,
            flags: self.flags,
            parent_offset: Some((root_x, root_y)),
            lock: None,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn flags(&self) -> BitmapFlags {
        self.flags
    }

    /// Whether the pixels live in system memory
    pub fn is_memory(&self) -> bool {
        self.flags.contains(BitmapFlags::MEMORY_BITMAP)
    }

    /// Whether this bitmap is a view into a larger surface
    pub fn is_sub_bitmap(&self) -> bool {
        self.parent_offset.is_some()
    }

    /// Offset of this view within its root surface ((0, 0) for roots)
    pub fn offset(&self) -> (i32, i32) {
        self.parent_offset.unwrap_or((0, 0))
    }

    /// Lock a region of the bitmap
    ///
    /// # Errors
    ///
    /// Returns an error if the bitmap is already locked or the region does
    /// not fit inside the bitmap.
    pub fn lock_region(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        if self.lock.is_some() {
            return Err(Error::InvalidResource("Bitmap is already locked".to_string()));
        }
        if x < 0 || y < 0 || width < 0 || height < 0
            || x as i64 + width as i64 > self.width as i64
            || y as i64 + height as i64 > self.height as i64
        {
            return Err(Error::InvalidResource(format!(
                "Lock region ({}, {}, {}x{}) exceeds bitmap {}x{}",
                x, y, width, height, self.width, self.height
            )));
        }

        self.lock = Some(Region::new(x, y, width, height));
        Ok(())
    }

    /// Release the lock; no-op if the bitmap is not locked
    pub fn unlock(&mut self) {
        self.lock = None;
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn locked_region(&self) -> Option<Region> {
        self.lock
    }

    /// Whether the given region intersects the currently locked region
    ///
    /// Always false while the bitmap is unlocked.
    pub fn region_is_locked(&self, x: i32, y: i32, width: i32, height: i32) -> bool {
        match &self.lock {
            Some(locked) => Region::new(x, y, width, height).overlaps(locked),
            None => false,
        }
    }
}

/// Free-function form of [`Bitmap::region_is_locked`] used by backends
pub fn is_region_locked(bitmap: &Bitmap, x: i32, y: i32, width: i32, height: i32) -> bool {
    bitmap.region_is_locked(x, y, width, height)
}

#[cfg(test)]
#[path = "bitmap_tests.rs"]
mod tests;
