/// Display - capability flags of the active display.

use std::fmt;
use bitflags::bitflags;

bitflags! {
    /// Display capability flags
    ///
    /// Bit values match the host library so flags can be passed through
    /// unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u32 {
        const WINDOWED = 1 << 0;
        const FULLSCREEN = 1 << 1;
        const OPENGL = 1 << 2;
        const DIRECT3D = 1 << 3;
    }
}

/// Shader model version reported by a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShaderVersion {
    pub major: u8,
    pub minor: u8,
}

impl ShaderVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ShaderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The active display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display {
    flags: DisplayFlags,
}

impl Display {
    pub fn new(flags: DisplayFlags) -> Self {
        Self { flags }
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    pub fn is_opengl(&self) -> bool {
        self.flags.contains(DisplayFlags::OPENGL)
    }

    pub fn is_direct3d(&self) -> bool {
        self.flags.contains(DisplayFlags::DIRECT3D)
    }
}
