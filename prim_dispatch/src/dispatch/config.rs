/// Dispatcher configuration

use crate::surface::ShaderVersion;

/// Dispatcher configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Emit a TRACE log line for every draw call
    pub log_draw_calls: bool,
    /// Minimum pixel shader version for compiling native vertex layouts
    pub min_native_shader_version: ShaderVersion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_draw_calls: cfg!(debug_assertions),
            min_native_shader_version: ShaderVersion::new(3, 0),
        }
    }
}
