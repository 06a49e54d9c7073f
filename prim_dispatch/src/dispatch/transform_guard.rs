/// Sub-bitmap transform adjustment.
///
/// While a guard is alive the context's transform is translated by the
/// target's sub-bitmap offset. Dropping the guard (normal return, `?`, or
/// unwinding) puts back the exact transform that was active before.

use std::ops::Deref;
use crate::surface::{RenderContext, Transform};

pub struct TransformGuard<'a> {
    ctx: &'a mut RenderContext,
    saved: Option<Transform>,
}

impl<'a> TransformGuard<'a> {
    /// Translate by the target offset if the target is a sub-bitmap
    pub fn new(ctx: &'a mut RenderContext) -> Self {
        let saved = if ctx.target().is_sub_bitmap() {
            let original = *ctx.transform();
            let (x, y) = ctx.target().offset();
            let mut adjusted = original;
            adjusted.translate(x as f32, y as f32);
            ctx.use_transform(adjusted);
            Some(original)
        } else {
            None
        };

        Self { ctx, saved }
    }

    /// Whether a translation is currently applied
    pub fn is_adjusted(&self) -> bool {
        self.saved.is_some()
    }
}

impl Deref for TransformGuard<'_> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        &*self.ctx
    }
}

impl Drop for TransformGuard<'_> {
    fn drop(&mut self) {
        if let Some(original) = self.saved.take() {
            self.ctx.use_transform(original);
        }
    }
}

#[cfg(test)]
#[path = "transform_guard_tests.rs"]
mod tests;
