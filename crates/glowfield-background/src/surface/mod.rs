//! Drawing surfaces the background can paint onto.

mod framebuffer;
mod terminal;

use glowfield_core::{Point, Rgba, SurfaceSize};

use crate::gradient::RadialGradient;

pub use framebuffer::Framebuffer;
pub use terminal::HalfBlockView;

/// Blurred halo painted under subsequent fills until cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Blur radius in pixels.
    pub blur: f32,
    pub color: Rgba,
}

/// A 2D drawing context with the handful of operations the scene needs.
pub trait DrawContext {
    /// Current pixel dimensions.
    fn size(&self) -> SurfaceSize;

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Fill the whole surface with a radial gradient.
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient);

    /// Set or clear the shadow applied to subsequent circle fills.
    fn set_shadow(&mut self, shadow: Option<Shadow>);

    /// Fill a circle, drawing the current shadow underneath it.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);
}

/// A resizable surface that may or may not provide a 2D context.
pub trait Surface {
    type Context: DrawContext;

    fn size(&self) -> SurfaceSize;

    /// Resize the backing store; contents are discarded.
    fn resize(&mut self, size: SurfaceSize);

    /// The 2D drawing context, or `None` when the environment cannot provide one.
    fn context_2d(&mut self) -> Option<&mut Self::Context>;
}
