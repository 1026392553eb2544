//! Animated particle background for glowfield.
//!
//! A fixed set of slowly drifting particles is painted with a violet glow on
//! top of a radial gradient whose hues oscillate with wall-clock time. The
//! [`AnimationDriver`] owns the drawing surface and the particle field and
//! repaints once per scheduled frame until it is stopped.

mod color;
mod driver;
mod gradient;
mod particle;
mod render;
mod schedule;
mod surface;

pub use color::{GLOW_OPACITY, PARTICLE_VIOLET, hsla, lerp};
pub use driver::AnimationDriver;
pub use gradient::{ColorStop, RadialGradient, background_gradient};
pub use particle::{PARTICLE_COUNT, Particle, ParticleField, wrap_coord};
pub use render::{GLOW_BLUR, SceneRenderer};
pub use schedule::{CancelToken, FrameSchedule, FrameTicket};
pub use surface::{DrawContext, Framebuffer, HalfBlockView, Shadow, Surface};
