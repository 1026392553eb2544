//! Scene painting: gradient backdrop plus glowing particles.

use crate::color::{GLOW_OPACITY, PARTICLE_VIOLET};
use crate::gradient::background_gradient;
use crate::particle::ParticleField;
use crate::surface::{DrawContext, Shadow};

/// Blur radius of the glow around each particle, in pixels.
pub const GLOW_BLUR: f32 = 10.0;

/// Paints one frame of the background.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Paint `field` over the gradient for `elapsed_secs` of wall-clock time.
    pub fn render<C: DrawContext + ?Sized>(
        &self,
        ctx: &mut C,
        field: &ParticleField,
        elapsed_secs: f32,
    ) {
        ctx.clear();

        let gradient = background_gradient(ctx.size(), elapsed_secs);
        ctx.fill_radial_gradient(&gradient);

        let glow = Shadow {
            blur: GLOW_BLUR,
            color: PARTICLE_VIOLET.with_alpha(GLOW_OPACITY),
        };
        for particle in field {
            let color = PARTICLE_VIOLET.with_alpha(particle.opacity());
            ctx.fill_circle(particle.position(), particle.size(), color);

            ctx.set_shadow(Some(glow));
            ctx.fill_circle(particle.position(), particle.size(), color);
            ctx.set_shadow(None);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use glowfield_core::{Point, Rgba, SurfaceSize};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::gradient::RadialGradient;
    use crate::particle::Particle;
    use crate::surface::Surface;

    /// One recorded drawing call.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Clear,
        Gradient(RadialGradient),
        Shadow(Option<Shadow>),
        Circle {
            center: Point,
            radius: f32,
            color: Rgba,
            shadowed: bool,
        },
        Resize(SurfaceSize),
    }

    /// Surface that records calls instead of drawing.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub size: SurfaceSize,
        pub ops: Vec<Op>,
        shadow: Option<Shadow>,
    }

    impl Recorder {
        pub fn new(size: SurfaceSize) -> Self {
            Self {
                size,
                ..Default::default()
            }
        }

        pub fn gradients(&self) -> Vec<&RadialGradient> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Gradient(g) => Some(g),
                    _ => None,
                })
                .collect()
        }

        pub fn frames(&self) -> usize {
            self.ops.iter().filter(|op| **op == Op::Clear).count()
        }
    }

    impl DrawContext for Recorder {
        fn size(&self) -> SurfaceSize {
            self.size
        }

        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
            self.ops.push(Op::Gradient(gradient.clone()));
        }

        fn set_shadow(&mut self, shadow: Option<Shadow>) {
            self.shadow = shadow;
            self.ops.push(Op::Shadow(shadow));
        }

        fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
            self.ops.push(Op::Circle {
                center,
                radius,
                color,
                shadowed: self.shadow.is_some(),
            });
        }
    }

    impl Surface for Recorder {
        type Context = Self;

        fn size(&self) -> SurfaceSize {
            self.size
        }

        fn resize(&mut self, size: SurfaceSize) {
            self.size = size;
            self.ops.push(Op::Resize(size));
        }

        fn context_2d(&mut self) -> Option<&mut Self> {
            Some(self)
        }
    }

    fn one_particle() -> ParticleField {
        ParticleField::from_particles(vec![Particle::new(
            Point::new(10.0, 20.0),
            Point::new(0.1, 0.1),
            2.5,
            0.4,
        )])
    }

    #[test]
    fn test_draw_order() {
        let mut rec = Recorder::new(SurfaceSize::new(100, 50));
        SceneRenderer::new().render(&mut rec, &one_particle(), 0.0);

        let glow = Shadow {
            blur: 10.0,
            color: Rgba::new(168, 85, 247, 0.5),
        };
        let fill = Rgba::new(168, 85, 247, 0.4);
        let circle = |shadowed| Op::Circle {
            center: Point::new(10.0, 20.0),
            radius: 2.5,
            color: fill,
            shadowed,
        };
        assert_eq!(
            rec.ops,
            vec![
                Op::Clear,
                Op::Gradient(background_gradient(SurfaceSize::new(100, 50), 0.0)),
                circle(false),
                Op::Shadow(Some(glow)),
                circle(true),
                Op::Shadow(None),
            ]
        );
    }

    #[test]
    fn test_shadow_does_not_leak_between_particles() {
        let size = SurfaceSize::new(200, 100);
        let field = ParticleField::create(size, &mut StdRng::seed_from_u64(7));
        let mut rec = Recorder::new(size);
        SceneRenderer::new().render(&mut rec, &field, 2.0);

        let circles: Vec<bool> = rec
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle { shadowed, .. } => Some(*shadowed),
                _ => None,
            })
            .collect();
        assert_eq!(circles.len(), field.len() * 2);
        assert!(circles.chunks(2).all(|pair| pair == [false, true]));
        assert_eq!(rec.ops.last(), Some(&Op::Shadow(None)));
    }

    #[test]
    fn test_hue_depends_on_elapsed_time() {
        let size = SurfaceSize::new(300, 300);
        let field = one_particle();
        let mut rec = Recorder::new(size);
        let renderer = SceneRenderer::new();
        renderer.render(&mut rec, &field, 0.0);
        renderer.render(&mut rec, &field, 2.5);

        let gradients = rec.gradients();
        assert_eq!(gradients.len(), 2);
        assert_ne!(gradients[0].stops[0].color, gradients[1].stops[0].color);
        assert_ne!(gradients[0].stops[1].color, gradients[1].stops[1].color);
    }

    #[test]
    fn test_empty_surface_renders() {
        let mut fb = crate::surface::Framebuffer::new(SurfaceSize::new(0, 0));
        let field = ParticleField::create(SurfaceSize::new(0, 0), &mut StdRng::seed_from_u64(1));
        SceneRenderer::new().render(&mut fb, &field, 1.0);
        assert_eq!(fb.pixel(0, 0), None);
    }

    #[test]
    fn test_particle_brightens_framebuffer() {
        let size = SurfaceSize::new(64, 64);
        let field = ParticleField::from_particles(vec![Particle::new(
            Point::new(8.5, 8.5),
            Point::new(0.0, 0.0),
            3.0,
            0.6,
        )]);
        let mut with = crate::surface::Framebuffer::new(size);
        SceneRenderer::new().render(&mut with, &field, 0.0);
        let mut without = crate::surface::Framebuffer::new(size);
        SceneRenderer::new().render(&mut without, &ParticleField::default(), 0.0);

        let lit = with.pixel(8, 8).unwrap();
        let dark = without.pixel(8, 8).unwrap();
        assert!(lit.r > dark.r && lit.b > dark.b);
        assert!((lit.a - 1.0).abs() < 1e-5);
    }
}
