//! Software RGBA framebuffer.

use glowfield_core::{Point, Rgba, SurfaceSize};

use super::{DrawContext, Shadow, Surface};
use crate::gradient::RadialGradient;

/// Logistic approximation of the standard normal CDF.
const NORMAL_CDF_SCALE: f32 = 1.702;

/// Straight-alpha pixel with channels in `0.0..=255.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Pixel {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Pixel {
    /// Composite `color` over this pixel with the given source alpha.
    fn blend(&mut self, color: Rgba, alpha: f32) {
        let sa = alpha.clamp(0.0, 1.0);
        if sa <= 0.0 {
            return;
        }
        let da = self.a;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            *self = Pixel::default();
            return;
        }
        let mix = |s: u8, d: f32| (s as f32 * sa + d * da * (1.0 - sa)) / out_a;
        self.r = mix(color.r, self.r);
        self.g = mix(color.g, self.g);
        self.b = mix(color.b, self.b);
        self.a = out_a;
    }

    fn to_rgba(self) -> Rgba {
        let channel = |v: f32| v.clamp(0.0, 255.0).round() as u8;
        Rgba::new(channel(self.r), channel(self.g), channel(self.b), self.a)
    }
}

/// An in-memory surface that rasterizes the scene on the CPU.
#[derive(Debug, Clone, Default)]
pub struct Framebuffer {
    size: SurfaceSize,
    pixels: Vec<Pixel>,
    shadow: Option<Shadow>,
}

impl Framebuffer {
    /// Create a transparent framebuffer of the given size.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![Pixel::default(); size.area()],
            shadow: None,
        }
    }

    /// Color of the pixel at `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .map(|p| p.to_rgba())
    }

    /// The shadow currently applied to circle fills.
    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    /// Pixel index range covering `center ± extent` along one axis.
    fn span(center: f32, extent: f32, limit: u32) -> std::ops::Range<u32> {
        let lo = (center - extent).floor().max(0.0);
        let hi = (center + extent).ceil().min(limit as f32);
        if hi <= lo {
            return 0..0;
        }
        lo as u32..hi as u32
    }

    /// Blend `color` over every pixel near `center`, weighted by `coverage(distance)`.
    fn paint_radial(
        &mut self,
        center: Point,
        extent: f32,
        color: Rgba,
        coverage: impl Fn(f32) -> f32,
    ) {
        let width = self.size.width as usize;
        for y in Self::span(center.y, extent, self.size.height) {
            for x in Self::span(center.x, extent, self.size.width) {
                let d = center.distance(Point::new(x as f32 + 0.5, y as f32 + 0.5));
                let alpha = color.a * coverage(d);
                if alpha > 0.0 {
                    self.pixels[y as usize * width + x as usize].blend(color, alpha);
                }
            }
        }
    }

    fn paint_shadow(&mut self, center: Point, radius: f32, fill_alpha: f32, shadow: Shadow) {
        if shadow.blur <= 0.0 || shadow.color.a <= 0.0 {
            return;
        }
        let sigma = shadow.blur / 2.0;
        let color = shadow.color.with_alpha(shadow.color.a * fill_alpha);
        self.paint_radial(center, radius + 3.0 * sigma, color, |d| {
            1.0 / (1.0 + (NORMAL_CDF_SCALE * (d - radius) / sigma).exp())
        });
    }
}

impl DrawContext for Framebuffer {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.pixels.fill(Pixel::default());
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient) {
        if gradient.is_degenerate() {
            return;
        }
        let width = self.size.width as usize;
        for (i, pixel) in self.pixels.iter_mut().enumerate() {
            let point = Point::new((i % width) as f32 + 0.5, (i / width) as f32 + 0.5);
            let color = gradient.color_at_point(point);
            pixel.blend(color, color.a);
        }
    }

    fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.shadow = shadow;
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        if let Some(shadow) = self.shadow {
            self.paint_shadow(center, radius, color.a, shadow);
        }
        // one pixel of anti-aliasing at the rim
        self.paint_radial(center, radius + 1.0, color, |d| {
            (radius + 0.5 - d).clamp(0.0, 1.0)
        });
    }
}

impl Surface for Framebuffer {
    type Context = Self;

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.pixels = vec![Pixel::default(); size.area()];
        self.shadow = None;
    }

    fn context_2d(&mut self) -> Option<&mut Self> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PARTICLE_VIOLET;
    use crate::gradient::background_gradient;

    #[test]
    fn test_new_is_transparent() {
        let fb = Framebuffer::new(SurfaceSize::new(4, 3));
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(fb.pixel(x, y), Some(Rgba::TRANSPARENT));
            }
        }
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixel(0, 3), None);
    }

    #[test]
    fn test_gradient_center_and_corner() {
        let size = SurfaceSize::new(101, 101);
        let mut fb = Framebuffer::new(size);
        let gradient = background_gradient(size, 0.0);
        fb.fill_radial_gradient(&gradient);

        let center = fb.pixel(50, 50).unwrap();
        assert_eq!(center, gradient.stops[0].color);
        // corner lies beyond the outer radius
        assert_eq!(fb.pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_clear_after_paint() {
        let size = SurfaceSize::new(10, 10);
        let mut fb = Framebuffer::new(size);
        fb.fill_radial_gradient(&background_gradient(size, 1.0));
        fb.clear();
        assert_eq!(fb.pixel(5, 5), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_degenerate_gradient_paints_nothing() {
        let mut fb = Framebuffer::new(SurfaceSize::new(0, 0));
        fb.fill_radial_gradient(&background_gradient(SurfaceSize::new(0, 0), 0.0));
        fb.fill_circle(Point::new(0.0, 0.0), 2.0, PARTICLE_VIOLET);
        assert_eq!(fb.pixel(0, 0), None);
    }

    #[test]
    fn test_circle_blends_over_black() {
        let mut fb = Framebuffer::new(SurfaceSize::new(20, 20));
        fb.fill_radial_gradient(&RadialGradient {
            center: Point::new(10.0, 10.0),
            radius: 1.0,
            stops: vec![crate::gradient::ColorStop::new(0.0, Rgba::BLACK)],
        });
        fb.fill_circle(Point::new(10.5, 10.5), 3.0, PARTICLE_VIOLET.with_alpha(0.5));

        let hit = fb.pixel(10, 10).unwrap();
        assert_eq!(hit, Rgba::new(84, 43, 124, 1.0));
        assert_eq!(fb.pixel(0, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_shadow_spreads_beyond_circle() {
        let size = SurfaceSize::new(40, 40);
        let center = Point::new(20.5, 20.5);

        let mut plain = Framebuffer::new(size);
        plain.fill_circle(center, 2.0, PARTICLE_VIOLET);

        let mut glowing = Framebuffer::new(size);
        glowing.set_shadow(Some(Shadow {
            blur: 10.0,
            color: PARTICLE_VIOLET.with_alpha(0.5),
        }));
        glowing.fill_circle(center, 2.0, PARTICLE_VIOLET);

        // five pixels out: outside the disc, inside the glow
        assert_eq!(plain.pixel(25, 20).map(|p| p.a), Some(0.0));
        assert!(glowing.pixel(25, 20).unwrap().a > 0.0);
        // far corner untouched either way
        assert_eq!(glowing.pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_resize_resets_pixels_and_shadow() {
        let mut fb = Framebuffer::new(SurfaceSize::new(2, 2));
        fb.set_shadow(Some(Shadow {
            blur: 10.0,
            color: PARTICLE_VIOLET,
        }));
        Surface::resize(&mut fb, SurfaceSize::new(3, 5));
        assert_eq!(Surface::size(&fb), SurfaceSize::new(3, 5));
        assert_eq!(fb.pixel(2, 4), Some(Rgba::TRANSPARENT));
        assert!(fb.shadow().is_none());
    }
}
