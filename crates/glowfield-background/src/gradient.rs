//! Time-varying radial gradient painted behind the particles.

use glowfield_core::{Point, Rgba, SurfaceSize};

use crate::color::{hsla, lerp};

/// A color at a fractional offset along a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Offset in `0.0..=1.0`.
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// A radial gradient starting at `center` with radius zero and ending at `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f32,
    /// Stops sorted by offset.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// True when the gradient paints nothing (zero radius or no stops).
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0 || self.stops.is_empty()
    }

    /// Color at offset `t`, clamped to the first and last stop.
    pub fn color_at(&self, t: f32) -> Rgba {
        let Some(first) = self.stops.first() else {
            return Rgba::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                if span <= 0.0 {
                    return hi.color;
                }
                return lerp(lo.color, hi.color, (t - lo.offset) / span);
            }
        }
        self.stops[self.stops.len() - 1].color
    }

    /// Color painted at `point`.
    pub fn color_at_point(&self, point: Point) -> Rgba {
        self.color_at(self.center.distance(point) / self.radius)
    }
}

/// Build the background gradient for a surface at `elapsed_secs` of wall-clock time.
///
/// The inner and middle stops drift in hue; the outer stop is opaque black.
pub fn background_gradient(size: SurfaceSize, elapsed_secs: f32) -> RadialGradient {
    let t = elapsed_secs;
    let inner = hsla(260.0 + 10.0 * t.sin(), 0.70, 0.25, 1.0);
    let middle = hsla(280.0 + 15.0 * (0.7 * t).cos(), 0.60, 0.15, 1.0);

    RadialGradient {
        center: size.center(),
        radius: size.width.max(size.height) as f32 / 2.0,
        stops: vec![
            ColorStop::new(0.0, inner),
            ColorStop::new(0.6, middle),
            ColorStop::new(1.0, Rgba::BLACK),
        ],
    }
}
