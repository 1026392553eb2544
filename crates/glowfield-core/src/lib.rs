//! Core types shared by the glowfield crates.

use ratatui::style::Color;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Construct a new [`SurfaceSize`].
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Viewport covered by a terminal of `cols` x `rows` cells.
    ///
    /// Each cell holds two vertically stacked pixels.
    pub const fn from_terminal(cols: u16, rows: u16) -> Self {
        Self {
            width: cols as u32,
            height: rows as u32 * 2,
        }
    }

    /// Width as a float, for geometry.
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Height as a float, for geometry.
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }

    /// Centre point of the surface.
    pub fn center(&self) -> Point {
        Point::new(self.width_f32() / 2.0, self.height_f32() / 2.0)
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A point in surface space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An 8-bit RGB color with a floating-point alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl From<Rgba> for Color {
    /// Terminal cells have no alpha; the color is premultiplied over black.
    fn from(c: Rgba) -> Self {
        let a = c.a.clamp(0.0, 1.0);
        Color::Rgb(
            (c.r as f32 * a).round() as u8,
            (c.g as f32 * a).round() as u8,
            (c.b as f32 * a).round() as u8,
        )
    }
}
