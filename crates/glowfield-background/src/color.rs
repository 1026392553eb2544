//! Color utility functions for the background.

use glowfield_core::Rgba;

/// Fill color of every particle (violet, `#a855f7`).
pub const PARTICLE_VIOLET: Rgba = Rgba::opaque(168, 85, 247);

/// Opacity of the glow drawn around each particle.
pub const GLOW_OPACITY: f32 = 0.5;

/// Convert HSLA to an RGBA color.
///
/// `h` is in degrees and may lie outside `0..360`; `s`, `l` and `a` are
/// fractions in `0.0..=1.0`.
pub fn hsla(h: f32, s: f32, l: f32, a: f32) -> Rgba {
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = to_channel(l);
        return Rgba::new(v, v, v, a.clamp(0.0, 1.0));
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h.rem_euclid(360.0) / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Rgba::new(to_channel(r), to_channel(g), to_channel(b), a.clamp(0.0, 1.0))
}

/// Linear interpolation between two colors, alpha included.
pub fn lerp(from: Rgba, to: Rgba, t: f32) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgba::new(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
        from.a + (to.a - from.a) * t,
    )
}

fn to_channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsla_primaries() {
        assert_eq!(hsla(0.0, 1.0, 0.5, 1.0), Rgba::opaque(255, 0, 0));
        assert_eq!(hsla(120.0, 1.0, 0.5, 1.0), Rgba::opaque(0, 255, 0));
        assert_eq!(hsla(240.0, 1.0, 0.5, 1.0), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn test_hsla_black_and_grey() {
        assert_eq!(hsla(0.0, 0.0, 0.0, 1.0), Rgba::BLACK);
        assert_eq!(hsla(300.0, 0.0, 0.5, 0.5), Rgba::new(128, 128, 128, 0.5));
    }

    #[test]
    fn test_hsla_deep_violet() {
        assert_eq!(hsla(260.0, 0.7, 0.25, 1.0), Rgba::opaque(49, 19, 108));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsla(360.0 + 260.0, 0.7, 0.25, 1.0), hsla(260.0, 0.7, 0.25, 1.0));
        assert_eq!(hsla(-100.0, 0.7, 0.25, 1.0), hsla(260.0, 0.7, 0.25, 1.0));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::opaque(0, 0, 0);
        let b = Rgba::new(200, 100, 50, 0.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Rgba::new(100, 50, 25, 0.5));
    }
}
