//! Color palette helpers and an owned random source
//!
//! Support code for content layers that feed triangles into the pipeline.
//! The rasterizer itself never touches randomness; anything that wants
//! random values owns a [`RandomSource`] and seeds it explicitly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Convert HSV (`h` in degrees [0, 360), `s` and `v` in [0, 1]) to packed
/// opaque ARGB.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> u32 {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (c, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, c, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, c, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, c),
        h if (240.0..300.0).contains(&h) => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let ri = ((r + m) * 255.0) as u32;
    let gi = ((g + m) * 255.0) as u32;
    let bi = ((b + m) * 255.0) as u32;
    0xFF000000 | (ri << 16) | (gi << 8) | bi
}

/// Cyclic rainbow palette: `t` sweeps the hue once per unit via three
/// phase-shifted sines.
pub fn rainbow_color(t: f32) -> u32 {
    let r = (t * 6.28).sin() * 0.5 + 0.5;
    let g = (t * 6.28 + 2.09).sin() * 0.5 + 0.5;
    let b = (t * 6.28 + 4.19).sin() * 0.5 + 0.5;

    0xFF000000 | (((r * 255.0) as u32) << 16) | (((g * 255.0) as u32) << 8) | (b * 255.0) as u32
}

/// Saturated glow color: intensity picks the hue, value is boosted 1.5x
/// and capped at full brightness.
pub fn neon_color(intensity: f32, hue_shift: f32) -> u32 {
    let hue = (intensity * 360.0 + hue_shift) % 360.0;
    hsv_to_rgb(hue, 1.0, (intensity * 1.5).min(1.0))
}

/// Per-channel linear blend of two packed colors; `t` is clamped to [0, 1].
/// Alpha comes out opaque.
pub fn blend_colors(color1: u32, color2: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);

    let r1 = ((color1 >> 16) & 0xFF) as f32;
    let g1 = ((color1 >> 8) & 0xFF) as f32;
    let b1 = (color1 & 0xFF) as f32;
    let r2 = ((color2 >> 16) & 0xFF) as f32;
    let g2 = ((color2 >> 8) & 0xFF) as f32;
    let b2 = (color2 & 0xFF) as f32;

    let r = (r1 + t * (r2 - r1)) as u32;
    let g = (g1 + t * (g2 - g1)) as u32;
    let b = (b1 + t * (b2 - b1)) as u32;

    0xFF000000 | (r << 16) | (g << 8) | b
}

/// Explicitly seeded random value source.
///
/// Owned by whichever content layer needs it; two sources with the same
/// seed produce the same sequence, which keeps procedural output
/// reproducible without any global state.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Seed from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed for reproducible sequences.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform float in `[min, max)`. `min` must not exceed `max`.
    pub fn float(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Uniform integer in `[min, max]` inclusive.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    /// Random opaque color with uniform RGB channels.
    pub fn color(&mut self) -> u32 {
        0xFF000000
            | ((self.int(0, 255) as u32) << 16)
            | ((self.int(0, 255) as u32) << 8)
            | self.int(0, 255) as u32
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
