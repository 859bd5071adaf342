//! Core types: colors and color-carrying triangles

use crate::math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Floating-point RGBA color, channels in [0, 1].
///
/// Pixels are stored as packed ARGB (`0xAARRGGBB`); this form only exists
/// for interpolation arithmetic. Conversion back to 8-bit truncates, it
/// does not round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAARRGGBB` value into float channels.
    pub fn from_argb(argb: u32) -> Self {
        Self {
            a: ((argb >> 24) & 0xFF) as f32 / 255.0,
            r: ((argb >> 16) & 0xFF) as f32 / 255.0,
            g: ((argb >> 8) & 0xFF) as f32 / 255.0,
            b: (argb & 0xFF) as f32 / 255.0,
        }
    }

    /// Pack into `0xAARRGGBB`, truncating each channel to 8 bits.
    pub fn to_argb(self) -> u32 {
        let a = (self.a * 255.0) as u8;
        let r = (self.r * 255.0) as u8;
        let g = (self.g * 255.0) as u8;
        let b = (self.b * 255.0) as u8;
        ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + t * (other.r - self.r),
            g: self.g + t * (other.g - self.g),
            b: self.b + t * (other.b - self.b),
            a: self.a + t * (other.a - self.a),
        }
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        Color {
            r: self.r + other.r,
            g: self.g + other.g,
            b: self.b + other.b,
            a: self.a + other.a,
        }
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Color {
        Color {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
            a: self.a * s,
        }
    }
}

/// A triangle with one packed ARGB color per vertex.
///
/// Value type: transforms return a new triangle, nothing mutates. A "base"
/// triangle can safely be re-transformed every frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle3D {
    pub vertices: [Vec3; 3],
    pub colors: [u32; 3],
}

impl Triangle3D {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, c0: u32, c1: u32, c2: u32) -> Self {
        Self {
            vertices: [v0, v1, v2],
            colors: [c0, c1, c2],
        }
    }

    /// Face normal from the winding order. Callers cull on `normal().z > 0`
    /// before rendering; skipping that check renders double-sided.
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(edge2).normalize()
    }

    /// Map every vertex through `matrix`; colors pass through unchanged.
    pub fn transform(&self, matrix: &Mat4) -> Triangle3D {
        Triangle3D {
            vertices: [
                matrix.transform(self.vertices[0]),
                matrix.transform(self.vertices[1]),
                matrix.transform(self.vertices[2]),
            ],
            colors: self.colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_argb_round_trip() {
        for argb in [0xFF000000u32, 0xFFFF0000, 0x80402010, 0x00000000, 0xFFFFFFFF, 0x7F123456] {
            assert_eq!(Color::from_argb(argb).to_argb(), argb, "{argb:08X}");
        }
    }

    #[test]
    fn test_color_round_trip_every_channel_value() {
        for n in 0..=255u32 {
            let argb = 0xFF000000 | (n << 16) | (n << 8) | n;
            assert_eq!(Color::from_argb(argb).to_argb(), argb, "channel {n}");
        }
    }

    #[test]
    fn test_color_weighted_sum() {
        let red = Color::from_argb(0xFFFF0000);
        let green = Color::from_argb(0xFF00FF00);
        let mixed = red * 0.5 + green * 0.5;
        assert!((mixed.r - 0.5).abs() < 0.01);
        assert!((mixed.g - 0.5).abs() < 0.01);
        assert!(mixed.b.abs() < 0.01);
    }

    #[test]
    fn test_color_lerp_endpoints() {
        let a = Color::from_argb(0xFF102030);
        let b = Color::from_argb(0xFFF0E0D0);
        assert_eq!(a.lerp(b, 0.0).to_argb(), 0xFF102030);
        assert_eq!(a.lerp(b, 1.0).to_argb(), 0xFFF0E0D0);
    }

    #[test]
    fn test_normal_follows_winding() {
        // Counter-clockwise in the XY plane points along +Z
        let tri = Triangle3D::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            0xFFFFFFFF,
            0xFFFFFFFF,
            0xFFFFFFFF,
        );
        let n = tri.normal();
        assert!((n.z - 1.0).abs() < 1e-4);

        // Flipping the winding flips the normal
        let flipped = Triangle3D::new(
            tri.vertices[0],
            tri.vertices[2],
            tri.vertices[1],
            0xFFFFFFFF,
            0xFFFFFFFF,
            0xFFFFFFFF,
        );
        assert!((flipped.normal().z + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_keeps_colors() {
        let tri = Triangle3D::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            0xFFFF0000,
            0xFF00FF00,
            0xFF0000FF,
        );
        let moved = tri.transform(&Mat4::translation(10.0, 0.0, -5.0));
        assert_eq!(moved.colors, tri.colors);
        assert!((moved.vertices[0].x - 10.0).abs() < 1e-4);
        assert!((moved.vertices[0].z + 5.0).abs() < 1e-4);
        // The original is untouched
        assert!((tri.vertices[0].x).abs() < 1e-4);
    }
}
