//! Vector and matrix math for the 3D pipeline

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Length below which a vector is treated as zero and a homogeneous `w`
/// is treated as degenerate.
const EPSILON: f32 = 1e-3;

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// length is below the epsilon cutoff.
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l < EPSILON {
            return Vec3::ZERO;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

/// 4x4 homogeneous transform matrix, row-major.
///
/// Points are column vectors multiplied on the right: `m.transform(p)`
/// computes `m * p`. Consequently, in a product `a * b` the transform `b`
/// is applied to the point first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    /// Rotation around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut mat = Self::identity();
        mat.m[1][1] = c;
        mat.m[1][2] = -s;
        mat.m[2][1] = s;
        mat.m[2][2] = c;
        mat
    }

    /// Rotation around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut mat = Self::identity();
        mat.m[0][0] = c;
        mat.m[0][2] = s;
        mat.m[2][0] = -s;
        mat.m[2][2] = c;
        mat
    }

    /// Rotation around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut mat = Self::identity();
        mat.m[0][0] = c;
        mat.m[0][1] = -s;
        mat.m[1][0] = s;
        mat.m[1][1] = c;
        mat
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut mat = Self::identity();
        mat.m[0][3] = x;
        mat.m[1][3] = y;
        mat.m[2][3] = z;
        mat
    }

    /// OpenGL-style perspective projection. `fov` is the vertical field of
    /// view in radians; points between `near` and `far` land in the [-1, 1]
    /// NDC cube after the divide in [`Mat4::transform`].
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fov = (fov / 2.0).tan();
        let mut mat = Self { m: [[0.0; 4]; 4] };
        mat.m[0][0] = 1.0 / (aspect * tan_half_fov);
        mat.m[1][1] = 1.0 / tan_half_fov;
        mat.m[2][2] = -(far + near) / (far - near);
        mat.m[2][3] = -(2.0 * far * near) / (far - near);
        mat.m[3][2] = -1.0;
        mat
    }

    /// Transform a point, including the homogeneous divide.
    ///
    /// A `|w|` below epsilon is substituted with 1.0 instead of dividing:
    /// points exactly at the camera plane come out distorted rather than
    /// infinite. Deliberate policy, matched by the callers.
    pub fn transform(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let mut w = m[3][0] * v.x + m[3][1] * v.y + m[3][2] * v.z + m[3][3];
        if w.abs() < EPSILON {
            w = 1.0;
        }
        Vec3 {
            x: (m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z + m[0][3]) / w,
            y: (m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z + m[1][3]) / w,
            z: (m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z + m[2][3]) / w,
        }
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, other: Mat4) -> Mat4 {
        let mut result = Mat4 { m: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }
        result
    }
}
