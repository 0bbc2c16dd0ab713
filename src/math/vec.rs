use std::ops::{Add, Mul, Sub};

/*
Requirements for memory compatibility with host GPU buffers:
   1. Standard layout (like C structs).
   2. Alignment that matches shader-side expectations.
   3. Sized correctly for GPU buffers.
   4. Can be safely cast to [f32; 3] or bytes.
*/

/// A 3-component vector used for world positions and directions.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3([f32; 3]);

impl Vec3 {
    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3([x, y, z])
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Vec3([0.0, 0.0, 0.0])
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        Vec3([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }

    /// Euclidean length of the vector.
    pub fn length(&self) -> f32 {
        (self.x().powi(2) + self.y().powi(2) + self.z().powi(2)).sqrt()
    }

    /// Returns a unit-length copy, or the zero vector if the length is zero.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return Self::zero();
        }

        Self([self.x() / length, self.y() / length, self.z() / length])
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    /// Copy of this vector with the y component replaced.
    pub fn with_y(&self, y: f32) -> Self {
        Vec3([self.x(), y, self.z()])
    }

    /// Borrow the raw component array.
    pub fn as_array(&self) -> &[f32; 3] {
        &self.0
    }
    /// The x component.
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    /// The y component.
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    /// The z component.
    pub fn z(&self) -> f32 {
        self.0[2]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(values: [f32; 3]) -> Self {
        Vec3(values)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(vec: Vec3) -> Self {
        vec.0
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self([
            self.x() + other.x(),
            self.y() + other.y(),
            self.z() + other.z(),
        ])
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self([
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        ])
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self([self.x() * scalar, self.y() * scalar, self.z() * scalar])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_length() {
        assert_eq!(Vec3::zero().normalize(), Vec3::zero());
    }

    #[test]
    fn test_cross_with_up() {
        // Looking down -z in a y-up world, right is +x.
        let forward = Vec3::new(0.0, 0.0, -1.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        let right = forward.cross(&up);
        assert_eq!(right, Vec3::new(1.0, 0.0, 0.0));
        // Right is perpendicular to both inputs.
        assert_eq!(right.dot(&forward), 0.0);
        assert_eq!(right.dot(&up), 0.0);
    }

    #[test]
    fn test_as_array_matches_components() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_distance() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }
}
