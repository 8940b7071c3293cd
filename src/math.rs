//! Wrapper around cgmath

pub use cgmath::num_traits::clamp;
pub use cgmath::Deg;
pub use cgmath::EuclideanSpace;
pub use cgmath::InnerSpace;
pub use cgmath::Rad;
pub use cgmath::SquareMatrix;

/// 4x4 Matrix of f32
pub type Mat4 = cgmath::Matrix4<f32>;
/// 3 dimentional point of f32
pub type Point3 = cgmath::Point3<f32>;
/// 4 dimentional vector of f32
pub type Vec4 = cgmath::Vector4<f32>;
/// 3 dimentional vector of f32
pub type Vec3 = cgmath::Vector3<f32>;
/// 2 dimentional vector of f32
pub type Vec2 = cgmath::Vector2<f32>;
/// Quaternion of f32
pub type Quat = cgmath::Quaternion<f32>;

/// Wraps an angle in degrees into `[0, 360)`
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Distance between two points projected onto the XZ plane
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).magnitude()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_wrap_into_full_turn() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((wrap_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!(wrap_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn horizontal_distance_ignores_height() {
        let a = Vec3::new(3.0, 100.0, 0.0);
        let b = Vec3::new(0.0, -4.0, 4.0);
        assert!((horizontal_distance(a, b) - 5.0).abs() < 1e-5);
    }
}
