//! Transformation of static props
use crate::math::{Deg, Mat4, Quat, Vec3};
use cgmath::Rotation3;

/// Agregator for prop transformations
#[derive(Default)]
pub struct TransformBuilder {
    /// Optional translation vector
    pub translate: Option<Vec3>,
    /// Optional rotation quaternion
    pub rotate: Option<Quat>,
    /// Optional scale vector
    pub scale: Option<Vec3>,
}

impl TransformBuilder {
    #[must_use]
    pub fn with_translate(mut self, translate: Vec3) -> Self {
        self.translate = Some(translate);
        self
    }

    /// Rotation about the vertical axis
    #[must_use]
    pub fn with_yaw(mut self, angle: Deg<f32>) -> Self {
        self.rotate = Some(Quat::from_angle_y(angle));
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_scale_factor(self, scale: f32) -> Self {
        self.with_scale(Vec3::new(scale, scale, scale))
    }

    /// Builds the transformation
    pub fn build(self) -> Transform3D {
        let identity = Transform3D::default();
        Transform3D {
            translate: self.translate.unwrap_or(identity.translate),
            rotate: self.rotate.unwrap_or(identity.rotate),
            scale: self.scale.unwrap_or(identity.scale),
        }
    }
}

/// Model transformation structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// Translation vector
    pub translate: Vec3,
    /// Rotation quaternion
    pub rotate: Quat,
    /// Scale vector
    pub scale: Vec3,
}

impl Transform3D {
    /// Constructs transformation builder
    pub fn builder() -> TransformBuilder {
        TransformBuilder::default()
    }

    /// Returns `translate * rotate * scale` matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translate)
            * Mat4::from(self.rotate)
            * Mat4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self {
            translate: Vec3::new(0.0, 0.0, 0.0),
            rotate: Quat::from_angle_y(Deg(0.0)),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;

    #[test]
    fn scale_is_applied_before_translation() {
        let transform = Transform3D::builder()
            .with_translate(Vec3::new(-10.0, 0.0, 0.0))
            .with_scale_factor(1.3)
            .build();
        let point = transform.matrix() * Vec4::new(1.0, 1.0, 0.0, 1.0);
        assert!((point.x - -8.7).abs() < 1e-5);
        assert!((point.y - 1.3).abs() < 1e-5);
    }

    #[test]
    fn half_turn_yaw_mirrors_x() {
        let transform = Transform3D::builder().with_yaw(Deg(180.0)).build();
        let point = transform.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((point.x + 1.0).abs() < 1e-5);
        assert!(point.z.abs() < 1e-5);
    }
}
