use crate::math::{Deg, Mat4, Rad, SquareMatrix, Vec3};

/// Position, yaw and scale of an avatar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Yaw in degrees, changed by turning
    pub current_rotation: f32,
    /// Fixed yaw offset in degrees aligning the model with its facing direction
    pub initial_rotation: f32,
    pub scale: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, initial_rotation: f32) -> Self {
        Self {
            position,
            current_rotation: 0.0,
            initial_rotation,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Unit vector of the facing direction in the XZ plane
    pub fn forward(&self) -> Vec3 {
        let Rad(angle) = Rad::from(Deg(self.current_rotation));
        Vec3::new(angle.cos(), 0.0, -angle.sin())
    }

    /// Moves along the facing direction
    pub fn advance(&mut self, distance: f32) {
        let Rad(angle) = Rad::from(Deg(self.current_rotation));
        self.position.x += distance * angle.cos();
        self.position.z -= distance * angle.sin();
    }

    /// `T(position) * Ry(current) * Ry(initial) * S(scale)`
    pub fn matrix(&self) -> Mat4 {
        self.placed(Mat4::from_translation(self.position), Mat4::identity())
    }

    /// Composes the pose with a translation in place of `T(position)` and an extra
    /// rotation applied in the avatar frame right after the current yaw
    pub fn placed(&self, translation: Mat4, rotation: Mat4) -> Mat4 {
        translation
            * Mat4::from_angle_y(Deg(self.current_rotation))
            * rotation
            * Mat4::from_angle_y(Deg(self.initial_rotation))
            * Mat4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}
