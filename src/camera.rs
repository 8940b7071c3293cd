//! Free-fly camera with a first person mode following an avatar
use crate::input::{Action, Input};
use crate::log;
use crate::math::{clamp, Deg, EuclideanSpace, InnerSpace, Mat4, Point3, Rad, Vec3};

pub const YAW: f32 = -90.0;
pub const PITCH: f32 = 0.0;
pub const SPEED: f32 = 2.5;
pub const SENSITIVITY: f32 = 0.1;
pub const ZOOM: f32 = 45.0;

const MAX_PITCH: f32 = 89.0;
const MIN_ZOOM: f32 = 1.0;
/// Height of the eyes above the followed avatar origin
const EYE_HEIGHT: f32 = 2.0;

/// Keyboard movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct View {
    position: Vec3,
    yaw: f32,
    pitch: f32,
}

/// Scene camera
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    /// Free camera state saved while in first person mode
    saved: Option<View>,
}

impl Camera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::new(0.0, 0.0, -1.0),
            up: world_up,
            right: Vec3::unit_x(),
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            saved: None,
        };
        camera.update_vectors();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_first_person(&self) -> bool {
        self.saved.is_some()
    }

    /// Right handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        let eye = Point3::from_vec(self.position);
        Mat4::look_at_rh(eye, eye + self.front, self.up)
    }

    /// Moves the camera in the horizontal plane, ignored in first person mode
    pub fn process_keyboard(&mut self, direction: Direction, delta: f32) {
        if self.is_first_person() {
            return;
        }
        let velocity = self.movement_speed * delta;
        let forward = Vec3::new(self.front.x, 0.0, self.front.z).normalize();
        let right = Vec3::new(self.right.x, 0.0, self.right.z).normalize();
        match direction {
            Direction::Forward => self.position += forward * velocity,
            Direction::Backward => self.position -= forward * velocity,
            Direction::Left => self.position -= right * velocity,
            Direction::Right => self.position += right * velocity,
        }
    }

    /// Turns the camera by mouse offsets, ignored in first person mode
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        if self.is_first_person() {
            return;
        }
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = clamp(self.pitch + dy * self.mouse_sensitivity, -MAX_PITCH, MAX_PITCH);
        self.update_vectors();
    }

    pub fn process_scroll(&mut self, dy: f32) {
        self.zoom = clamp(self.zoom - dy, MIN_ZOOM, ZOOM);
    }

    /// Applies camera actions of the frame
    pub fn update(&mut self, input: &Input, delta: f32) {
        let delta = delta.max(0.0);
        let movement = [
            (Action::CameraForward, Direction::Forward),
            (Action::CameraBackward, Direction::Backward),
            (Action::CameraLeft, Direction::Left),
            (Action::CameraRight, Direction::Right),
        ];
        for (action, direction) in movement {
            if input.is_held(action) {
                self.process_keyboard(direction, delta);
            }
        }

        let mouse = input.mouse_delta();
        if mouse.x != 0.0 || mouse.y != 0.0 {
            self.process_mouse(mouse.x, mouse.y);
        }
        if input.scroll() != 0.0 {
            self.process_scroll(input.scroll());
        }
    }

    /// Switches between free and first person mode
    ///
    /// Leaving first person mode restores the free camera exactly as it was.
    pub fn toggle_first_person(&mut self) {
        match self.saved.take() {
            Some(view) => {
                self.position = view.position;
                self.yaw = view.yaw;
                self.pitch = view.pitch;
                self.update_vectors();
                log::info!("free camera");
            }
            None => {
                self.saved = Some(View {
                    position: self.position,
                    yaw: self.yaw,
                    pitch: self.pitch,
                });
                log::info!("first person camera");
            }
        }
    }

    /// Places the first person camera at the eyes of the followed avatar
    ///
    /// The swing angle of the avatar in degrees tilts the view.
    pub fn follow(&mut self, position: Vec3, swing_angle: f32) {
        if !self.is_first_person() {
            return;
        }
        self.position = position + self.world_up * EYE_HEIGHT;
        let tilt = if swing_angle > 180.0 {
            swing_angle - 360.0
        } else {
            swing_angle
        };
        self.pitch = clamp(tilt, -MAX_PITCH, MAX_PITCH);
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let Rad(yaw) = Rad::from(Deg(self.yaw));
        let Rad(pitch) = Rad::from(Deg(self.pitch));
        self.front =
            Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 2.0, 10.0), Vec3::unit_y(), YAW, PITCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        let d = a - b;
        d.x.abs() < 1e-4 && d.y.abs() < 1e-4 && d.z.abs() < 1e-4
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(close(camera.front(), Vec3::new(0.0, 0.0, -1.0)));
        assert!(close(camera.right(), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(camera.up(), Vec3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn keyboard_keeps_height() {
        let mut camera = Camera::default();
        camera.process_mouse(0.0, 1000.0);
        assert_eq!(camera.pitch(), MAX_PITCH);
        camera.process_keyboard(Direction::Forward, 1.0);
        assert!(close(camera.position(), Vec3::new(0.0, 2.0, 7.5)));
        camera.process_keyboard(Direction::Right, 2.0);
        assert!(close(camera.position(), Vec3::new(5.0, 2.0, 7.5)));
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_scroll(-10.0);
        assert_eq!(camera.zoom(), ZOOM);
        camera.process_scroll(50.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn input_moves_camera() {
        let mut camera = Camera::default();
        let input = Input::default()
            .with_held(Action::CameraBackward)
            .with_scroll(1.0);
        camera.update(&input, 2.0);
        assert!(close(camera.position(), Vec3::new(0.0, 2.0, 15.0)));
        assert_eq!(camera.zoom(), 44.0);
    }

    #[test]
    fn first_person_restores_free_camera() {
        let mut camera = Camera::default();
        camera.process_mouse(100.0, 50.0);
        let (position, yaw, pitch) = (camera.position(), camera.yaw(), camera.pitch());

        camera.toggle_first_person();
        camera.follow(Vec3::new(-10.0, 0.0, 0.0), 30.0);
        assert!(close(camera.position(), Vec3::new(-10.0, 2.0, 0.0)));
        assert_eq!(camera.pitch(), 30.0);
        camera.process_keyboard(Direction::Forward, 1.0);
        assert!(close(camera.position(), Vec3::new(-10.0, 2.0, 0.0)));

        camera.follow(Vec3::new(-10.0, 0.0, 0.0), 300.0);
        assert!((camera.pitch() + 60.0).abs() < 1e-4);

        camera.toggle_first_person();
        assert!(!camera.is_first_person());
        assert_eq!(camera.position(), position);
        assert_eq!(camera.yaw(), yaw);
        assert_eq!(camera.pitch(), pitch);
    }

    #[test]
    fn follow_is_ignored_for_free_camera() {
        let mut camera = Camera::default();
        camera.follow(Vec3::new(1.0, 1.0, 1.0), 10.0);
        assert_eq!(camera.position(), Vec3::new(0.0, 2.0, 10.0));
    }
}
