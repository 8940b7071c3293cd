//! Animated gymnasts
//!
//! An [`Avatar`] owns its pose and a shared handle to its mesh. The interaction
//! it is able to perform is selected once by its [`Mode`]: plain walking, a
//! backflip on demand, or mounting and swinging around a high bar.
mod backflip;
mod high_bar;
mod latch;
mod pose;

use std::sync::Arc;

pub use backflip::{height_curve, rotation_curve, Backflip, FlipState, FLIP_DURATION, JUMP_HEIGHT};
pub use high_bar::{Bar, BarState, HighBar, MOUNT_DISTANCE, SWING_SPEED};
pub use latch::Latch;
pub use pose::Pose;

use crate::input::{Action, Input};
use crate::math::{Deg, Mat4, Vec3};
use crate::models::Mesh;
use crate::render::{RenderState, Sink};

/// Default walking speed in units per second
pub const SPEED: f32 = 5.0;
/// Default turning speed in degrees per second
pub const ROTATE_SPEED: f32 = 90.0;

/// Interaction an avatar is able to perform
#[derive(Debug, Clone, Default)]
pub enum Mode {
    #[default]
    None,
    Backflip(Backflip),
    HighBar(HighBar),
}

/// Named gymnast placed in the scene
pub struct Avatar {
    name: String,
    pose: Pose,
    mesh: Arc<Mesh>,
    state: RenderState,
    speed: f32,
    rotate_speed: f32,
    mode: Mode,
}

impl Avatar {
    /// Constructs a walking avatar
    pub fn new(
        name: impl ToString,
        mesh: Arc<Mesh>,
        initial_rotation: f32,
        position: Vec3,
        state: RenderState,
    ) -> Self {
        Self {
            name: name.to_string(),
            pose: Pose::new(position, initial_rotation),
            mesh,
            state,
            speed: SPEED,
            rotate_speed: ROTATE_SPEED,
            mode: Mode::None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_rotate_speed(mut self, rotate_speed: f32) -> Self {
        self.rotate_speed = rotate_speed;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.pose.scale = scale;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    pub fn render_state(&self) -> RenderState {
        self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Rendered height: bounding box height scaled by the pose
    pub fn model_height(&self) -> f32 {
        self.mesh.bounds().dimensions.y * self.pose.scale.y
    }

    /// Current high bar swing angle in degrees, zero when not swinging
    pub fn swing_angle(&self) -> f32 {
        match &self.mode {
            Mode::HighBar(high_bar) if high_bar.state() == BarState::Rotating => high_bar.angle(),
            _ => 0.0,
        }
    }

    /// Applies one frame of input
    ///
    /// `bar` is the high bar in reach of the avatar, if any. A negative delta is
    /// treated as zero.
    pub fn update(&mut self, input: &Input, delta: f32, bar: Option<&dyn Bar>) {
        let delta = delta.max(0.0);
        let model_height = self.model_height();
        let speed = self.speed;
        let rotate_speed = self.rotate_speed;
        let pose = &mut self.pose;

        match &mut self.mode {
            Mode::None => walk(pose, input, delta, speed, rotate_speed),
            Mode::Backflip(flip) => {
                let triggered = flip.trigger(input.is_held(Action::Backflip));
                if flip.is_flipping() {
                    flip.advance(delta);
                } else {
                    walk(pose, input, delta, speed, rotate_speed);
                    if triggered {
                        flip.start();
                    }
                }
            }
            Mode::HighBar(high_bar) => {
                if high_bar.state() == BarState::Grounded {
                    walk(pose, input, delta, speed, rotate_speed);
                }
                let forward = pose.forward();
                high_bar.update(
                    &mut pose.position,
                    forward,
                    model_height,
                    input.is_held(Action::Grip),
                    input.is_held(Action::Swing),
                    delta,
                    bar,
                );
            }
        }
    }

    /// Model transform of the current frame
    pub fn transform(&self) -> Mat4 {
        let pose = &self.pose;
        match &self.mode {
            Mode::Backflip(flip) if flip.is_flipping() => pose.placed(
                Mat4::from_translation(pose.position)
                    * Mat4::from_translation(Vec3::new(0.0, flip.height(), 0.0)),
                Mat4::from_angle_x(Deg(flip.rotation())),
            ),
            Mode::HighBar(high_bar) if high_bar.state() == BarState::Rotating => pose.placed(
                Mat4::from_translation(pose.position),
                Mat4::from_angle_z(Deg(high_bar.angle())),
            ),
            _ => pose.matrix(),
        }
    }

    /// Submits the avatar to the sink, activating the sink first when asked
    pub fn draw(&self, sink: &mut dyn Sink, activate: bool) {
        if activate {
            sink.activate();
        }
        sink.draw(&self.transform(), self.state, &self.mesh);
    }
}

fn walk(pose: &mut Pose, input: &Input, delta: f32, speed: f32, rotate_speed: f32) {
    if !input.is_held(Action::MoveForward) {
        return;
    }
    pose.advance(speed * delta);
    if input.is_held(Action::TurnLeft) {
        pose.current_rotation += rotate_speed * delta;
    }
    if input.is_held(Action::TurnRight) {
        pose.current_rotation -= rotate_speed * delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::Asset;
    use crate::math::SquareMatrix;

    struct TestBar;

    impl Bar for TestBar {
        fn anchor(&self) -> Vec3 {
            Vec3::new(0.0, 4.0, 0.0)
        }
        fn radius(&self) -> f32 {
            0.1
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        activated: usize,
        draws: Vec<(Mat4, RenderState, String)>,
    }

    impl Sink for RecordingSink {
        fn activate(&mut self) {
            self.activated += 1;
        }
        fn draw(&mut self, transform: &Mat4, state: RenderState, mesh: &Mesh) {
            self.draws.push((*transform, state, mesh.name().to_string()));
        }
    }

    fn gymnast(position: Vec3, mode: Mode) -> Avatar {
        let mesh = Arc::new(Mesh::cube("gymnast", 2.0));
        Avatar::new("gymnast", mesh, 0.0, position, RenderState::ImportedBasic).with_mode(mode)
    }

    fn close(a: Vec3, b: Vec3) -> bool {
        let d = a - b;
        d.x.abs() < 1e-4 && d.y.abs() < 1e-4 && d.z.abs() < 1e-4
    }

    #[test]
    fn walks_along_facing_direction() {
        let mut avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::None);
        let forward = Input::default().with_held(Action::MoveForward);
        avatar.update(&forward, 1.0, None);
        assert!(close(avatar.position(), Vec3::new(5.0, 0.0, 0.0)));

        avatar.pose.current_rotation = 90.0;
        avatar.update(&forward, 1.0, None);
        assert!(close(avatar.position(), Vec3::new(5.0, 0.0, -5.0)));
    }

    #[test]
    fn turning_requires_moving_forward() {
        let mut avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::None);
        let turn = Input::default()
            .with_held(Action::TurnLeft)
            .with_held(Action::TurnRight);
        avatar.update(&Input::default().with_held(Action::TurnLeft), 1.0, None);
        avatar.update(&turn, 1.0, None);
        assert_eq!(avatar.pose().current_rotation, 0.0);
        assert_eq!(avatar.position(), Vec3::new(0.0, 0.0, 0.0));

        let turn_left = Input::default()
            .with_held(Action::MoveForward)
            .with_held(Action::TurnLeft);
        avatar.update(&turn_left, 0.5, None);
        assert!((avatar.pose().current_rotation - 45.0).abs() < 1e-4);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut avatar = gymnast(Vec3::new(1.0, 0.0, 1.0), Mode::None);
        avatar.update(&Input::default().with_held(Action::MoveForward), -1.0, None);
        assert_eq!(avatar.position(), Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn transform_composes_pose() {
        let mut avatar =
            gymnast(Vec3::new(1.0, 2.0, 3.0), Mode::None).with_scale(Vec3::new(2.0, 2.0, 2.0));
        avatar.pose.current_rotation = 30.0;
        avatar.pose.initial_rotation = 60.0;
        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_angle_y(Deg(90.0))
            * Mat4::from_scale(2.0);
        let transform = avatar.transform();
        for column in 0..4 {
            for row in 0..4 {
                assert!((transform[column][row] - expected[column][row]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn backflip_starts_on_press_and_suspends_walking() {
        let mut avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::Backflip(Backflip::default()));
        let flip = Input::default()
            .with_held(Action::Backflip)
            .with_held(Action::MoveForward);
        avatar.update(&flip, 0.1, None);
        let start = avatar.position();
        assert!(matches!(avatar.mode(), Mode::Backflip(f) if f.is_flipping()));

        avatar.update(&flip, 0.2, None);
        assert_eq!(avatar.position(), start);
        match avatar.mode() {
            Mode::Backflip(f) => {
                assert!((f.progress() - 0.2).abs() < 1e-4);
                assert!(f.height() > 0.0);
            }
            _ => unreachable!(),
        }
        assert!(avatar.transform()[3][1] > 0.0);
    }

    #[test]
    fn held_flip_key_does_not_repeat() {
        let mut avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::Backflip(Backflip::default()));
        let flip = Input::default().with_held(Action::Backflip);
        avatar.update(&flip, 0.0, None);
        avatar.update(&flip, 2.0, None);
        assert!(matches!(avatar.mode(), Mode::Backflip(f) if !f.is_flipping()));
        avatar.update(&flip, 0.1, None);
        assert!(matches!(avatar.mode(), Mode::Backflip(f) if !f.is_flipping()));

        avatar.update(&Input::default(), 0.1, None);
        avatar.update(&flip, 0.1, None);
        assert!(matches!(avatar.mode(), Mode::Backflip(f) if f.is_flipping()));
    }

    #[test]
    fn mount_then_drop_restores_position() {
        let start = Vec3::new(-1.5, 0.0, 0.5);
        let mut avatar = gymnast(start, Mode::HighBar(HighBar::default()));
        let grip = Input::default().with_held(Action::Grip);

        avatar.update(&grip, 0.016, Some(&TestBar));
        assert!(matches!(avatar.mode(), Mode::HighBar(h) if h.state() == BarState::OnBar));
        assert!(close(avatar.position(), Vec3::new(0.0, 2.0, 0.0) + Vec3::unit_x() * 0.1));

        avatar.update(&Input::default(), 0.016, Some(&TestBar));
        avatar.update(&grip, 0.016, Some(&TestBar));
        assert!(matches!(avatar.mode(), Mode::HighBar(h) if h.state() == BarState::Grounded));
        assert!(close(avatar.position(), start));
    }

    #[test]
    fn rotating_position_repeats_every_turn() {
        let mut avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::HighBar(HighBar::default()));
        avatar.update(&Input::default().with_held(Action::Grip), 0.0, Some(&TestBar));
        avatar.update(&Input::default().with_held(Action::Swing), 0.0, Some(&TestBar));
        avatar.update(&Input::default(), 0.0, Some(&TestBar));
        let at_zero = avatar.position();
        assert_eq!(avatar.swing_angle(), 0.0);

        // 3 seconds at 120 deg/s is a full turn
        avatar.update(&Input::default(), 3.0, Some(&TestBar));
        assert!(avatar.swing_angle() < 1e-3 || avatar.swing_angle() > 359.999);
        assert!(close(avatar.position(), at_zero));
    }

    #[test]
    fn avatars_debounce_independently() {
        let mut first = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::Backflip(Backflip::default()));
        let mut second = gymnast(Vec3::new(5.0, 0.0, 0.0), Mode::Backflip(Backflip::default()));
        let flip = Input::default().with_held(Action::Backflip);

        first.update(&flip, 0.0, None);
        second.update(&Input::default(), 0.0, None);
        second.update(&flip, 0.0, None);
        assert!(matches!(first.mode(), Mode::Backflip(f) if f.is_flipping()));
        assert!(matches!(second.mode(), Mode::Backflip(f) if f.is_flipping()));
    }

    #[test]
    fn walking_is_locked_on_bar() {
        let mut avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::HighBar(HighBar::default()));
        avatar.update(&Input::default().with_held(Action::Grip), 0.0, Some(&TestBar));
        let grip_point = avatar.position();
        avatar.update(&Input::default().with_held(Action::MoveForward), 1.0, Some(&TestBar));
        assert_eq!(avatar.position(), grip_point);
    }

    #[test]
    fn draw_submits_transform_and_state() {
        let avatar = gymnast(Vec3::new(0.0, 0.0, 0.0), Mode::None);
        let mut sink = RecordingSink::default();
        avatar.draw(&mut sink, false);
        avatar.draw(&mut sink, true);
        assert_eq!(sink.activated, 1);
        assert_eq!(sink.draws.len(), 2);
        assert_eq!(sink.draws[0].0, Mat4::identity());
        assert_eq!(sink.draws[0].1, RenderState::ImportedBasic);
        assert_eq!(sink.draws[0].2, "gymnast");
        assert_eq!(Arc::strong_count(avatar.mesh()), 1);
    }
}
