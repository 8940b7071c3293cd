use super::Latch;
use crate::log;
use crate::math::{horizontal_distance, wrap_degrees, Deg, Rad, Vec3};

/// Default angular rate of a giant swing in degrees per second
pub const SWING_SPEED: f32 = 120.0;
/// Default horizontal distance to the bar anchor that allows to mount
pub const MOUNT_DISTANCE: f32 = 5.0;

/// Share of the bar thickness the hands are placed in front of the bar
const GRIP_OFFSET: f32 = 0.5;
/// Arm length estimate as a share of the model height
const ARM_RATIO: f32 = 0.4;
/// Lift applied on the upper half of the swing as a share of the swing radius
const UPSWING_BIAS: f32 = 0.1;

/// Read-only queries against a bar the avatar may interact with
pub trait Bar {
    /// World position of the bar axis the hands hold on to
    fn anchor(&self) -> Vec3;
    /// Physical radius of the bar
    fn radius(&self) -> f32;
    /// Bar diameter
    fn thickness(&self) -> f32 {
        2.0 * self.radius()
    }
}

/// High bar interaction phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Grounded,
    OnBar,
    Rotating,
}

/// Mount, giant swing and drop on a high bar
#[derive(Debug, Clone)]
pub struct HighBar {
    state: BarState,
    grip_point: Vec3,
    ground_position: Vec3,
    anchor: Vec3,
    bar_radius: f32,
    forward: Vec3,
    model_height: f32,
    angle: f32,
    progress: f32,
    swing_speed: f32,
    mount_distance: f32,
    grip_latch: Latch,
    swing_latch: Latch,
}

impl HighBar {
    pub fn new(swing_speed: f32, mount_distance: f32) -> Self {
        let zero = Vec3::new(0.0, 0.0, 0.0);
        Self {
            state: BarState::Grounded,
            grip_point: zero,
            ground_position: zero,
            anchor: zero,
            bar_radius: 0.0,
            forward: Vec3::unit_x(),
            model_height: 0.0,
            angle: 0.0,
            progress: 0.0,
            swing_speed,
            mount_distance,
            grip_latch: Latch::default(),
            swing_latch: Latch::default(),
        }
    }

    pub fn state(&self) -> BarState {
        self.state
    }

    /// Swing angle in degrees, within `[0, 360)`
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Share of the full turn done by the running swing
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn grip_point(&self) -> Vec3 {
        self.grip_point
    }

    /// Position the avatar had right before mounting
    pub fn ground_position(&self) -> Vec3 {
        self.ground_position
    }

    /// Runs one tick of the bar state machine, moving `position` where needed
    ///
    /// Keys are sampled every tick so that edges are never lost while the
    /// avatar is busy. Requests that do not fit the current state are ignored.
    pub(super) fn update(
        &mut self,
        position: &mut Vec3,
        forward: Vec3,
        model_height: f32,
        grip: bool,
        swing: bool,
        delta: f32,
        bar: Option<&dyn Bar>,
    ) {
        let grip = self.grip_latch.rising(grip);
        let swing = self.swing_latch.rising(swing);

        match self.state {
            BarState::Grounded => {
                if !grip {
                    return;
                }
                let bar = match bar {
                    Some(bar) => bar,
                    None => return,
                };
                if horizontal_distance(*position, bar.anchor()) < self.mount_distance {
                    self.mount(position, forward, model_height, bar);
                }
            }
            BarState::OnBar => {
                if swing {
                    log::debug!("swing started at {:?}", self.grip_point);
                    self.state = BarState::Rotating;
                    self.angle = 0.0;
                    self.progress = 0.0;
                } else if grip {
                    log::debug!("dropped to {:?}", self.ground_position);
                    *position = self.ground_position;
                    self.state = BarState::Grounded;
                    self.angle = 0.0;
                    self.progress = 0.0;
                }
            }
            BarState::Rotating => {
                if swing {
                    log::debug!("swing stopped at {:.1} deg", self.angle);
                    *position = self.grip_point;
                    self.state = BarState::OnBar;
                    self.angle = 0.0;
                    self.progress = 0.0;
                } else {
                    self.angle = wrap_degrees(self.angle + self.swing_speed * delta);
                    self.progress = self.angle / 360.0;
                    *position = self.swing_position(self.angle);
                }
            }
        }
    }

    fn mount(&mut self, position: &mut Vec3, forward: Vec3, model_height: f32, bar: &dyn Bar) {
        self.anchor = bar.anchor();
        self.bar_radius = bar.radius();
        self.forward = forward;
        self.model_height = model_height;
        self.ground_position = *position;
        self.grip_point = self.anchor - Vec3::new(0.0, model_height, 0.0)
            + forward * (bar.thickness() * GRIP_OFFSET);
        self.angle = 0.0;
        self.progress = 0.0;
        self.state = BarState::OnBar;
        *position = self.grip_point;
        log::debug!("mounted at {:?}", self.grip_point);
    }

    /// Point on the swing circle around the bar anchor at `angle` degrees
    pub fn swing_position(&self, angle: f32) -> Vec3 {
        let Rad(theta) = Rad::from(Deg(wrap_degrees(angle)));
        let (sin, cos) = theta.sin_cos();
        let radius = ARM_RATIO * self.model_height + self.bar_radius;
        let up = Vec3::unit_y();

        let mut position = self.anchor + self.forward * (radius * sin) - up * (radius * cos);
        if sin > 0.0 {
            position += up * (UPSWING_BIAS * radius * sin);
        }
        position
    }
}

impl Default for HighBar {
    fn default() -> Self {
        Self::new(SWING_SPEED, MOUNT_DISTANCE)
    }
}
