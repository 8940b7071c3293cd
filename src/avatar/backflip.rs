use std::f32::consts::{FRAC_PI_2, PI};

use super::Latch;
use crate::log;

/// Default time of a flip in seconds
pub const FLIP_DURATION: f32 = 1.0;
/// Default peak height of a flip
pub const JUMP_HEIGHT: f32 = 3.0;

const RISE_END: f32 = 0.3;
const FALL_START: f32 = 0.8;
const SPIN_START: f32 = 0.2;
const SPIN_END: f32 = 0.9;

/// Backflip animation phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipState {
    Idle,
    Flipping { progress: f32 },
}

/// Timed backflip: a jump with a full turn about the forward axis
#[derive(Debug, Clone)]
pub struct Backflip {
    state: FlipState,
    height: f32,
    rotation: f32,
    duration: f32,
    jump_height: f32,
    latch: Latch,
}

impl Backflip {
    pub fn new(duration: f32, jump_height: f32) -> Self {
        Self {
            state: FlipState::Idle,
            height: 0.0,
            rotation: 0.0,
            duration: duration.max(f32::EPSILON),
            jump_height,
            latch: Latch::default(),
        }
    }

    pub fn state(&self) -> FlipState {
        self.state
    }

    pub fn is_flipping(&self) -> bool {
        matches!(self.state, FlipState::Flipping { .. })
    }

    /// Progress ratio of the running flip, zero when idle
    pub fn progress(&self) -> f32 {
        match self.state {
            FlipState::Flipping { progress } => progress,
            FlipState::Idle => 0.0,
        }
    }

    /// Current vertical offset
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current turn about the forward axis in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Feeds the flip key, returns true when the flip key went down
    pub(super) fn trigger(&mut self, pressed: bool) -> bool {
        self.latch.rising(pressed)
    }

    pub(super) fn start(&mut self) {
        if self.is_flipping() {
            return;
        }
        log::debug!("backflip started");
        self.state = FlipState::Flipping { progress: 0.0 };
        self.height = 0.0;
        self.rotation = 0.0;
    }

    /// Advances the running flip by `delta` seconds
    pub(super) fn advance(&mut self, delta: f32) {
        let progress = match self.state {
            FlipState::Flipping { progress } => progress + delta / self.duration,
            FlipState::Idle => return,
        };

        if progress >= 1.0 {
            log::debug!("backflip landed");
            self.state = FlipState::Idle;
            self.height = 0.0;
            self.rotation = 0.0;
        } else {
            self.state = FlipState::Flipping { progress };
            self.height = height_curve(progress, self.jump_height);
            self.rotation = rotation_curve(progress);
        }
    }
}

impl Default for Backflip {
    fn default() -> Self {
        Self::new(FLIP_DURATION, JUMP_HEIGHT)
    }
}

/// Vertical offset at `progress`: sharp rise, damped hover near the peak, fall
pub fn height_curve(progress: f32, jump_height: f32) -> f32 {
    if progress < RISE_END {
        jump_height * (progress / RISE_END * FRAC_PI_2).sin()
    } else if progress < FALL_START {
        let t = (progress - RISE_END) / (FALL_START - RISE_END);
        jump_height * (1.0 + 0.05 * (-4.0 * t).exp() * (6.0 * PI * t).sin())
    } else {
        let t = ((progress - FALL_START) / (1.0 - FALL_START)).min(1.0);
        jump_height * (t * FRAC_PI_2).cos()
    }
}

/// Turn in degrees at `progress`, a full turn spread over the middle of the flip
pub fn rotation_curve(progress: f32) -> f32 {
    if progress < SPIN_START {
        0.0
    } else if progress < SPIN_END {
        (progress - SPIN_START) / (SPIN_END - SPIN_START) * 360.0
    } else {
        360.0
    }
}
