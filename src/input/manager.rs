use serde::*;
use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::{Action, InputConfig, KeyCode, MouseButton};
use crate::log;
use crate::math::Vec2;

/// Information about KeyboardKey or MouseButton
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Button {
    Key(KeyCode),
    Mouse(MouseButton),
    None,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum ButtonState {
    None,
    Pressed,
    Hold,
    Released,
}

/// Manager for input
///
/// Receives level-triggered button states from whatever backend polls the
/// devices and resolves them into action states.
pub struct InputManager {
    btn_map: HashMap<Button, Action>,
    btn_states: HashMap<Action, ButtonState>,
    mouse_delta: Vec2,
    /// Mouse Scrolling, value should be between -1 and 1
    scroll_delta: f32,
}

impl InputManager {
    /// Constructs the manager and registers bindings from config
    pub fn new(config: &InputConfig) -> Self {
        let mut manager = Self {
            btn_map: HashMap::new(),
            btn_states: HashMap::new(),
            mouse_delta: Vec2::new(0.0, 0.0),
            scroll_delta: 0.0,
        };
        manager.initialize(config);
        manager
    }

    /// Load bindings from config
    pub fn initialize(&mut self, config: &InputConfig) {
        self.btn_map.clear();
        for action in Action::iter() {
            self.btn_states.insert(action, ButtonState::None);
        }

        for (action, binding) in config.bindings.iter() {
            for button in [binding.primary, binding.secondary] {
                if button != Button::None {
                    self.btn_map.insert(button, *action);
                }
            }
        }
    }

    /// Applies the polled state of a button, returns false for unmapped buttons
    pub fn set_button(&mut self, button: Button, pressed: bool) -> bool {
        let action = match self.btn_map.get(&button) {
            Some(action) => *action,
            None => {
                log::trace!("unmapped {:?}", button);
                return false;
            }
        };

        let state = self.btn_states.entry(action).or_insert(ButtonState::None);
        *state = match (*state, pressed) {
            (ButtonState::None, true) | (ButtonState::Released, true) => {
                log::trace!("Press {:?}", action);
                ButtonState::Pressed
            }
            (ButtonState::Pressed, false) | (ButtonState::Hold, false) => {
                log::trace!("Release {:?}", action);
                ButtonState::Released
            }
            (current, _) => current,
        };
        true
    }

    pub fn press(&mut self, button: Button) -> bool {
        self.set_button(button, true)
    }

    pub fn release(&mut self, button: Button) -> bool {
        self.set_button(button, false)
    }

    /// Accumulates mouse movement of the current frame
    pub fn move_mouse(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Sets mouse wheel delta of the current frame
    pub fn scroll(&mut self, delta: f32) {
        self.scroll_delta = delta.clamp(-1.0, 1.0);
    }

    /// Returns the input state of the current frame
    pub fn snapshot(&self) -> Input {
        Input {
            states: self.btn_states.clone(),
            mouse_delta: self.mouse_delta,
            scroll: self.scroll_delta,
        }
    }

    /// Must run at the end of every frame
    pub fn update(&mut self) {
        for state in self.btn_states.values_mut() {
            match state {
                ButtonState::Released => *state = ButtonState::None,
                ButtonState::Pressed => *state = ButtonState::Hold,
                _ => {}
            }
        }

        self.mouse_delta = Vec2::new(0.0, 0.0);
        self.scroll_delta = 0.0;
    }
}

/// Immutable input state of a single frame
#[derive(Debug, Clone)]
pub struct Input {
    states: HashMap<Action, ButtonState>,
    mouse_delta: Vec2,
    scroll: f32,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            mouse_delta: Vec2::new(0.0, 0.0),
            scroll: 0.0,
        }
    }
}

impl Input {
    /// Returns state of the action button
    pub fn state(&self, action: Action) -> ButtonState {
        self.states
            .get(&action)
            .copied()
            .unwrap_or(ButtonState::None)
    }

    /// Return true when button is pressed or hold
    pub fn is_held(&self, action: Action) -> bool {
        matches!(self.state(action), ButtonState::Pressed | ButtonState::Hold)
    }

    /// Return true only on the frame the button went down
    pub fn is_pressed(&self, action: Action) -> bool {
        self.state(action) == ButtonState::Pressed
    }

    /// Return true when button is released
    pub fn is_released(&self, action: Action) -> bool {
        self.state(action) == ButtonState::Released
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Marks an action as held
    pub fn with_held(mut self, action: Action) -> Self {
        self.states.insert(action, ButtonState::Hold);
        self
    }

    /// Marks an action as pressed in this frame
    pub fn with_pressed(mut self, action: Action) -> Self {
        self.states.insert(action, ButtonState::Pressed);
        self
    }

    /// Sets mouse movement
    pub fn with_mouse_delta(mut self, dx: f32, dy: f32) -> Self {
        self.mouse_delta = Vec2::new(dx, dy);
        self
    }

    /// Sets mouse wheel delta
    pub fn with_scroll(mut self, delta: f32) -> Self {
        self.scroll = delta;
        self
    }
}
