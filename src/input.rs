//! Keyboard and mouse input
//!
//! Raw level-triggered key states are fed into [`InputManager`], which resolves
//! them into [`Action`]s and hands out an immutable [`Input`] snapshot per frame.
mod actions;
pub use actions::Action;

mod config;
pub use config::{Binding, InputConfig};

mod keys;
pub use keys::{KeyCode, MouseButton};

mod manager;
pub use manager::{Button, ButtonState, Input, InputManager};
