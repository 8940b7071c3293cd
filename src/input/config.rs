use serde::ser::{Serialize, Serializer};
use serde::*;
use std::collections::{BTreeMap, HashMap};
use strum::IntoEnumIterator;

use super::{Action, Button, KeyCode};

#[derive(Debug, Deserialize, Serialize, Copy, Clone, PartialEq, Eq)]
pub struct Binding {
    pub primary: Button,
    pub secondary: Button,
}

impl Binding {
    fn key(primary: KeyCode) -> Self {
        Self {
            primary: Button::Key(primary),
            secondary: Button::None,
        }
    }

    fn keys(primary: KeyCode, secondary: KeyCode) -> Self {
        Self {
            primary: Button::Key(primary),
            secondary: Button::Key(secondary),
        }
    }
}

impl Default for Binding {
    fn default() -> Self {
        Self {
            primary: Button::None,
            secondary: Button::None,
        }
    }
}

/// Buttons bound to every [`Action`]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    #[serde(serialize_with = "ordered_map")]
    pub bindings: HashMap<Action, Binding>,
}

/// Sort keys and serialize
fn ordered_map<S>(map: &HashMap<Action, Binding>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let ordered: BTreeMap<_, _> = map.iter().collect();
    ordered.serialize(serializer)
}

impl InputConfig {
    /// Returns binding of the action, unbound actions give an empty binding
    pub fn binding(&self, action: Action) -> Binding {
        self.bindings.get(&action).copied().unwrap_or_default()
    }

    /// Rebinds an action
    pub fn bind(mut self, action: Action, binding: Binding) -> Self {
        self.bindings.insert(action, binding);
        self
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut bindings: HashMap<Action, Binding> = Action::iter()
            .map(|action| (action, Binding::default()))
            .collect();

        bindings.insert(Action::MoveForward, Binding::key(KeyCode::Up));
        bindings.insert(Action::TurnLeft, Binding::key(KeyCode::Left));
        bindings.insert(Action::TurnRight, Binding::key(KeyCode::Right));
        bindings.insert(Action::Backflip, Binding::key(KeyCode::Space));
        bindings.insert(Action::Grip, Binding::key(KeyCode::J));
        bindings.insert(Action::Swing, Binding::key(KeyCode::K));
        bindings.insert(Action::CameraForward, Binding::key(KeyCode::W));
        bindings.insert(Action::CameraBackward, Binding::key(KeyCode::S));
        bindings.insert(Action::CameraLeft, Binding::key(KeyCode::A));
        bindings.insert(Action::CameraRight, Binding::key(KeyCode::D));
        bindings.insert(Action::ToggleFirstPerson, Binding::key(KeyCode::C));
        bindings.insert(Action::ToggleSpotlight, Binding::key(KeyCode::L));
        bindings.insert(Action::TogglePointLight, Binding::key(KeyCode::R));
        bindings.insert(Action::Exit, Binding::keys(KeyCode::Escape, KeyCode::Q));

        Self { bindings }
    }
}
