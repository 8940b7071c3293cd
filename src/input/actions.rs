use serde::{Deserialize, Serialize};
use strum_macros::*;

#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumIter, Serialize, Deserialize, Ord, PartialOrd,
)]
/// All bindable actions
pub enum Action {
    /// Avatar walks along its facing direction
    MoveForward,
    /// Avatar turns left while walking
    TurnLeft,
    /// Avatar turns right while walking
    TurnRight,
    Backflip,
    /// Mount the high bar, or drop from it
    Grip,
    /// Start or stop the giant swing around the bar
    Swing,
    CameraForward,
    CameraBackward,
    CameraLeft,
    CameraRight,
    ToggleFirstPerson,
    ToggleSpotlight,
    TogglePointLight,
    Exit,
}
