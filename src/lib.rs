//! Gymnasia
//!
//! Gymnastics scene built around two pieces: a Wavefront OBJ/MTL importer
//! producing meshes with bounding boxes, and gymnast avatars driven by a small
//! animation state machine (walking, backflips, high bar mount and swing).
//! Rendering is left to whatever implements [`render::Sink`].
pub mod avatar;
pub mod camera;
pub mod frame;
pub mod input;
pub mod loaders;
pub mod log;
pub mod math;
pub mod models;
pub mod render;
pub mod scene;
pub mod settings;
pub mod utils;

pub use avatar::{Avatar, Mode};
pub use camera::Camera;
pub use frame::Frame;
pub use input::{Action, Input, InputManager};
pub use loaders::{Assets, ImportError, ObjLoader};
pub use log::Log;
pub use models::{Mesh, Transform3D};
pub use render::{Lighting, RenderState, Sink};
pub use scene::Scene;
pub use settings::{Settings, SettingsError};
