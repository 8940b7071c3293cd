//! Interface between the scene and a renderer
use crate::math::{Mat4, Vec3, Vec4};
use crate::models::{Color, Mesh};

/// Shading mode selected per draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderState {
    /// Flat colored procedural mesh
    Basic = 0,
    /// Textured procedural mesh
    Textured = 1,
    /// Imported mesh using per-vertex material colors
    ImportedBasic = 2,
    /// Imported mesh sampling its material textures
    ImportedTextured = 3,
}

impl From<RenderState> for i32 {
    fn from(state: RenderState) -> Self {
        state as i32
    }
}

/// Receiver of draw calls, usually a shader program
pub trait Sink {
    /// Makes the sink current before drawing
    fn activate(&mut self);

    /// Binds the mesh, sets the model transform and the render state, issues the draw
    fn draw(&mut self, transform: &Mat4, state: RenderState, mesh: &Mesh);

    /// Receives light settings of the frame
    fn lighting(&mut self, _lighting: &Lighting) {}
}

/// Scene lights
#[derive(Debug, Clone, PartialEq)]
pub struct Lighting {
    /// Directional light color
    pub light_color: Color,
    /// Directional light direction, `w` is zero
    pub light_direction: Vec4,
    /// Directional light switch
    pub directional_on: bool,
    /// Point light position
    pub point_light_position: Vec3,
    /// Point light color, switches between white and red
    pub point_light_color: Color,
    /// Spotlight attached to the camera
    pub spotlight_on: bool,
}

impl Lighting {
    pub fn toggle_spotlight(&mut self) {
        self.spotlight_on = !self.spotlight_on;
    }

    /// Switches the point light between white and red
    pub fn toggle_point_light(&mut self) {
        self.point_light_color = if self.point_light_color == Color::white() {
            Color::red()
        } else {
            Color::white()
        };
    }

    /// Ambient share of the directional light
    pub fn ambient(&self) -> Color {
        self.light_color * 0.5
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            light_color: Color::white(),
            light_direction: Vec4::new(-1.0, -1.0, -1.0, 0.0),
            directional_on: true,
            point_light_position: Vec3::new(0.0, 10.0, 0.0),
            point_light_color: Color::white(),
            spotlight_on: false,
        }
    }
}
