//! Gymnasium scene: props, high bar, gymnasts, camera and lights
use std::path::Path;
use std::sync::Arc;

use crate::avatar::{Avatar, Backflip, Bar, HighBar, Mode};
use crate::camera::Camera;
use crate::input::{Action, Input};
use crate::loaders::{Asset, Assets, ImportError, ObjLoader};
use crate::log;
use crate::math::{Deg, Mat4, Vec3};
use crate::models::{ImportedLayout, Mesh, Transform3D, VertexBufferLayout};
use crate::render::{Lighting, RenderState, Sink};
use crate::settings::{AvatarSettings, Settings};

/// Height of the bar above its base
pub const BAR_HEIGHT: f32 = 4.0;
pub const BAR_LENGTH: f32 = 6.0;
pub const BAR_RADIUS: f32 = 0.1;

/// Size of the cube standing in for a model that could not be imported
const FALLBACK_SIZE: f32 = 1.0;

/// Static object of the scene
pub struct Prop {
    pub name: String,
    pub mesh: Arc<Mesh>,
    pub transform: Transform3D,
    pub state: RenderState,
}

impl Prop {
    pub fn new(
        name: impl ToString,
        mesh: Arc<Mesh>,
        transform: Transform3D,
        state: RenderState,
    ) -> Self {
        Self {
            name: name.to_string(),
            mesh,
            transform,
            state,
        }
    }

    pub fn draw(&self, sink: &mut dyn Sink) {
        sink.draw(&self.transform.matrix(), self.state, &self.mesh);
    }
}

/// High bar prop the gymnasts can mount
pub struct HighBarProp {
    pub prop: Prop,
    pub height: f32,
    pub length: f32,
    pub radius: f32,
}

impl HighBarProp {
    pub fn new(prop: Prop) -> Self {
        Self {
            prop,
            height: BAR_HEIGHT,
            length: BAR_LENGTH,
            radius: BAR_RADIUS,
        }
    }
}

impl Bar for HighBarProp {
    fn anchor(&self) -> Vec3 {
        self.prop.transform.translate + Vec3::new(0.0, self.height, 0.0)
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Props, gymnasts and the viewer
pub struct Scene {
    assets: Assets,
    props: Vec<Prop>,
    high_bar: HighBarProp,
    gymnast: Avatar,
    bar_gymnast: Avatar,
    camera: Camera,
    lighting: Lighting,
}

impl Scene {
    /// Imports models from `settings.models_path` and places them
    ///
    /// Models missing on disk are replaced by cubes, so the scene is always complete.
    pub fn load(settings: &Settings) -> Result<Self, ImportError> {
        let root = settings.models_path.as_path();
        let mut assets = Assets::new();
        let mut loader = ObjLoader::new();
        let mut import_model = |name: &str| import(&mut loader, &mut assets, root, name);

        let placements = [
            ("tumbling_floor", Transform3D::default()),
            (
                "VaultTable",
                Transform3D::builder()
                    .with_translate(Vec3::new(8.0, 0.0, 0.0))
                    .build(),
            ),
            (
                "ComplexBuilding",
                Transform3D::builder().with_scale_factor(2.0).build(),
            ),
            (
                "PommelHorse",
                Transform3D::builder()
                    .with_translate(Vec3::new(-5.0, 0.0, -10.0))
                    .with_yaw(Deg(180.0))
                    .build(),
            ),
            (
                "PommelHorse2",
                Transform3D::builder()
                    .with_translate(Vec3::new(27.0, 0.0, -10.0))
                    .with_yaw(Deg(180.0))
                    .build(),
            ),
        ];

        let mut props = Vec::with_capacity(placements.len() + 1);
        for (name, transform) in placements {
            let (mesh, state) = import_model(name)?;
            props.push(Prop::new(name, mesh, transform, state));
        }

        let (bar_mesh, bar_state) = import_model("HighBar")?;
        let bar_position = Vec3::new(-10.0, 0.0, 0.0);
        let high_bar = HighBarProp::new(Prop::new(
            "HighBar",
            bar_mesh,
            Transform3D::builder()
                .with_translate(bar_position)
                .with_scale_factor(1.3)
                .build(),
            bar_state,
        ));

        let (gymnast_mesh, gymnast_state) = import_model("gymnast")?;

        let floor = Arc::new(Mesh::rectangle("floor", 100.0, 100.0, 20.0));
        assets.share(Arc::clone(&floor));
        props.push(Prop::new(
            "floor",
            floor,
            Transform3D::builder()
                .with_translate(Vec3::new(0.0, -0.01, 0.0))
                .build(),
            RenderState::Textured,
        ));

        let motion = &settings.avatar;
        let gymnast = gymnast_with(
            Avatar::new(
                "gymnast",
                Arc::clone(&gymnast_mesh),
                90.0,
                Vec3::new(0.0, 0.0, 5.0),
                gymnast_state,
            ),
            motion,
        )
        .with_mode(Mode::Backflip(Backflip::new(
            motion.flip_duration,
            motion.jump_height,
        )));

        let bar_gymnast = gymnast_with(
            Avatar::new(
                "bar_gymnast",
                gymnast_mesh,
                180.0,
                bar_position,
                gymnast_state,
            ),
            motion,
        )
        .with_scale(Vec3::new(0.5, 0.5, 0.5))
        .with_mode(Mode::HighBar(HighBar::new(
            motion.swing_speed,
            motion.mount_distance,
        )));

        log::info!("Scene is ready: {} props, {} assets", props.len() + 1, assets.len());

        Ok(Self {
            assets,
            props,
            high_bar,
            gymnast,
            bar_gymnast,
            camera: Camera::default(),
            lighting: Lighting::default(),
        })
    }

    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn high_bar(&self) -> &HighBarProp {
        &self.high_bar
    }

    /// Gymnast performing backflips
    pub fn gymnast(&self) -> &Avatar {
        &self.gymnast
    }

    /// Gymnast working on the high bar
    pub fn bar_gymnast(&self) -> &Avatar {
        &self.bar_gymnast
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Applies one frame of input
    pub fn update(&mut self, input: &Input, delta: f32) {
        if input.is_pressed(Action::ToggleSpotlight) {
            self.lighting.toggle_spotlight();
        }
        if input.is_pressed(Action::TogglePointLight) {
            self.lighting.toggle_point_light();
        }
        if input.is_pressed(Action::ToggleFirstPerson) {
            self.camera.toggle_first_person();
        }

        self.gymnast.update(input, delta, None);
        self.bar_gymnast.update(input, delta, Some(&self.high_bar));

        self.camera.update(input, delta);
        self.camera
            .follow(self.bar_gymnast.position(), self.bar_gymnast.swing_angle());
    }

    /// Submits lights and every object of the scene to the sink
    pub fn draw(&self, sink: &mut dyn Sink) {
        sink.activate();
        sink.lighting(&self.lighting);
        for prop in self.props.iter() {
            prop.draw(sink);
        }
        self.high_bar.prop.draw(sink);
        self.gymnast.draw(sink, false);
        self.bar_gymnast.draw(sink, false);
    }

    /// View matrix of the current camera
    pub fn view(&self) -> Mat4 {
        self.camera.view_matrix()
    }
}

fn gymnast_with(avatar: Avatar, motion: &AvatarSettings) -> Avatar {
    avatar
        .with_speed(motion.speed)
        .with_rotate_speed(motion.rotate_speed)
}

/// Imports a model and registers its mesh and textures in the library
fn import(
    loader: &mut ObjLoader,
    assets: &mut Assets,
    root: &Path,
    name: &str,
) -> Result<(Arc<Mesh>, RenderState), ImportError> {
    let mesh = loader.load(root.join(name), &ImportedLayout::arities())?;

    let (mesh, state) = if mesh.count_vertices() == 0 {
        log::warn!("Model `{}` is empty, using a cube instead", name);
        (Mesh::cube(name, FALLBACK_SIZE), RenderState::Basic)
    } else if loader.textures().is_empty() {
        (mesh, RenderState::ImportedBasic)
    } else {
        (mesh, RenderState::ImportedTextured)
    };

    // texture file names are only unique within one model
    for texture in loader.take_textures() {
        let label = format!("{}/{}", name, texture.name());
        assets.set(texture.with_name(label));
    }

    let mesh = Arc::new(mesh);
    assets.share(Arc::clone(&mesh));
    Ok((mesh, state))
}
