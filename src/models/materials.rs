use super::Color;

/// Surface description read from an MTL file
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Label or material name
    pub name: String,
    /// Ambient color (`Ka`)
    pub ambient: Color,
    /// Diffuse color (`Kd`)
    pub diffuse: Color,
    /// Specular color (`Ks`)
    pub specular: Color,
    /// Opacity (`d`)
    pub opacity: f32,
    /// Index of the diffuse texture in the importer texture list
    pub texture: Option<usize>,
}

impl Material {
    /// Constructs an untextured, opaque, white material
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::from("gymnasia::material"),
            ambient: Color::white(),
            diffuse: Color::white(),
            specular: Color::white(),
            opacity: 1.0,
            texture: None,
        }
    }
}
