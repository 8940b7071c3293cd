/// Vertex Attribute Format
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum AttributeFormat {
    /// 32 bit float attribute
    Float32,
    /// 2 x 32 bit float attribute
    Float32x2,
    /// 3 x 32 bit float attribute
    Float32x3,
    /// 4 x 32 bit float attribute
    Float32x4,
}

impl AttributeFormat {
    /// Returns the actual attribute size in bytes
    pub fn size(&self) -> usize {
        self.components() * 4
    }

    /// Returns number of components in the attribute
    pub fn components(&self) -> usize {
        match self {
            AttributeFormat::Float32 => 1,
            AttributeFormat::Float32x2 => 2,
            AttributeFormat::Float32x3 => 3,
            AttributeFormat::Float32x4 => 4,
        }
    }
}

pub trait VertexAttribute: 'static {
    type Raw: bytemuck::Pod + bytemuck::Zeroable;
    fn name() -> &'static str;
    fn format() -> AttributeFormat;
}

macro_rules! vertex_attribute {
    ($(#[$meta:meta])* $attribute: ident, $name: literal, $raw: ty, $format: ident) => {
        $(#[$meta])*
        pub struct $attribute;

        impl VertexAttribute for $attribute {
            type Raw = $raw;
            fn name() -> &'static str {
                $name
            }
            fn format() -> AttributeFormat {
                AttributeFormat::$format
            }
        }
    };
}

vertex_attribute!(VertexPosition, "Position", [f32; 3], Float32x3);
vertex_attribute!(VertexNormal, "Normal", [f32; 3], Float32x3);
vertex_attribute!(VertexTexture, "TexUV", [f32; 2], Float32x2);
vertex_attribute!(
    /// Ambient color copied from the material
    VertexAmbient,
    "Ambient",
    [f32; 3],
    Float32x3
);
vertex_attribute!(
    /// Diffuse color copied from the material
    VertexDiffuse,
    "Diffuse",
    [f32; 3],
    Float32x3
);
vertex_attribute!(
    /// Specular color copied from the material
    VertexSpecular,
    "Specular",
    [f32; 3],
    Float32x3
);
vertex_attribute!(VertexOpacity, "Opacity", f32, Float32);
vertex_attribute!(
    /// Index of the texture in the importer list, or the untextured sentinel
    VertexTextureIndex,
    "TextureIndex",
    f32,
    Float32
);
