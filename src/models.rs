mod colors;
pub use colors::Color;

mod images;
pub use images::{Extent2D, Image};

mod materials;
pub use materials::Material;

mod meshes;
pub use meshes::{Bounds, Mesh, Topology, VertexBufferLayout};

mod shapes;

mod transforms;
pub use transforms::{Transform3D, TransformBuilder};

mod vertices;
pub use vertices::{
    AttributeFormat, VertexAmbient, VertexAttribute, VertexDiffuse, VertexNormal, VertexOpacity,
    VertexPosition, VertexSpecular, VertexTexture, VertexTextureIndex,
};

/// Interleaved layout of imported meshes, 19 floats per vertex
pub type ImportedLayout = (
    VertexPosition,
    VertexNormal,
    VertexTexture,
    VertexAmbient,
    VertexDiffuse,
    VertexSpecular,
    VertexOpacity,
    VertexTextureIndex,
);
