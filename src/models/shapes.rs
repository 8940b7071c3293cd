//! Procedural meshes
use crate::math::{InnerSpace, Vec3};

use super::{Mesh, VertexNormal, VertexPosition, VertexTexture};

/// Face normal and the two axes spanning the face, counter-clockwise from outside
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), // front
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]), // right
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), // back
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]), // left
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]), // top
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]), // bottom
];

const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

impl Mesh {
    /// Constructs an indexed cube centered at the origin
    pub fn cube(name: impl ToString, size: f32) -> Self {
        let half = size / 2.0;
        let mut positions: Vec<[f32; 3]> = Vec::with_capacity(24);
        let mut normals: Vec<[f32; 3]> = Vec::with_capacity(24);
        let mut tex_uvs: Vec<[f32; 2]> = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (face, (normal, u, v)) in CUBE_FACES.iter().enumerate() {
            let normal = Vec3::from(*normal);
            let u = Vec3::from(*u);
            let v = Vec3::from(*v);
            for uv in QUAD_UVS.iter() {
                let corner = (normal + u * (uv[0] * 2.0 - 1.0) + v * (uv[1] * 2.0 - 1.0)) * half;
                positions.push(corner.into());
                normals.push(normal.into());
                tex_uvs.push(*uv);
            }
            let base = (face * 4) as u32;
            indices.extend(QUAD_INDICES.iter().map(|i| base + i));
        }

        let mut mesh = Mesh::new(name);
        mesh.set_vertices::<VertexPosition>(positions);
        mesh.set_vertices::<VertexNormal>(normals);
        mesh.set_vertices::<VertexTexture>(tex_uvs);
        mesh.set_indices(indices);
        mesh
    }

    /// Constructs a horizontal rectangle centered at the origin, facing up
    ///
    /// `texture_size` is the world size covered by one repetition of the texture.
    pub fn rectangle(name: impl ToString, width: f32, depth: f32, texture_size: f32) -> Self {
        let half_width = width / 2.0;
        let half_depth = depth / 2.0;
        let repeat_u = if texture_size > 0.0 { width / texture_size } else { 1.0 };
        let repeat_v = if texture_size > 0.0 { depth / texture_size } else { 1.0 };

        let positions = vec![
            [-half_width, 0.0, half_depth],
            [half_width, 0.0, half_depth],
            [half_width, 0.0, -half_depth],
            [-half_width, 0.0, -half_depth],
        ];
        let normal: [f32; 3] = Vec3::unit_y().normalize().into();
        let tex_uvs: Vec<[f32; 2]> = QUAD_UVS
            .iter()
            .map(|uv| [uv[0] * repeat_u, uv[1] * repeat_v])
            .collect();

        let mut mesh = Mesh::new(name);
        mesh.set_vertices::<VertexPosition>(positions);
        mesh.set_vertices::<VertexNormal>(vec![normal; 4]);
        mesh.set_vertices::<VertexTexture>(tex_uvs);
        mesh.set_indices(QUAD_INDICES.to_vec());
        mesh
    }
}
