use std::any::TypeId;
use std::collections::HashMap;

use crate::loaders::Asset;
use crate::math::Vec3;

use super::{AttributeFormat, VertexAttribute, VertexPosition};

/// Primitive topology of a mesh
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    #[default]
    TriangleList,
}

/// Axis aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
    /// `max - min`
    pub dimensions: Vec3,
}

impl Bounds {
    /// Computes bounds of a set of points, empty set gives zero bounds
    pub fn from_positions(positions: &[[f32; 3]]) -> Self {
        let mut iter = positions.iter().map(|p| Vec3::from(*p));
        let first = match iter.next() {
            Some(first) => first,
            None => return Self::default(),
        };
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                Vec3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z)),
                Vec3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z)),
            )
        });
        Self {
            min,
            max,
            dimensions: max - min,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        let zero = Vec3::new(0.0, 0.0, 0.0);
        Self {
            min: zero,
            max: zero,
            dimensions: zero,
        }
    }
}

/// 3D Model Mesh
///
/// Meshes are shared between props and avatars through `Arc<Mesh>`; the data
/// is released when the last holder drops its handle.
pub struct Mesh {
    name: String,
    vertices: HashMap<TypeId, AttributeValues>,
    vertices_count: usize,
    indices: Option<Vec<u32>>,
    topology: Topology,
    bounds: Bounds,
}

impl Mesh {
    /// Constructs new Mesh instance
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            vertices: HashMap::new(),
            vertices_count: 0,
            indices: None,
            topology: Topology::default(),
            bounds: Bounds::default(),
        }
    }

    /// Sets vertices attributes by Type
    ///
    /// Setting positions recalculates the bounding box.
    pub fn set_vertices<A: VertexAttribute>(&mut self, values: Vec<A::Raw>) {
        let vertices_count = values.len();

        if self.vertices_count != vertices_count {
            if self.vertices.keys().any(|t| *t != TypeId::of::<A>()) {
                panic!(
                    "Mesh '{}' has {} vertices, but attribute '{}' was given with {} values.",
                    self.name,
                    self.vertices_count,
                    A::name(),
                    vertices_count
                );
            }
            self.vertices_count = vertices_count;
        }

        if TypeId::of::<A>() == TypeId::of::<VertexPosition>() {
            self.bounds = Bounds::from_positions(bytemuck::cast_slice::<A::Raw, [f32; 3]>(&values));
        }

        let format = A::format();
        let bytes: Vec<u8> = bytemuck::cast_slice(&values).to_vec();

        self.vertices
            .insert(TypeId::of::<A>(), AttributeValues { format, bytes });
    }

    /// Returns vertices attributes if exists
    pub fn vertices<A: VertexAttribute>(&self) -> Option<Vec<A::Raw>> {
        self.vertices
            .get(&TypeId::of::<A>())
            .map(|values| bytemuck::pod_collect_to_vec::<u8, A::Raw>(&values.bytes))
    }

    /// Sets mesh indices
    pub fn set_indices(&mut self, indices: Vec<u32>) {
        self.indices = Some(indices);
    }

    /// Returns mesh indices
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns number of vertices
    pub fn count_vertices(&self) -> usize {
        self.vertices_count
    }

    /// Returns number of faces (polygons) in the mesh
    pub fn count_faces(&self) -> usize {
        self.indices
            .as_ref()
            .map(|i| i.len())
            .unwrap_or(self.vertices_count)
            / 3
    }

    /// Returns axis aligned bounding box of vertices positions
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Returns vector of vertex buffer data according to layout defined by attributes types
    pub fn buffer<T: VertexBufferLayout>(&self) -> Option<Vec<u8>> {
        self.buffer_from_layout(&T::layout())
    }

    pub fn contains<T: VertexBufferLayout>(&self) -> bool {
        self.has_layout(&T::layout())
    }

    pub fn has_layout(&self, layout: &[TypeId]) -> bool {
        layout.iter().all(|t| self.vertices.contains_key(t))
    }

    /// Returns vector of interleaved vertex buffer data according to layout
    pub fn buffer_from_layout(&self, layout: &[TypeId]) -> Option<Vec<u8>> {
        let attributes = layout
            .iter()
            .map(|t| self.vertices.get(t))
            .collect::<Option<Vec<_>>>()?;
        let vertex_size: usize = attributes.iter().map(|a| a.format.size()).sum();

        let mut buffer = Vec::with_capacity(vertex_size * self.vertices_count);
        for i in 0..self.vertices_count {
            for values in attributes.iter() {
                let size = values.format.size();
                let offset = i * size;
                buffer.extend_from_slice(&values.bytes[offset..offset + size]);
            }
        }
        Some(buffer)
    }
}

struct AttributeValues {
    format: AttributeFormat,
    bytes: Vec<u8>,
}

/// Interleaved vertex buffer layout made of a tuple of attributes
pub trait VertexBufferLayout {
    fn layout() -> Vec<TypeId>;
    fn vertex_size() -> usize;
    /// Number of components of every attribute in order
    fn arities() -> Vec<usize>;
}

macro_rules! impl_layout {
    (($($i: ident),*)) => {
        impl<$($i,)*> VertexBufferLayout for ($($i,)*)
        where
            $($i: VertexAttribute,)*
        {
            fn layout() -> Vec<TypeId> {
                vec![
                    $(TypeId::of::<$i>(),)*
                ]
            }

            fn vertex_size() -> usize {
                0 $(+ ($i::format()).size())*
            }

            fn arities() -> Vec<usize> {
                vec![
                    $($i::format().components(),)*
                ]
            }
        }
    }
}

impl_layout!((A));
impl_layout!((A, B));
impl_layout!((A, B, C));
impl_layout!((A, B, C, D));
impl_layout!((A, B, C, D, E));
impl_layout!((A, B, C, D, E, F));
impl_layout!((A, B, C, D, E, F, G));
impl_layout!((A, B, C, D, E, F, G, H));

impl Asset for Mesh {
    fn name(&self) -> &str {
        &self.name
    }
}
