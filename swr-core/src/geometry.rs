//! Geometry containers: vertices, polygons and meshes.
use nalgebra::Point3;

use crate::error::AllocationError;

/// A vertex position in model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f32>,
}

impl Vertex {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// An ordered run of vertices. Insertion order is winding order; rendering
/// treats the sequence as a closed loop, so the last vertex connects back to
/// the first. A polygon with no vertices is valid and draws nothing.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Builds a polygon pre-grown to `count` zeroed vertices.
    pub fn with_vertices(count: usize) -> Result<Self, AllocationError> {
        let mut polygon = Self::new();
        polygon.add_vertices(count)?;
        Ok(polygon)
    }

    /// Appends `count` zero-initialized vertices and returns the index of the
    /// first one added. On failure the polygon is left untouched.
    pub fn add_vertices(&mut self, count: usize) -> Result<usize, AllocationError> {
        self.vertices.try_reserve(count)?;
        let first = self.vertices.len();
        self.vertices.resize(first + count, Vertex::default());
        Ok(first)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// An ordered collection of polygons, each owned exclusively by the mesh.
/// Growth only appends, so polygon indices stay stable for the life of the
/// mesh; the scene treats a mesh as immutable once construction is done.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub polygons: Vec<Polygon>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }

    /// Appends `count` empty polygons and returns the index of the first one
    /// added. On failure the mesh is left untouched.
    pub fn add_polygons(&mut self, count: usize) -> Result<usize, AllocationError> {
        self.polygons.try_reserve(count)?;
        let first = self.polygons.len();
        self.polygons.resize(first + count, Polygon::new());
        Ok(first)
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Builds the demo cube: six quads wound to match the baseline scene.
    pub fn cube(size: f32) -> Result<Self, AllocationError> {
        const FACES: [[[f32; 3]; 4]; 6] = [
            // Front
            [[-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0]],
            // Top
            [[-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0]],
            // Back
            [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
            // Bottom
            [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
            // Left
            [[-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0]],
            // Right
            [[1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0]],
        ];

        let half = size / 2.0;
        let mut mesh = Self::new();
        let first = mesh.add_polygons(FACES.len())?;

        for (polygon, corners) in mesh.polygons[first..].iter_mut().zip(FACES) {
            let base = polygon.add_vertices(corners.len())?;
            for (vertex, [x, y, z]) in polygon.vertices[base..].iter_mut().zip(corners) {
                *vertex = Vertex::new(x * half, y * half, z * half);
            }
        }

        Ok(mesh)
    }
}
