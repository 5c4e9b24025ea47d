//! Static terrain grid mesh with smooth per-vertex normals.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::heightmap::Heightmap;
use crate::params::TerrainParams;

/// Vertex data for the terrain mesh (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Terrain grid mesh, built once at startup and read-only afterwards.
pub struct TerrainMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    /// Build the mesh by sampling the fractal heightmap over the grid.
    pub fn generate(params: &TerrainParams, heightmap: &Heightmap) -> Self {
        Self::from_height_fn(params, |x, z| heightmap.height(x, z))
    }

    /// Build the mesh from an arbitrary height function.
    ///
    /// The grid spans [-1, 1] on both plane axes, row-major with x varying
    /// fastest. UVs repeat `texture_tiling` times across the full extent so
    /// textures tile instead of stretching.
    pub fn from_height_fn(params: &TerrainParams, height: impl Fn(f32, f32) -> f32) -> Self {
        let width = params.grid_width;
        let depth = params.grid_depth;
        assert!(
            width >= 2 && depth >= 2,
            "terrain grid needs at least 2x2 vertices, got {width}x{depth}"
        );

        let mut vertices = Vec::with_capacity(width * depth);
        for z in 0..depth {
            for x in 0..width {
                let xc = -1.0 + 2.0 * x as f32 / (width - 1) as f32;
                let zc = -1.0 + 2.0 * z as f32 / (depth - 1) as f32;
                let yc = height(xc, zc);
                vertices.push(Vertex {
                    position: [xc, yc, zc],
                    normal: [0.0; 3],
                    uv: [
                        params.texture_tiling * x as f32 / (width - 1) as f32,
                        params.texture_tiling * z as f32 / (depth - 1) as f32,
                    ],
                });
            }
        }

        // Two triangles per grid cell, counter-clockwise winding so the
        // front faces point up out of the heightfield.
        let mut indices = Vec::with_capacity(6 * (width - 1) * (depth - 1));
        for z in 0..depth - 1 {
            for x in 0..width - 1 {
                let i = (z * width + x) as u32;
                let below = i + width as u32;
                indices.extend_from_slice(&[i, below, i + 1]);
                indices.extend_from_slice(&[i + 1, below, below + 1]);
            }
        }

        let mut mesh = Self { vertices, indices };
        mesh.compute_smooth_normals(params.normalize_normals);
        mesh
    }

    /// Average adjacent face normals into each vertex for smooth shading.
    ///
    /// When `renormalize` is false the raw mean is kept, matching the
    /// reference behaviour; true rescales each result to unit length.
    fn compute_smooth_normals(&mut self, renormalize: bool) {
        let mut accumulated = vec![Vec3::ZERO; self.vertices.len()];
        let mut share_count = vec![0u32; self.vertices.len()];

        for tri in self.indices.chunks_exact(3) {
            let (i1, i2, i3) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let p1 = Vec3::from_array(self.vertices[i1].position);
            let p2 = Vec3::from_array(self.vertices[i2].position);
            let p3 = Vec3::from_array(self.vertices[i3].position);

            let face_normal = (p2 - p1).cross(p3 - p1).normalize();

            accumulated[i1] += face_normal;
            accumulated[i2] += face_normal;
            accumulated[i3] += face_normal;
            share_count[i1] += 1;
            share_count[i2] += 1;
            share_count[i3] += 1;
        }

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            if share_count[i] == 0 {
                continue; // Cannot happen on a fully tiled grid
            }
            let mut normal = accumulated[i] / share_count[i] as f32;
            if renormalize {
                normal = normal.normalize_or_zero();
            }
            vertex.normal = normal.to_array();
        }
    }
}

/// Build the terrain mesh for a `width` x `depth` grid with the default
/// fractal parameters, returning the raw vertex and index buffers.
pub fn build_mesh(width: usize, depth: usize, seed: i32) -> (Vec<Vertex>, Vec<u32>) {
    let params = TerrainParams {
        grid_width: width,
        grid_depth: depth,
        seed,
        ..TerrainParams::default()
    };
    let mesh = TerrainMesh::generate(&params, &Heightmap::new(&params));
    (mesh.vertices, mesh.indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::generate_height;

    fn params_for(width: usize, depth: usize, seed: i32) -> TerrainParams {
        TerrainParams {
            grid_width: width,
            grid_depth: depth,
            seed,
            ..TerrainParams::default()
        }
    }

    #[test]
    fn test_mesh_size_invariants() {
        for (w, d) in [(2, 2), (2, 5), (5, 2), (8, 8), (16, 9)] {
            let (vertices, indices) = build_mesh(w, d, 11);
            assert_eq!(vertices.len(), w * d);
            assert_eq!(indices.len(), 6 * (w - 1) * (d - 1));
        }
    }

    #[test]
    fn test_indices_in_bounds_and_no_orphan_vertices() {
        let (vertices, indices) = build_mesh(9, 7, 3);
        let mut referenced = vec![false; vertices.len()];
        for &i in &indices {
            assert!((i as usize) < vertices.len(), "index {i} out of bounds");
            referenced[i as usize] = true;
        }
        assert!(referenced.iter().all(|&r| r), "orphan vertex in tiled grid");
    }

    #[test]
    fn test_flat_field_gives_up_normals() {
        let params = params_for(6, 6, 0);
        let mesh = TerrainMesh::from_height_fn(&params, |_, _| 0.0);
        for vertex in &mesh.vertices {
            let n = Vec3::from_array(vertex.normal);
            assert!(
                (n - Vec3::Y).length() < 1e-6,
                "flat mesh normal {:?} is not +y",
                vertex.normal
            );
        }
    }

    #[test]
    fn test_face_normals_point_upward() {
        // A heightfield triangle projects to positive area on the XZ plane,
        // so every face normal must land in the +y hemisphere.
        let (vertices, indices) = build_mesh(16, 16, 42);
        for tri in indices.chunks_exact(3) {
            let p1 = Vec3::from_array(vertices[tri[0] as usize].position);
            let p2 = Vec3::from_array(vertices[tri[1] as usize].position);
            let p3 = Vec3::from_array(vertices[tri[2] as usize].position);
            let n = (p2 - p1).cross(p3 - p1);
            assert!(n.y > 0.0, "downward face normal {n:?}");
        }
    }

    #[test]
    fn test_build_mesh_is_reproducible() {
        let (va, ia) = build_mesh(8, 8, 42);
        let (vb, ib) = build_mesh(8, 8, 42);
        assert_eq!(va, vb);
        assert_eq!(ia, ib);
    }

    #[test]
    fn test_two_by_two_grid() {
        let (vertices, indices) = build_mesh(2, 2, 0);

        assert_eq!(indices, vec![0, 2, 1, 1, 2, 3]);

        let corners = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
        for (vertex, &(x, z)) in vertices.iter().zip(&corners) {
            assert_eq!(vertex.position[0], x);
            assert_eq!(vertex.position[2], z);
            assert_eq!(
                vertex.position[1].to_bits(),
                generate_height(x, z, 0).to_bits()
            );
        }
    }

    #[test]
    fn test_uv_tiling_spans_full_range() {
        let (vertices, _) = build_mesh(5, 5, 1);
        assert_eq!(vertices.first().unwrap().uv, [0.0, 0.0]);
        assert_eq!(vertices.last().unwrap().uv, [8.0, 8.0]);
    }

    #[test]
    fn test_renormalized_normals_are_unit_length() {
        let params = TerrainParams {
            normalize_normals: true,
            ..params_for(12, 12, 7)
        };
        let mesh = TerrainMesh::generate(&params, &Heightmap::new(&params));
        for vertex in &mesh.vertices {
            let len = Vec3::from_array(vertex.normal).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn test_unnormalized_interior_normals_not_longer_than_unit() {
        // The mean of unit vectors has length <= 1; strictly less wherever
        // adjacent faces disagree.
        let (vertices, _) = build_mesh(12, 12, 7);
        for vertex in &vertices {
            let len = Vec3::from_array(vertex.normal).length();
            assert!(len <= 1.0 + 1e-5, "averaged normal length {len} > 1");
        }
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn test_degenerate_grid_asserts() {
        build_mesh(1, 4, 0);
    }
}
