//! Procedural heightmap terrain: fractal height field and static mesh.

pub mod heightmap;
pub mod mesh;

pub use heightmap::{generate_height, Heightmap};
pub use mesh::{build_mesh, TerrainMesh, Vertex};
