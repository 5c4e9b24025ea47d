//! Fractal height field built from layered value noise.

use crate::noise::noise2d;
use crate::params::TerrainParams;

/// Multi-octave height function over the (x, z) plane.
///
/// Each octave doubles the spatial frequency and halves the amplitude, so
/// large rolling shapes carry progressively finer detail on top. Pure given
/// its seed; every sample is independent.
#[derive(Debug, Clone, Copy)]
pub struct Heightmap {
    seed: i32,
    octaves: u32,
    verticality: f32,
}

impl Heightmap {
    pub fn new(params: &TerrainParams) -> Self {
        Self {
            seed: params.seed,
            octaves: params.octaves,
            verticality: params.verticality,
        }
    }

    /// Sample the terrain height at `(x, z)`.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let mut h = 0.0;
        for i in 0..self.octaves {
            let pow2 = (1u32 << i) as f32;
            let amplitude = self.verticality / pow2;
            let frequency = pow2;
            h += amplitude * noise2d(x, z, self.seed, frequency);
        }
        h
    }
}

/// Height at `(x, z)` with the default octave count and verticality.
///
/// Convenience entry point for callers that only carry a seed.
pub fn generate_height(x: f32, z: f32, seed: i32) -> f32 {
    let params = TerrainParams {
        seed,
        ..TerrainParams::default()
    };
    Heightmap::new(&params).height(x, z)
}
