//! Command-line argument parsing.

use clap::Parser;

use crate::params::TerrainParams;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Terraflight")]
#[command(about = "Procedural heightmap terrain flyover", long_about = None)]
pub struct Args {
    /// Terrain seed (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<i32>,

    /// Grid vertices along x
    #[arg(long, value_name = "N", default_value_t = 128)]
    pub grid_width: usize,

    /// Grid vertices along z
    #[arg(long, value_name = "N", default_value_t = 128)]
    pub grid_depth: usize,

    /// Renormalize averaged vertex normals to unit length
    #[arg(long)]
    pub normalize_normals: bool,
}

impl Args {
    /// Resolve the terrain seed: explicit value, or a fresh random draw.
    pub fn resolve_seed(&self) -> i32 {
        match self.seed {
            Some(seed) => {
                println!("Terrain seed: {} (from --seed)", seed);
                seed
            }
            None => {
                let seed: i32 = rand::random();
                println!("Terrain seed: {}", seed);
                seed
            }
        }
    }

    /// Build terrain parameters from the arguments and resolved seed.
    pub fn terrain_params(&self, seed: i32) -> TerrainParams {
        if self.grid_width < 2 || self.grid_depth < 2 {
            eprintln!(
                "Error: grid dimensions must be at least 2x2, got {}x{}",
                self.grid_width, self.grid_depth
            );
            std::process::exit(1);
        }
        TerrainParams {
            grid_width: self.grid_width,
            grid_depth: self.grid_depth,
            normalize_normals: self.normalize_normals,
            seed,
            ..TerrainParams::default()
        }
    }
}
