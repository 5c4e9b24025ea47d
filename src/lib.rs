//! Terraflight library - procedural heightmap terrain flyover

pub mod camera;
pub mod cli;
pub mod noise;
pub mod params;
pub mod rendering;
pub mod terrain;
pub mod texture;
