//! Parameter definitions with documented defaults.
//!
//! All magic numbers from the terrain, camera and rendering layers live here
//! with their units and meanings, so the systems themselves stay free of
//! bare constants.

/// Terrain generation parameters
#[derive(Debug, Clone)]
pub struct TerrainParams {
    /// Grid vertices along x (must be >= 2)
    pub grid_width: usize,

    /// Grid vertices along z (must be >= 2)
    pub grid_depth: usize,

    /// Fractal octave count (each octave doubles frequency, halves amplitude)
    pub octaves: u32,

    /// Amplitude of the first octave (world units)
    pub verticality: f32,

    /// Texture repeats across the full mesh extent
    pub texture_tiling: f32,

    /// Renormalize averaged vertex normals to unit length.
    /// Off by default: the reference behaviour keeps the raw mean, which
    /// slightly darkens vertices whose neighbouring faces disagree.
    pub normalize_normals: bool,

    /// Noise seed. Fixed for the whole run; drawn at startup or set via CLI.
    pub seed: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            grid_width: 128,
            grid_depth: 128,
            octaves: 8,
            verticality: 0.35,
            texture_tiling: 8.0,
            normalize_normals: false,
            seed: 0,
        }
    }
}

/// Fly camera parameters
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Starting position (world units)
    pub position: [f32; 3],

    /// Starting yaw (degrees, -90 looks down -z)
    pub yaw_deg: f32,

    /// Starting pitch (degrees)
    pub pitch_deg: f32,

    /// Pitch clamp (degrees, prevents the view flipping over the poles)
    pub pitch_limit_deg: f32,

    /// Mouse-look sensitivity (degrees per pixel of mouse travel)
    pub mouse_sensitivity: f32,

    /// Movement speed (world units per millisecond of frame time)
    pub speed_per_ms: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            position: [0.0, 1.0, 2.0], // Above the terrain, slightly back
            yaw_deg: -90.0,
            pitch_deg: 0.0,
            pitch_limit_deg: 89.0,
            mouse_sensitivity: 0.2,
            speed_per_ms: 0.001,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Clear colour (sky), linear RGB
    pub sky_color: [f64; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            fov_degrees: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
            sky_color: [0.18, 0.37, 0.54],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Lighting parameters fed to the terrain shader
#[derive(Debug, Clone)]
pub struct LightingParams {
    /// Directional light position/direction (normalized in the shader)
    pub light_dir: [f32; 3],

    /// Ambient floor so unlit faces stay visible
    pub ambient: f32,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            light_dir: [0.8, 1.0, 0.9],
            ambient: 0.3,
        }
    }
}

/// Texture asset paths
#[derive(Debug, Clone)]
pub struct TextureConfig {
    /// Rock texture path
    pub rock_path: String,

    /// Grass texture path
    pub grass_path: String,

    /// Snow texture path
    pub snow_path: String,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            rock_path: "assets/rock.jpg".to_string(),
            grass_path: "assets/grass.jpg".to_string(),
            snow_path: "assets/snow.jpg".to_string(),
        }
    }
}
