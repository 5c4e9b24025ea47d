//! Texture asset loading.
//!
//! Decodes image files into RGBA8 pixel buffers for the renderer to upload.
//! A missing or unreadable asset falls back to a flat colour with a warning
//! instead of aborting, so the demo runs without any assets on disk.

use crate::params::TextureConfig;

/// Decoded RGBA8 pixel buffer
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Single-colour placeholder texture.
    fn flat(rgb: [u8; 3]) -> Self {
        let size = 4u32;
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for _ in 0..size * size {
            pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }
}

/// The three terrain surface textures blended by the shader.
pub struct TextureSet {
    pub rock: TextureImage,
    pub grass: TextureImage,
    pub snow: TextureImage,
}

impl TextureSet {
    /// Load the configured assets, substituting flat colours on failure.
    pub fn load(config: &TextureConfig) -> Self {
        Self {
            rock: load_or_fallback(&config.rock_path, [110, 100, 95]),
            grass: load_or_fallback(&config.grass_path, [60, 110, 45]),
            snow: load_or_fallback(&config.snow_path, [235, 238, 245]),
        }
    }
}

fn load_or_fallback(path: &str, fallback_rgb: [u8; 3]) -> TextureImage {
    match image::open(path) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            TextureImage {
                width,
                height,
                pixels: rgba.into_raw(),
            }
        }
        Err(e) => {
            eprintln!("Warning: failed to load texture '{}': {}, using flat colour", path, e);
            TextureImage::flat(fallback_rgb)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_falls_back_to_flat_colour() {
        let tex = load_or_fallback("/nonexistent/texture.jpg", [1, 2, 3]);
        assert_eq!(tex.pixels.len(), (tex.width * tex.height * 4) as usize);
        assert_eq!(&tex.pixels[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_texture_set_loads_without_assets() {
        let set = TextureSet::load(&TextureConfig::default());
        for tex in [&set.rock, &set.grass, &set.snow] {
            assert!(tex.width > 0 && tex.height > 0);
            assert_eq!(tex.pixels.len(), (tex.width * tex.height * 4) as usize);
        }
    }
}
