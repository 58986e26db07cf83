//! Texture loading and face-binding handles
//!
//! Face bindings only accept handles minted by a successfully loaded
//! texture, so generated geometry can never reference an asset that
//! failed to decode.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::types::Result;

/// Named reference to a loaded texture, usable as a cuboid face binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextureRef(String);

impl TextureRef {
    /// Texture name this reference points at.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A named texture backed by a decoded image file.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    name: String,
    source: PathBuf,
    width: u32,
    height: u32,
}

impl Texture {
    /// Load and decode a texture file, returning a named handle for it.
    pub fn load_from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Texture> {
        let path = path.as_ref();
        let image = image::open(path)?;
        let name = name.into();
        log::debug!(
            "loaded texture '{}' from {} ({}x{})",
            name,
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Texture {
            name,
            source: path.to_path_buf(),
            width: image.width(),
            height: image.height(),
        })
    }

    /// Texture name used in face bindings and the packaged file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path the texture was decoded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mint a face-binding reference to this texture.
    pub fn handle(&self) -> TextureRef {
        TextureRef(self.name.clone())
    }
}

/// Write a small placeholder texture to `dir` and load it.
///
/// Helper for tests and benches that need a real, decodable asset.
pub fn create_test_texture(dir: &Path, name: &str) -> Texture {
    let path = dir.join(format!("{name}.png"));
    let image = image::RgbaImage::from_pixel(16, 16, image::Rgba([232, 110, 20, 255]));
    image.save(&path).expect("failed to write test texture");
    Texture::load_from_file(name, &path).expect("failed to load test texture")
}
