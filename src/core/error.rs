//! Error types for the generator

use thiserror::Error;

/// Main error type for the generator
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Texture error: {0}")]
    Texture(#[from] image::ImageError),

    #[error("block '{block}' references unresolved texture '{texture}'")]
    UnresolvedTexture { block: String, texture: String },
}
