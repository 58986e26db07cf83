//! Cuboid render models with per-face texture bindings

use serde::Serialize;

use crate::direction::Direction;
use crate::texture::TextureRef;

/// Axis-aligned cuboid in 1/16th block units, with an optional texture
/// bound to each of its six faces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cuboid {
    /// Corner bounds as (x0, y0, z0, x1, y1, z1).
    pub bounds: [i32; 6],
    pub faces: FaceTextures,
}

impl Cuboid {
    /// Untextured cuboid spanning the given corner bounds.
    pub fn new(bounds: [i32; 6]) -> Cuboid {
        Cuboid { bounds, faces: FaceTextures::default() }
    }

    /// Bind `texture` to the face on the given side.
    pub fn set_face(&mut self, side: Direction, texture: TextureRef) {
        *self.faces.slot(side) = Some(texture);
    }
}

/// Optional texture reference per cuboid face.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FaceTextures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub north: Option<TextureRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub east: Option<TextureRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub south: Option<TextureRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub west: Option<TextureRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up: Option<TextureRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down: Option<TextureRef>,
}

impl FaceTextures {
    fn slot(&mut self, side: Direction) -> &mut Option<TextureRef> {
        match side {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    /// Iterate the faces that have a texture bound.
    pub fn bound(&self) -> impl Iterator<Item = &TextureRef> {
        [&self.north, &self.east, &self.south, &self.west, &self.up, &self.down]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
    }
}

/// Render model for one block state: transparency flag plus cuboid list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockModel {
    pub transparent: bool,
    pub cuboids: Vec<Cuboid>,
}

impl BlockModel {
    /// Empty model with the given transparency flag.
    pub fn new(transparent: bool) -> BlockModel {
        BlockModel { transparent, cuboids: Vec::new() }
    }

    /// Append a cuboid.
    pub fn push(&mut self, cuboid: Cuboid) {
        self.cuboids.push(cuboid);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::texture::create_test_texture;

    #[test]
    fn test_face_binding() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let texture = create_test_texture(dir.path(), "flame");

        let mut cuboid = Cuboid::new([0, 0, 1, 16, 16, 1]);
        cuboid.set_face(Direction::South, texture.handle());

        let bound: Vec<&str> = cuboid.faces.bound().map(|t| t.name()).collect();
        assert_eq!(bound, ["flame"]);
    }

    #[test]
    fn test_model_document_shape() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let texture = create_test_texture(dir.path(), "flame");

        let mut model = BlockModel::new(true);
        let mut cuboid = Cuboid::new([0, 15, 0, 16, 15, 16]);
        cuboid.set_face(Direction::Down, texture.handle());
        model.push(cuboid);

        let doc = serde_json::to_value(&model).expect("serialize failed");
        assert_eq!(
            doc,
            json!({
                "transparent": true,
                "cuboids": [
                    { "bounds": [0, 15, 0, 16, 15, 16], "faces": { "down": "flame" } }
                ]
            })
        );
    }
}
