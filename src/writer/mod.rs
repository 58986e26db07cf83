//! Mod packaging: serializes the definition tree to a mod directory
//!
//! Layout under the target directory:
//!   <target>/<mod_id>/
//!     blocks/<name>.json
//!     triggers/<name>.json
//!     textures/blocks/<name>.png

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use crate::block::Block;
use crate::core::error::Error;
use crate::core::types::Result;
use crate::texture::Texture;
use crate::trigger::TriggerSheet;

/// A complete mod definition: blocks, trigger sheets, and textures,
/// assembled once by the pipeline and written read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Mod {
    id: String,
    blocks: Vec<Block>,
    sheets: Vec<TriggerSheet>,
    textures: Vec<Texture>,
}

impl Mod {
    /// Empty mod with the given id.
    pub fn new(id: impl Into<String>) -> Mod {
        Mod {
            id: id.into(),
            blocks: Vec::new(),
            sheets: Vec::new(),
            textures: Vec::new(),
        }
    }

    /// Mod id, the top-level directory name in the packaged layout.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register a block definition.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Register a trigger sheet.
    pub fn add_trigger_sheet(&mut self, sheet: TriggerSheet) {
        self.sheets.push(sheet);
    }

    /// Register a texture asset.
    pub fn add_texture(&mut self, texture: Texture) {
        self.textures.push(texture);
    }

    /// Registered blocks.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Registered trigger sheets.
    pub fn sheets(&self) -> &[TriggerSheet] {
        &self.sheets
    }

    /// Registered textures.
    pub fn textures(&self) -> &[Texture] {
        &self.textures
    }

    /// Check every face-bound texture name against the registered
    /// textures.
    fn validate_textures(&self) -> Result<()> {
        let known: HashSet<&str> = self.textures.iter().map(|t| t.name()).collect();
        for block in &self.blocks {
            for state in block.states() {
                for cuboid in &state.model.cuboids {
                    for texture in cuboid.faces.bound() {
                        if !known.contains(texture.name()) {
                            return Err(Error::UnresolvedTexture {
                                block: block.string_id().to_string(),
                                texture: texture.name().to_string(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Writes a mod definition into the host's mods directory layout.
pub struct Writer {
    target: PathBuf,
}

impl Writer {
    /// Writer targeting the given mods directory.
    pub fn new(target: impl Into<PathBuf>) -> Writer {
        Writer { target: target.into() }
    }

    /// Serialize the full definition tree under `<target>/<mod id>/`,
    /// returning the mod's root directory.
    ///
    /// Refuses to write geometry referencing a texture the mod does not
    /// carry.
    pub fn write(&self, artifact: &Mod) -> Result<PathBuf> {
        artifact.validate_textures()?;

        let root = self.target.join(artifact.id());
        let block_dir = root.join("blocks");
        let trigger_dir = root.join("triggers");
        let texture_dir = root.join("textures").join("blocks");
        fs::create_dir_all(&block_dir)?;
        fs::create_dir_all(&trigger_dir)?;
        fs::create_dir_all(&texture_dir)?;

        for block in artifact.blocks() {
            let path = block_dir.join(format!("{}.json", short_name(block.string_id())));
            fs::write(&path, serde_json::to_string_pretty(block)?)?;
            log::info!("wrote {}", path.display());
        }

        for sheet in artifact.sheets() {
            let path = trigger_dir.join(format!("{}.json", short_name(sheet.string_id())));
            fs::write(&path, serde_json::to_string_pretty(sheet)?)?;
            log::info!("wrote {}", path.display());
        }

        for texture in artifact.textures() {
            let path = texture_dir.join(format!("{}.png", texture.name()));
            fs::copy(texture.source(), &path)?;
            log::info!("wrote {}", path.display());
        }

        Ok(root)
    }
}

/// Name portion of a "mod:name" string id.
fn short_name(string_id: &str) -> &str {
    string_id.rsplit(':').next().unwrap_or(string_id)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::generation::{FireConfig, FirePipeline};
    use crate::texture::create_test_texture;
    use crate::trigger::NoDefaultEvents;

    use super::*;

    #[test]
    fn test_write_produces_the_mod_layout() {
        let assets = TempDir::new().expect("failed to create temp dir");
        let out = TempDir::new().expect("failed to create temp dir");

        let texture = create_test_texture(assets.path(), "flame");
        let artifact = FirePipeline::new(FireConfig::default())
            .generate(texture, &NoDefaultEvents);

        let root = Writer::new(out.path()).write(&artifact).expect("write failed");

        assert_eq!(root, out.path().join("fire"));
        assert!(root.join("blocks/fire.json").is_file());
        assert!(root.join("triggers/fire.json").is_file());
        assert!(root.join("textures/blocks/flame.png").is_file());
    }

    #[test]
    fn test_written_documents_parse_back() {
        let assets = TempDir::new().expect("failed to create temp dir");
        let out = TempDir::new().expect("failed to create temp dir");

        let texture = create_test_texture(assets.path(), "flame");
        let artifact = FirePipeline::new(FireConfig::default())
            .generate(texture, &NoDefaultEvents);
        let root = Writer::new(out.path()).write(&artifact).expect("write failed");

        let block_json = fs::read_to_string(root.join("blocks/fire.json")).expect("read failed");
        let block: serde_json::Value = serde_json::from_str(&block_json).expect("parse failed");
        assert_eq!(block["stringId"], "fire:fire");
        assert_eq!(block["states"].as_object().expect("states not a map").len(), 128);

        let sheet_json =
            fs::read_to_string(root.join("triggers/fire.json")).expect("read failed");
        let sheet: serde_json::Value = serde_json::from_str(&sheet_json).expect("parse failed");
        let triggers = sheet["triggers"].as_object().expect("triggers not a map");
        assert_eq!(triggers["spreadFire"].as_array().expect("not a list").len(), 372);
    }

    #[test]
    fn test_unresolved_texture_is_refused() {
        let assets = TempDir::new().expect("failed to create temp dir");
        let out = TempDir::new().expect("failed to create temp dir");

        let texture = create_test_texture(assets.path(), "flame");
        let mut artifact = FirePipeline::new(FireConfig::default())
            .generate(texture, &NoDefaultEvents);

        // Strip the texture registration; the face bindings remain.
        let mut stripped = Mod::new(artifact.id());
        for block in artifact.blocks() {
            stripped.add_block(block.clone());
        }
        for sheet in artifact.sheets() {
            stripped.add_trigger_sheet(sheet.clone());
        }
        artifact = stripped;

        let result = Writer::new(out.path()).write(&artifact);
        assert!(matches!(
            result,
            Err(Error::UnresolvedTexture { ref texture, .. }) if texture == "flame"
        ));
    }
}
