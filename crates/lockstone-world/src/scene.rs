//! Scene files: a flat list of block placements, with optional sign text.
//!
//! ```toml
//! [[blocks]]
//! at = [0, 64, 0]
//! name = "wall_sign"
//! props = { facing = "north" }
//! lines = ["[Private]", "alice"]
//! ```

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use lockstone_blocks::BlockRegistry;
use lockstone_geom::BlockPos;
use serde::Deserialize;

use crate::store::SparseWorld;
use crate::view::BlockSource;

pub const MAX_SIGN_LINES: usize = 4;

#[derive(Deserialize, Debug, Default)]
pub struct SceneConfig {
    #[serde(default)]
    pub blocks: Vec<Placement>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Placement {
    pub at: [i32; 3],
    pub name: String,
    #[serde(default)]
    pub props: HashMap<String, String>,
    #[serde(default)]
    pub lines: Option<Vec<String>>,
}

impl SceneConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("reading scene {}: {}", path.display(), e))?;
        Self::from_toml_str(&text)
    }

    /// Builds a world from the placements. Later placements overwrite earlier ones.
    pub fn build(self, registry: BlockRegistry) -> Result<SparseWorld, Box<dyn Error>> {
        let mut world = SparseWorld::new(registry);
        for p in self.blocks {
            let pos = BlockPos::from(p.at);
            let block = world
                .make_block(pos, &p.name, &p.props)
                .map_err(|e| format!("scene: {}", e))?;
            world.set(pos, block);
            let Some(lines) = p.lines else {
                continue;
            };
            if !world.registry().kind(block).is_sign() {
                log::warn!("scene: ignoring text on non-sign `{}` at {}", p.name, pos);
                continue;
            }
            if lines.len() > MAX_SIGN_LINES {
                return Err(format!(
                    "scene: sign at {} has {} lines (max {})",
                    pos,
                    lines.len(),
                    MAX_SIGN_LINES
                )
                .into());
            }
            world.set_sign_lines(pos, lines);
        }
        let stats = world.stats();
        log::info!(
            "scene loaded: {} block(s), {} sign(s) in {} chunk(s)",
            stats.blocks,
            stats.signs,
            stats.chunk_entries
        );
        Ok(world)
    }
}
