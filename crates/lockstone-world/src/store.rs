use std::collections::HashMap;
use std::error::Error;

use lockstone_blocks::{Block, BlockRegistry};
use lockstone_geom::BlockPos;

use crate::view::{BlockRef, BlockSource};

pub const DEFAULT_CHUNK_SIZE: i32 = 16;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    pub chunk_entries: usize,
    pub blocks: usize,
    pub signs: usize,
}

/// Chunk-keyed store of explicitly placed blocks. Everything else is air.
#[derive(Debug)]
pub struct SparseWorld {
    registry: BlockRegistry,
    size: i32,
    // Map per-chunk: key=(cx,cy,cz) -> map of world coords -> Block
    inner: HashMap<(i32, i32, i32), HashMap<BlockPos, Block>>,
    signs: HashMap<BlockPos, Vec<String>>,
}

impl SparseWorld {
    pub fn new(registry: BlockRegistry) -> Self {
        Self::with_chunk_size(registry, DEFAULT_CHUNK_SIZE)
    }

    pub fn with_chunk_size(registry: BlockRegistry, size: i32) -> Self {
        Self {
            registry,
            size: size.max(1),
            inner: HashMap::new(),
            signs: HashMap::new(),
        }
    }

    pub fn stats(&self) -> WorldStats {
        WorldStats {
            chunk_entries: self.inner.len(),
            blocks: self.inner.values().map(|m| m.len()).sum(),
            signs: self.signs.len(),
        }
    }

    #[inline]
    fn chunk_key(&self, pos: BlockPos) -> (i32, i32, i32) {
        (
            pos.x.div_euclid(self.size),
            pos.y.div_euclid(self.size),
            pos.z.div_euclid(self.size),
        )
    }

    pub fn get(&self, pos: BlockPos) -> Option<Block> {
        let k = self.chunk_key(pos);
        self.inner.get(&k).and_then(|m| m.get(&pos).copied())
    }

    /// Places `b` at `pos`. Placing air clears the cell. Positions outside
    /// `BlockPos::LIMIT` stay air.
    pub fn set(&mut self, pos: BlockPos, b: Block) {
        if !pos.in_bounds() {
            log::warn!("ignoring {} at {}: outside the world limit", self.registry.debug_name(b), pos);
            return;
        }
        if b == Block::AIR {
            self.remove(pos);
            return;
        }
        let k = self.chunk_key(pos);
        self.inner.entry(k).or_default().insert(pos, b);
    }

    /// Clears the cell and any sign text recorded for it.
    pub fn remove(&mut self, pos: BlockPos) -> Option<Block> {
        let k = self.chunk_key(pos);
        let removed = self.inner.get_mut(&k).and_then(|m| m.remove(&pos));
        if self.inner.get(&k).is_some_and(|m| m.is_empty()) {
            self.inner.remove(&k);
        }
        self.signs.remove(&pos);
        removed
    }

    /// Places a block by registry name with state properties. Unknown names,
    /// properties or values are errors, as are positions outside the limit.
    pub fn place(
        &mut self,
        pos: BlockPos,
        name: &str,
        props: &[(&str, &str)],
    ) -> Result<Block, Box<dyn Error>> {
        let props: HashMap<String, String> = props
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let block = self.make_block(pos, name, &props)?;
        self.set(pos, block);
        Ok(block)
    }

    /// Resolves `name` and `props` into a block destined for `pos`, without placing it.
    pub fn make_block(
        &self,
        pos: BlockPos,
        name: &str,
        props: &HashMap<String, String>,
    ) -> Result<Block, Box<dyn Error>> {
        if !pos.in_bounds() {
            return Err(format!("{} is outside the world limit of {}", pos, BlockPos::LIMIT).into());
        }
        let id = self
            .registry
            .id_by_name(name)
            .ok_or_else(|| format!("unknown block `{}` at {}", name, pos))?;
        let ty = self
            .registry
            .get(id)
            .ok_or_else(|| format!("unknown block `{}` at {}", name, pos))?;
        let bad = ty.invalid_props(props);
        if !bad.is_empty() {
            return Err(format!("at {}: {}", pos, bad.join("; ")).into());
        }
        Ok(Block::new(id, ty.pack_state(props)))
    }

    pub fn set_sign_lines(&mut self, pos: BlockPos, lines: Vec<String>) {
        self.signs.insert(pos, lines);
    }

    /// All placed positions in ascending order.
    pub fn positions(&self) -> Vec<BlockPos> {
        let mut out: Vec<BlockPos> = self
            .inner
            .values()
            .flat_map(|m| m.keys().copied())
            .collect();
        out.sort();
        out
    }

    #[inline]
    pub fn block_ref(&self, pos: BlockPos) -> BlockRef<'_> {
        BlockRef::new(self, pos)
    }
}

impl BlockSource for SparseWorld {
    fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    fn block_at(&self, pos: BlockPos) -> Block {
        self.get(pos).unwrap_or(Block::AIR)
    }

    fn sign_lines(&self, pos: BlockPos) -> Option<&[String]> {
        self.signs.get(&pos).map(|v| v.as_slice())
    }
}
