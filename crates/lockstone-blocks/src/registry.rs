use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use lockstone_geom::Face;

use super::config::{AttachConfig, AttachFrom, BlocksConfig};
use super::types::{Block, BlockId, BlockKind, BlockState};

/// Compiled attachment descriptor of a block type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attachment {
    Fixed(Face),
    FromProp { prop: String, invert: bool },
}

#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn load_from_path(blocks_path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = blocks_path.as_ref();
        let blocks_toml = fs::read_to_string(path)
            .map_err(|e| format!("reading block registry {}: {}", path.display(), e))?;
        Self::from_toml_str(&blocks_toml)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_configs(cfg)
    }

    pub fn from_configs(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry::new();
        let mut taken: HashMap<BlockId, String> = HashMap::new();
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(reg.blocks.len() as u16);
            if let Some(prev) = taken.insert(id, def.name.clone()) {
                return Err(format!("block id {} used by both `{}` and `{}`", id, prev, def.name).into());
            }
            if reg.by_name.contains_key(&def.name) {
                return Err(format!("duplicate block name `{}`", def.name).into());
            }
            let kind = def.kind.unwrap_or_default();
            let state_schema = def.state_schema.unwrap_or_default();
            let attachment = compile_attachment(&def.name, def.attach, &state_schema)?;
            if kind.is_sign() && attachment.is_none() {
                return Err(format!("sign block `{}` needs an `attach` descriptor", def.name).into());
            }
            // Id 0 is what every unset cell reads as.
            if id == 0 && (kind != BlockKind::Plain || attachment.is_some()) {
                return Err(format!(
                    "block `{}` takes id 0 (air) but is not a plain block without `attach`",
                    def.name
                )
                .into());
            }
            let (state_fields, prop_index) = compute_state_layout(&state_schema);

            let mut ty = BlockType {
                id,
                name: def.name,
                kind,
                attachment,
                state_schema,
                state_fields,
                prop_index,
                pre_attached: Vec::new(),
            };

            // Resolve the attached face for every packable state once, so lookups on the
            // hot path are a table read.
            let total_bits: u32 = ty.state_fields.iter().map(|f| f.bits).sum();
            let states_len: usize = if total_bits == 0 {
                1
            } else {
                1usize << total_bits.min(16)
            };
            ty.pre_attached = (0..states_len)
                .map(|s| ty.resolve_attached_face(s as BlockState))
                .collect();

            if reg.blocks.len() <= id as usize {
                reg.blocks
                    .resize(id as usize + 1, BlockType::placeholder(id));
            }
            reg.by_name.insert(ty.name.clone(), id);
            reg.blocks[id as usize] = ty;
        }
        // Placeholders were cloned with the id they were created for; fix them up.
        for (i, ty) in reg.blocks.iter_mut().enumerate() {
            ty.id = i as BlockId;
        }
        log::debug!("block registry loaded: {} type(s)", reg.by_name.len());
        Ok(reg)
    }

    pub fn make_block_by_name(
        &self,
        name: &str,
        props: Option<&HashMap<String, String>>,
    ) -> Option<Block> {
        let id = self.id_by_name(name)?;
        let state = if let Some(p) = props {
            self.get(id).map(|ty| ty.pack_state(p)).unwrap_or(0)
        } else {
            0
        };
        Some(Block { id, state })
    }

    /// Kind of the block; ids missing from the registry are plain.
    #[inline]
    pub fn kind(&self, block: Block) -> BlockKind {
        self.get(block.id).map(|ty| ty.kind).unwrap_or_default()
    }

    #[inline]
    pub fn attached_face(&self, block: Block) -> Option<Face> {
        self.get(block.id)?.attached_face(block.state)
    }

    pub fn debug_name(&self, block: Block) -> &str {
        self.get(block.id)
            .map(|ty| ty.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("unknown")
    }
}

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub kind: BlockKind,
    pub attachment: Option<Attachment>,
    pub state_schema: HashMap<String, Vec<String>>, // property name -> allowed values
    // Precomputed, sorted layout for fast state packing/unpacking
    pub state_fields: Vec<StateField>,
    pub prop_index: HashMap<String, usize>,
    // Precomputed attached face per state
    pub pre_attached: Vec<Option<Face>>,
}

impl BlockType {
    fn placeholder(id: BlockId) -> Self {
        BlockType {
            id,
            name: String::new(),
            kind: BlockKind::Plain,
            attachment: None,
            state_schema: HashMap::new(),
            state_fields: Vec::new(),
            prop_index: HashMap::new(),
            pre_attached: vec![None],
        }
    }
}

#[derive(Clone, Debug)]
pub struct StateField {
    pub name: String,
    pub values: Vec<String>,
    pub bits: u32,
    pub offset: u32,
}

fn compile_attachment(
    block_name: &str,
    attach: Option<AttachConfig>,
    schema: &HashMap<String, Vec<String>>,
) -> Result<Option<Attachment>, Box<dyn Error>> {
    match attach {
        None => Ok(None),
        Some(AttachConfig::Fixed(name)) => match Face::from_name(&name) {
            Some(face) => Ok(Some(Attachment::Fixed(face))),
            None => Err(format!("block `{}`: `{}` is not a face", block_name, name).into()),
        },
        Some(AttachConfig::From(AttachFrom { from, invert })) => {
            if !schema.contains_key(&from) {
                return Err(format!(
                    "block `{}`: attach property `{}` is not in state_schema",
                    block_name, from
                )
                .into());
            }
            Ok(Some(Attachment::FromProp { prop: from, invert }))
        }
    }
}

fn compute_state_layout(
    schema: &HashMap<String, Vec<String>>,
) -> (Vec<StateField>, HashMap<String, usize>) {
    let mut keys: Vec<&String> = schema.keys().collect();
    keys.sort();
    let mut offset: u32 = 0;
    let mut fields: Vec<StateField> = Vec::with_capacity(keys.len());
    for k in keys.into_iter() {
        let vals = schema.get(k).cloned().unwrap_or_default();
        let vlen = vals.len() as u32;
        let bits: u32 = if vlen <= 1 {
            0
        } else {
            32 - (vlen - 1).leading_zeros()
        };
        fields.push(StateField {
            name: k.to_string(),
            values: vals,
            bits,
            offset,
        });
        offset = offset.saturating_add(bits);
    }
    let mut index: HashMap<String, usize> = HashMap::with_capacity(fields.len());
    for (i, f) in fields.iter().enumerate() {
        index.insert(f.name.clone(), i);
    }
    (fields, index)
}

impl BlockType {
    #[inline]
    pub fn is_attachable(&self) -> bool {
        self.attachment.is_some()
    }

    /// Face pointing at the supporting neighbor for `state`, if this type is attachable.
    #[inline]
    pub fn attached_face(&self, state: BlockState) -> Option<Face> {
        let len = self.pre_attached.len();
        self.pre_attached[state as usize & (len - 1)]
    }

    fn resolve_attached_face(&self, state: BlockState) -> Option<Face> {
        match self.attachment.as_ref()? {
            Attachment::Fixed(face) => Some(*face),
            Attachment::FromProp { prop, invert } => {
                let face = Face::from_name(self.state_prop_value(state, prop)?)?;
                Some(if *invert { face.opposite() } else { face })
            }
        }
    }

    pub fn state_prop_value<'a>(&'a self, state: BlockState, prop: &str) -> Option<&'a str> {
        if self.state_fields.is_empty() {
            return None;
        }
        let &i = self.prop_index.get(prop)?;
        let f = &self.state_fields[i];
        if f.bits == 0 {
            return f.values.first().map(|s| s.as_str());
        }
        let mask: u32 = if f.bits >= 32 {
            u32::MAX
        } else {
            (1u32 << f.bits) - 1
        };
        let idx: usize = (((state as u32) >> f.offset) & mask) as usize;
        f.values.get(idx).map(|s| s.as_str())
    }

    /// One message per entry of `props` that names a property or value missing
    /// from the schema, sorted by property name. `pack_state` reads those as
    /// the first value.
    pub fn invalid_props(&self, props: &HashMap<String, String>) -> Vec<String> {
        let mut keys: Vec<&String> = props.keys().collect();
        keys.sort();
        keys.into_iter()
            .filter_map(|k| {
                let v = &props[k];
                match self.state_schema.get(k) {
                    None => Some(format!("`{}` has no property `{}`", self.name, k)),
                    Some(vals) if !vals.contains(v) => Some(format!(
                        "`{}` property `{}` has no value `{}` (expected one of {})",
                        self.name,
                        k,
                        v,
                        vals.join(", ")
                    )),
                    Some(_) => None,
                }
            })
            .collect()
    }

    pub fn pack_state(&self, props: &HashMap<String, String>) -> BlockState {
        if self.state_fields.is_empty() {
            return 0;
        }
        let mut acc: u32 = 0;
        for f in &self.state_fields {
            if f.bits == 0 {
                continue;
            }
            let sel_idx: u32 = match props.get(&f.name) {
                Some(val) => f.values.iter().position(|s| s == val).unwrap_or(0) as u32,
                None => 0,
            };
            acc |= (sel_idx & ((1u32 << f.bits) - 1)) << f.offset;
        }
        acc as BlockState
    }
}
