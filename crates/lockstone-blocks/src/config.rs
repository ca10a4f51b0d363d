use serde::Deserialize;
use std::collections::HashMap;

use crate::types::BlockKind;

// Top-level blocks config file
#[derive(Deserialize, Debug, Default)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u16>,
    #[serde(default)]
    pub kind: Option<BlockKind>,

    // Which neighbor holds this block up. Required for signs.
    #[serde(default)]
    pub attach: Option<AttachConfig>,

    #[serde(default)]
    pub state_schema: Option<HashMap<String, Vec<String>>>,
}

// Attachment supports either a fixed face name ("down") or a state property lookup
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AttachConfig {
    Fixed(String),
    From(AttachFrom),
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AttachFrom {
    pub from: String,
    // Wall signs record the direction they face; the supporting block is behind them.
    #[serde(default)]
    pub invert: bool,
}
