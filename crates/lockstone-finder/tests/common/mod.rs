#![allow(dead_code)]

use lockstone_blocks::BlockRegistry;
use lockstone_finder::SignParser;
use lockstone_geom::{BlockPos, Face};
use lockstone_world::{SignRef, SparseWorld};

pub const BLOCKS: &str = r#"
    [[blocks]]
    name = "air"
    id = 0

    [[blocks]]
    name = "stone"

    [[blocks]]
    name = "chest"
    kind = "container"
    state_schema = { facing = ["north", "south", "west", "east"] }

    [[blocks]]
    name = "furnace"
    kind = "container"

    [[blocks]]
    name = "wall_sign"
    kind = "sign"
    attach = { from = "facing", invert = true }
    state_schema = { facing = ["north", "south", "west", "east"] }

    [[blocks]]
    name = "sign_post"
    kind = "sign"
    attach = "down"

    [[blocks]]
    name = "torch"
    kind = "attachable"
    attach = { from = "facing", invert = true }
    state_schema = { facing = ["north", "south", "west", "east", "up"] }
"#;

pub fn empty_world() -> SparseWorld {
    SparseWorld::new(BlockRegistry::from_toml_str(BLOCKS).expect("registry"))
}

/// Accepts signs whose first line is bracketed; the token is the sign position and header.
#[derive(Clone, Copy, Debug, Default)]
pub struct BracketParser;

impl SignParser for BracketParser {
    type Sign = (BlockPos, String);

    fn parse_sign(&self, sign: &SignRef<'_>) -> Option<Self::Sign> {
        let first = sign.lines().first()?.trim();
        if first.starts_with('[') && first.ends_with(']') {
            Some((sign.pos(), first.to_string()))
        } else {
            None
        }
    }
}

/// Places a wall sign on the `face` side of `target`, facing away from it.
pub fn wall_sign_on(world: &mut SparseWorld, target: BlockPos, face: Face, text: &str) -> BlockPos {
    assert!(face.is_cardinal());
    let pos = target.relative(face);
    world
        .place(pos, "wall_sign", &[("facing", face.name())])
        .expect("place sign");
    world.set_sign_lines(pos, vec![text.to_string()]);
    pos
}

pub fn sign_post_on(world: &mut SparseWorld, target: BlockPos, text: &str) -> BlockPos {
    let pos = target.relative(Face::Up);
    world.place(pos, "sign_post", &[]).expect("place post");
    world.set_sign_lines(pos, vec![text.to_string()]);
    pos
}
