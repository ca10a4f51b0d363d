use std::collections::HashMap;

use lockstone_blocks::{Block, BlockRegistry};
use lockstone_geom::{BlockPos, Face};
use lockstone_world::{BlockSource, SparseWorld};
use proptest::prelude::*;

fn registry() -> BlockRegistry {
    BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "air"
        id = 0
        [[blocks]]
        name = "stone"
        [[blocks]]
        name = "chest"
        kind = "container"
    "#,
    )
    .unwrap()
}

fn arb_pos() -> impl Strategy<Value = BlockPos> {
    (-40i32..40, -8i32..8, -40i32..40).prop_map(|(x, y, z)| BlockPos::new(x, y, z))
}

proptest! {
    // The chunked store reads back exactly like a flat map, whatever the chunk size.
    #[test]
    fn matches_flat_model(
        size in 1i32..=16,
        ops in prop::collection::vec((arb_pos(), 0u16..3), 1..200),
    ) {
        let mut world = SparseWorld::with_chunk_size(registry(), size);
        let mut model: HashMap<BlockPos, Block> = HashMap::new();
        for (pos, id) in &ops {
            let b = Block::new(*id, 0);
            world.set(*pos, b);
            if b == Block::AIR {
                model.remove(pos);
            } else {
                model.insert(*pos, b);
            }
        }
        for (pos, _) in &ops {
            prop_assert_eq!(world.block_at(*pos), model.get(pos).copied().unwrap_or(Block::AIR));
        }
        prop_assert_eq!(world.stats().blocks, model.len());
        let mut expect: Vec<BlockPos> = model.keys().copied().collect();
        expect.sort();
        prop_assert_eq!(world.positions(), expect);
    }

    // Neighbor views read the cell one step away.
    #[test]
    fn at_reads_neighbor_cell(pos in arb_pos(), fi in 0usize..6) {
        let face = Face::from_index(fi).unwrap();
        let mut world = SparseWorld::new(registry());
        world.place(pos.relative(face), "chest", &[]).unwrap();
        let here = world.block_ref(pos);
        let there = here.at(face);
        prop_assert!(there.kind().is_container());
        prop_assert_eq!(there.face_toward(&here), Some(face.opposite()));
        prop_assert_eq!(here.face_toward(&there), Some(face));
    }
}
