mod common;

use common::{BracketParser, empty_world, sign_post_on, wall_sign_on};
use lockstone_finder::{BlockFinder, SIGN_ATTACHMENT_FACES, SignParser};
use lockstone_geom::{BlockPos, Face};
use lockstone_world::SignRef;
use proptest::prelude::*;

const CHEST: BlockPos = BlockPos::new(0, 64, 0);

#[test]
fn wall_signs_on_every_side_are_found() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    let mut expect = Vec::new();
    for face in Face::CARDINAL {
        let pos = wall_sign_on(&mut world, CHEST, face, "[Private]");
        expect.push((pos, "[Private]".to_string()));
    }
    let finder = BlockFinder::new(BracketParser, true);
    let mut found = finder.find_attached_signs(&world.block_ref(CHEST));
    found.sort();
    expect.sort();
    assert_eq!(found, expect);
}

#[test]
fn sign_post_on_top_is_found() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    let post = sign_post_on(&mut world, CHEST, "[Private]");
    let finder = BlockFinder::new(BracketParser, true);
    assert_eq!(
        finder.find_attached_signs(&world.block_ref(CHEST)),
        vec![(post, "[Private]".to_string())]
    );
}

#[test]
fn nothing_below_is_scanned() {
    assert!(!SIGN_ATTACHMENT_FACES.contains(&Face::Down));

    // A post under the chest stands on whatever is below it.
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    let below = CHEST.relative(Face::Down);
    world.place(below, "sign_post", &[]).unwrap();
    world.set_sign_lines(below, vec!["[Private]".into()]);
    let finder = BlockFinder::new(BracketParser, true);
    assert!(finder.find_attached_signs(&world.block_ref(CHEST)).is_empty());
}

#[test]
fn adjacent_sign_hanging_on_another_block_is_ignored() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    // Sign north of the chest, but mounted on the stone to its west.
    let sign = CHEST.relative(Face::North);
    world.place(sign.relative(Face::West), "stone", &[]).unwrap();
    world.place(sign, "wall_sign", &[("facing", "east")]).unwrap();
    world.set_sign_lines(sign, vec!["[Private]".into()]);
    let finder = BlockFinder::new(BracketParser, true);
    assert!(finder.find_attached_signs(&world.block_ref(CHEST)).is_empty());
    let stone = world.block_ref(sign.relative(Face::West));
    assert_eq!(finder.find_attached_signs(&stone).len(), 1);
}

#[test]
fn unparsed_signs_are_skipped() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    wall_sign_on(&mut world, CHEST, Face::East, "Welcome home");
    let kept = wall_sign_on(&mut world, CHEST, Face::West, "[More Users]");
    let finder = BlockFinder::new(BracketParser, true);
    assert_eq!(
        finder.find_attached_signs(&world.block_ref(CHEST)),
        vec![(kept, "[More Users]".to_string())]
    );
}

#[test]
fn signs_without_text_are_offered_to_the_parser_as_empty() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    let pos = CHEST.relative(Face::South);
    world.place(pos, "wall_sign", &[("facing", "south")]).unwrap();
    let finder = BlockFinder::new(BracketParser, true);
    assert!(finder.find_attached_signs(&world.block_ref(CHEST)).is_empty());
}

#[test]
fn singleton_bulk_matches_single() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    wall_sign_on(&mut world, CHEST, Face::North, "[Private]");
    sign_post_on(&mut world, CHEST, "[More Users]");
    let finder = BlockFinder::new(BracketParser, true);
    let chest = world.block_ref(CHEST);
    assert_eq!(
        finder.find_attached_signs_all(&[chest]),
        finder.find_attached_signs(&chest)
    );
}

#[test]
fn bulk_reports_shared_sign_once() {
    let mut world = empty_world();
    let other = CHEST.relative(Face::East);
    world.place(CHEST, "chest", &[]).unwrap();
    world.place(other, "chest", &[]).unwrap();
    let shared = wall_sign_on(&mut world, CHEST, Face::North, "[Private]");
    let finder = BlockFinder::new(BracketParser, true);
    let a = world.block_ref(CHEST);
    let b = world.block_ref(other);
    let found = finder.find_attached_signs_all(&[a, b, a]);
    assert_eq!(found, vec![(shared, "[Private]".to_string())]);
}

// Two different signs the parser maps to one record still count once.
#[test]
fn bulk_dedups_equal_records() {
    struct HeaderOnly;
    impl SignParser for HeaderOnly {
        type Sign = String;
        fn parse_sign(&self, sign: &SignRef<'_>) -> Option<String> {
            sign.lines().first().cloned()
        }
    }

    let mut world = empty_world();
    let other = CHEST.relative(Face::East);
    world.place(CHEST, "chest", &[]).unwrap();
    world.place(other, "chest", &[]).unwrap();
    wall_sign_on(&mut world, CHEST, Face::North, "[Private]");
    wall_sign_on(&mut world, other, Face::North, "[Private]");
    let finder = BlockFinder::new(HeaderOnly, true);
    let group = finder.find_container_neighbors(&world.block_ref(CHEST));
    assert_eq!(group.len(), 2);
    assert_eq!(finder.find_attached_signs_all(&group), vec!["[Private]".to_string()]);
}

#[test]
fn empty_bulk_is_empty() {
    let finder = BlockFinder::new(BracketParser, false);
    assert!(finder.find_attached_signs_all(&[]).is_empty());
}

fn arb_cardinal() -> impl Strategy<Value = Face> {
    (0usize..4).prop_map(|i| Face::CARDINAL[i])
}

proptest! {
    // A wall sign beside the chest counts iff its attached face points back at the chest.
    #[test]
    fn attachment_face_decides(side in arb_cardinal(), facing in arb_cardinal()) {
        let mut world = empty_world();
        world.place(CHEST, "chest", &[]).unwrap();
        let pos = CHEST.relative(side);
        world.place(pos, "wall_sign", &[("facing", facing.name())]).unwrap();
        world.set_sign_lines(pos, vec!["[Private]".into()]);
        let finder = BlockFinder::new(BracketParser, true);
        let found = finder.find_attached_signs(&world.block_ref(CHEST));
        let attached = facing.opposite() == side.opposite();
        prop_assert_eq!(found.len(), usize::from(attached));
    }
}

#[test]
fn torches_are_not_signs_but_hang_on_the_chest() {
    let mut world = empty_world();
    world.place(CHEST, "chest", &[]).unwrap();
    let side = CHEST.relative(Face::East);
    let top = CHEST.relative(Face::Up);
    world.place(side, "torch", &[("facing", "east")]).unwrap();
    world.place(top, "torch", &[("facing", "up")]).unwrap();
    let finder = BlockFinder::new(BracketParser, true);
    assert!(finder.find_attached_signs(&world.block_ref(CHEST)).is_empty());
    for pos in [side, top] {
        let support = finder.find_supporting_block(&world.block_ref(pos));
        assert_eq!(support.pos(), CHEST);
    }
}

#[test]
fn queries_at_the_coordinate_edge_do_not_overflow() {
    let mut world = empty_world();
    let finder = BlockFinder::new(BracketParser, true);
    let edge = world.block_ref(BlockPos::new(i32::MAX, 64, i32::MIN));
    assert!(finder.find_attached_signs(&edge).is_empty());
    assert_eq!(finder.find_container_neighbors(&edge).len(), 1);
    assert_eq!(finder.find_supporting_block(&edge), edge);

    let rim = BlockPos::new(BlockPos::LIMIT, 64, 0);
    world.place(rim, "chest", &[]).unwrap();
    let post = sign_post_on(&mut world, rim, "[Private]");
    let found = finder.find_attached_signs(&world.block_ref(rim));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, post);
}
