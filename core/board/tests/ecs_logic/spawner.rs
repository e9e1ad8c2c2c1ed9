use super::constants::FULL_SETUP_TOML;
use super::setup_world_with_match;
use bevy_ecs::prelude::World;
use board::ecs_logic::query::{get_board_state, get_legal_moves, get_selection};
use board::ecs_logic::spawner::spawn_match;
use board::ecs_types::components::{Material, Owner, PieceSlot, Position};
use board::ecs_types::resources::Selection;
use board::error::{DataError, ErrorKind};
use board::logic::setup::initial_position;

#[test]
fn test_spawn_match_creates_twenty_pieces() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);

    let count = world
        .query::<(&Owner, &PieceSlot, &Material, &Position)>()
        .iter(&world)
        .count();
    assert_eq!(count, 20, "雙方各 10 枚棋子");

    let board = get_board_state(&mut world).expect("棋盤快照應成功");
    assert_eq!(board.pieces_of(Owner::Player).count(), 10);
    assert_eq!(board.pieces_of(Owner::Opponent).count(), 10);

    for piece in board.pieces() {
        assert_eq!(
            piece.position(),
            initial_position(piece.owner(), piece.id().slot),
            "{piece}"
        );
    }

    // 對手槽位 0 是金屬，位於 (0, -7)
    let metal = board
        .piece_at(Position::new(0, -7))
        .expect("(0, -7) 應有棋子");
    assert_eq!(metal.owner(), Owner::Opponent);
    assert_eq!(metal.material(), Material::Metal);
}

#[test]
fn test_spawn_match_resets_selection() {
    let world = setup_world_with_match(FULL_SETUP_TOML);

    assert_eq!(get_selection(&world).unwrap(), Selection(None));
    assert!(get_legal_moves(&world).unwrap().0.is_empty());
}

#[test]
fn test_spawn_match_without_setup_fails() {
    let mut world = World::new();

    let err = spawn_match(&mut world).unwrap_err();
    match err.kind() {
        ErrorKind::Data(DataError::ResourceNotFound { resource_name }) => {
            assert_eq!(resource_name, "MatchSetup");
        }
        other => panic!("應回報缺少 MatchSetup：{other:?}"),
    }
}
