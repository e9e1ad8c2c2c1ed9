use super::constants::FULL_SETUP_TOML;
use super::setup_world_with_match;
use board::ecs_logic::query::{
    find_piece_entity, get_board_state, get_legal_moves, get_selection,
};
use board::ecs_logic::selection::{commit_selected_move, select_at};
use board::ecs_types::components::{Material, Owner, Position};
use board::error::{BoardError, ErrorKind, MoveError};
use std::collections::BTreeSet;

#[test]
fn test_select_empty_square_clears_selection() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);

    select_at(&mut world, Position::new(-1, -7)).expect("選取應成功");
    assert!(get_selection(&world).unwrap().0.is_some());

    let selected = select_at(&mut world, Position::new(2, 0)).expect("選取應成功");
    assert!(selected.is_none());
    assert_eq!(get_selection(&world).unwrap().0, None);
    assert!(get_legal_moves(&world).unwrap().0.is_empty());
}

#[test]
fn test_select_piece_shows_legal_moves() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);

    // 玩家槽位 0 的冰塊
    let selected = select_at(&mut world, Position::new(-1, -7))
        .expect("選取應成功")
        .expect("(-1, -7) 應有棋子");
    assert_eq!(selected.material(), Material::Ice);
    assert_eq!(selected.owner(), Owner::Player);

    assert_eq!(get_selection(&world).unwrap().0, Some(selected.id()));
    assert_eq!(
        get_legal_moves(&world).unwrap().0,
        BTreeSet::from([Position::new(-4, -7)])
    );
}

#[test]
fn test_commit_without_selection_fails() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);

    let err = commit_selected_move(&mut world, Position::new(-2, -7)).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Move(MoveError::NoPieceSelected)
    ));
}

#[test]
fn test_commit_illegal_move_keeps_world() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);
    select_at(&mut world, Position::new(-1, -7)).expect("選取應成功");

    // 冰塊會一路滑到 (-4, -7)，不能停在 (-2, -7)
    let err = commit_selected_move(&mut world, Position::new(-2, -7)).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Move(MoveError::IllegalMove { .. })
    ));

    let board = get_board_state(&mut world).unwrap();
    assert!(board.piece_at(Position::new(-1, -7)).is_some());
    assert!(board.piece_at(Position::new(-2, -7)).is_none());
    assert!(get_selection(&world).unwrap().0.is_some(), "失敗時保留選取");
}

#[test]
fn test_commit_selected_move_updates_entity() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);
    let ice = select_at(&mut world, Position::new(-1, -7))
        .expect("選取應成功")
        .expect("(-1, -7) 應有棋子");

    commit_selected_move(&mut world, Position::new(-4, -7)).expect("提交應成功");

    let entity = find_piece_entity(&mut world, ice.id()).expect("應找到冰塊 Entity");
    assert_eq!(
        world.get::<Position>(entity).copied(),
        Some(Position::new(-4, -7))
    );

    let board = get_board_state(&mut world).unwrap();
    assert!(board.piece_at(Position::new(-1, -7)).is_none());
    assert_eq!(
        board.piece_at(Position::new(-4, -7)).map(|p| p.id()),
        Some(ice.id())
    );

    assert_eq!(get_selection(&world).unwrap().0, None);
    assert!(get_legal_moves(&world).unwrap().0.is_empty());

    // (-1, -7) 雖已空出，但在空隙內，砂紙仍只能往左
    let sandpaper = select_at(&mut world, Position::new(-1, -6))
        .expect("選取應成功")
        .expect("(-1, -6) 應有棋子");
    assert_eq!(sandpaper.material(), Material::Sandpaper);
    assert_eq!(
        get_legal_moves(&world).unwrap().0,
        BTreeSet::from([Position::new(-2, -6)])
    );
}

#[test]
fn test_commit_piece_without_position_fails() {
    let mut world = setup_world_with_match(FULL_SETUP_TOML);
    let ice = select_at(&mut world, Position::new(-1, -7))
        .expect("選取應成功")
        .expect("(-1, -7) 應有棋子");

    let entity = find_piece_entity(&mut world, ice.id()).expect("應找到冰塊 Entity");
    world.entity_mut(entity).remove::<Position>();

    let err = commit_selected_move(&mut world, Position::new(-4, -7)).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Board(BoardError::PieceNotFound { .. })
    ));

    // 失敗時不補回位置，也不清除選取
    assert!(world.get::<Position>(entity).is_none());
    assert_eq!(get_selection(&world).unwrap().0, Some(ice.id()));
    assert!(!get_legal_moves(&world).unwrap().0.is_empty());
}
