//! 點選與提交移動

use super::query::{find_piece_entity, get_board_state, get_selection};
use crate::domain::core_types::Piece;
use crate::ecs_types::components::Position;
use crate::ecs_types::resources::{LegalMoves, Selection};
use crate::error::{BoardError, Context, MoveError, Result};
use crate::logic::board::select_piece;
use crate::logic::movement::{commit_move, legal_moves};
use bevy_ecs::prelude::World;

/// 點選位置：更新選取與合法落點提示
///
/// 點到空格時清除選取，不計算任何落點。
pub fn select_at(world: &mut World, pos: Position) -> Result<Option<Piece>> {
    let board = get_board_state(world)?;
    let selected = select_piece(&board, pos).copied();
    let moves = selected
        .map(|piece| legal_moves(&board, &piece))
        .unwrap_or_default();

    world.insert_resource(Selection(selected.map(|piece| piece.id())));
    world.insert_resource(LegalMoves(moves));
    Ok(selected)
}

/// 將選取的棋子移到 `to`，成功後清除選取與提示
///
/// - 必須先選取棋子
/// - `to` 必須是合法落點
/// - 棋子 Entity 必須帶有 `Position`，否則回傳錯誤且 World 不變
pub fn commit_selected_move(world: &mut World, to: Position) -> Result<()> {
    let Selection(selected) = get_selection(world)?;
    let id = selected.ok_or(MoveError::NoPieceSelected)?;

    let mut board = get_board_state(world)?;
    commit_move(&mut board, id, to).context("提交選取棋子的移動")?;

    let not_found = || BoardError::PieceNotFound {
        piece: id.to_string(),
    };
    let entity = find_piece_entity(world, id).ok_or_else(not_found)?;
    *world.get_mut::<Position>(entity).ok_or_else(not_found)? = to;

    world.insert_resource(Selection::default());
    world.insert_resource(LegalMoves::default());
    Ok(())
}
