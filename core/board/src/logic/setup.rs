//! 開局佈置

use crate::domain::alias::{Coord, SlotIndex};
use crate::domain::constants::SETUP_HALF;
use crate::domain::core_types::{BoardState, Piece, PieceId};
use crate::ecs_types::components::{Material, Owner, Position};
use crate::ecs_types::resources::MatchSetup;
use crate::error::Result;

/// 槽位的開局位置
///
/// 雙方都排在兩半棋盤之間的空隙（file -1 與 0），彼此左右對調：
/// - 槽位 0..5：玩家在 file -1，對手在 file 0，rank 為 `slot - 7`
/// - 槽位 5..10：玩家在 file 0，對手在 file -1，rank 為 `slot - 2`
pub fn initial_position(owner: Owner, slot: SlotIndex) -> Position {
    let slot = Coord::from(slot);
    if slot < Coord::from(SETUP_HALF) {
        let file = if owner.is_player() { -1 } else { 0 };
        Position::new(file, slot - 7)
    } else {
        let file = if owner.is_player() { 0 } else { -1 };
        Position::new(file, slot - 2)
    }
}

/// 依配置表產生一方的棋子
pub fn initial_pieces(owner: Owner, materials: &[Material]) -> Vec<Piece> {
    (0..)
        .zip(materials)
        .map(|(slot, &material)| {
            Piece::new(
                PieceId { owner, slot },
                material,
                initial_position(owner, slot),
            )
        })
        .collect()
}

/// 依雙方配置表建立開局棋盤
pub fn initial_board(setup: &MatchSetup) -> Result<BoardState> {
    let player = initial_pieces(Owner::Player, &setup.player);
    let opponent = initial_pieces(Owner::Opponent, &setup.opponent);
    BoardState::from_pieces(player.into_iter().chain(opponent))
}
