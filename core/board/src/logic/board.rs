//! 棋盤幾何與候選落點過濾

use crate::domain::alias::Coord;
use crate::domain::constants::{LEFT_BAND_FILES, RANK_MAX, RANK_MIN, RIGHT_BAND_FILES};
use crate::domain::core_types::{BoardState, Piece};
use crate::ecs_types::components::Position;
use crate::logic::movement::{Direction, DirectionMap, step_in_direction};

/// 驗證位置是否在可遊玩區域內
///
/// 可遊玩區域是兩條互相面對的直帶，中間隔著空隙：
/// rank 在 [-8, 8]，且 file 在 [1, 3] 或 [-4, -2]。
pub fn is_valid_position(pos: Position) -> bool {
    let in_band = |(lo, hi): (Coord, Coord)| (lo..=hi).contains(&pos.file);
    (RANK_MIN..=RANK_MAX).contains(&pos.rank)
        && (in_band(RIGHT_BAND_FILES) || in_band(LEFT_BAND_FILES))
}

/// 四個正交相鄰位置（上、左、右、下），不論是否有效
pub fn neighbors(pos: Position) -> DirectionMap<Position> {
    DirectionMap::from_fn(|direction: Direction| step_in_direction(pos, direction))
}

/// 位置有效且沒有棋子
pub fn can_occupy(board: &BoardState, pos: Position) -> bool {
    is_valid_position(pos) && !board.is_occupied(pos)
}

/// 逐方向過濾候選落點，不可進入的方向以 `None` 佔位
pub fn filter_candidates(
    board: &BoardState,
    candidates: DirectionMap<Position>,
) -> DirectionMap<Option<Position>> {
    candidates.map(|_, pos| can_occupy(board, pos).then_some(pos))
}

/// 將點選位置解析為可選取的棋子
pub fn select_piece(board: &BoardState, pos: Position) -> Option<&Piece> {
    board.piece_at(pos)
}
