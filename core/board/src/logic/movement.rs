//! 移動邏輯

use crate::domain::alias::Coord;
use crate::domain::core_types::{BoardState, Piece, PieceId};
use crate::ecs_types::components::{Material, Position};
use crate::error::{BoardError, MoveError, Result};
use crate::logic::board::{can_occupy, filter_candidates, is_valid_position, neighbors};
use crate::logic::material::{MovementRule, movement_rule};
use std::collections::BTreeSet;
use std::ops::Index;
use tracing::{debug, trace};

/// 移動方向（四方向）
///
/// 宣告順序即 `DirectionMap` 內的槽位順序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// (file, rank) 位移量
    pub fn offset(self) -> (Coord, Coord) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// 計算從當前位置往指定方向移動一格後的位置（不檢查有效性）
pub fn step_in_direction(pos: Position, direction: Direction) -> Position {
    let (df, dr) = direction.offset();
    Position {
        file: pos.file + df,
        rank: pos.rank + dr,
    }
}

/// 每個方向各一個值
///
/// 過濾、滑行各階段都以方向對應，不靠陣列索引的慣例。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionMap<T>([T; 4]);

impl<T> DirectionMap<T> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(Direction) -> T,
    {
        Self(Direction::ALL.map(f))
    }

    /// 逐方向轉換，保留方向對應
    pub fn map<U, F>(self, mut f: F) -> DirectionMap<U>
    where
        F: FnMut(Direction, T) -> U,
    {
        let [up, left, right, down] = self.0;
        DirectionMap([
            f(Direction::Up, up),
            f(Direction::Left, left),
            f(Direction::Right, right),
            f(Direction::Down, down),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<Direction> for DirectionMap<T> {
    type Output = T;

    fn index(&self, direction: Direction) -> &T {
        &self.0[direction as usize]
    }
}

/// 判斷位置的四個相鄰格中，是否有指定材質的棋子
///
/// 只看可遊玩區域內的相鄰格。
pub fn contacting(board: &BoardState, pos: Position, material: Material) -> bool {
    neighbors(pos).values().any(|&adjacent| {
        is_valid_position(adjacent)
            && board
                .piece_at(adjacent)
                .is_some_and(|piece| piece.material() == material)
    })
}

/// 逐方向滑行
///
/// 每個方向獨立處理，從該方向的起點開始往同方向試走下一格：
/// 1. 下一格無法進入時停在目前位置
/// 2. `stop(起點, 下一格)` 為真時也停在目前位置，不進入該格
/// 3. 否則進入下一格並繼續
///
/// 起點本身不經 `stop` 判斷。`None` 的方向不滑行；完全沒有延伸的方向保留起點。
pub fn slide<F>(
    board: &BoardState,
    starts: DirectionMap<Option<Position>>,
    stop: F,
) -> DirectionMap<Option<Position>>
where
    F: Fn(Position, Position) -> bool,
{
    starts.map(|direction, start| {
        let start = start?;
        let mut frontier = start;
        loop {
            let next = step_in_direction(frontier, direction);
            if !can_occupy(board, next) || stop(start, next) {
                break;
            }
            frontier = next;
        }
        trace!(?direction, ?start, end = ?frontier, "slide finished");
        Some(frontier)
    })
}

/// 計算棋子的所有合法落點
///
/// 1. 取得四個相鄰格並過濾掉無效或已佔據者
/// 2. 依材質的移動規則延伸
/// 3. 去除 `None`，結果依位置排序
pub fn legal_moves(board: &BoardState, piece: &Piece) -> BTreeSet<Position> {
    let base = filter_candidates(board, neighbors(piece.position()));

    let moves: BTreeSet<Position> = match movement_rule(piece.material()) {
        MovementRule::Step => base.values().flatten().copied().collect(),
        MovementRule::SlideUntilContact { stoppers } => {
            let slid = slide(board, base, |_, next| {
                stoppers
                    .iter()
                    .any(|&material| contacting(board, next, material))
            });
            slid.values().flatten().copied().collect()
        }
        MovementRule::MagneticPull { reach } => {
            let pulled = slide(board, base, |start, next| {
                next.distance_squared(start) > reach * reach
            });
            base.values()
                .chain(pulled.values())
                .flatten()
                .copied()
                .collect()
        }
    };

    debug!(piece = %piece, count = moves.len(), "legal moves computed");
    moves
}

/// 提交移動：目標必須是該棋子目前的合法落點
///
/// 失敗時棋盤不變。
pub fn commit_move(board: &mut BoardState, id: PieceId, to: Position) -> Result<()> {
    let piece = *board.get(id).ok_or_else(|| BoardError::PieceNotFound {
        piece: id.to_string(),
    })?;

    // Fail fast：驗證目標為合法落點
    if !legal_moves(board, &piece).contains(&to) {
        return Err(MoveError::IllegalMove {
            piece: piece.to_string(),
            file: to.file,
            rank: to.rank,
        }
        .into());
    }

    board.relocate(id, to)?;
    debug!(piece = %piece, file = to.file, rank = to.rank, "move committed");
    Ok(())
}
