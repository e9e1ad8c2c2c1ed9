//! 棋盤載入器

use crate::domain::alias::{Coord, SlotIndex};
use crate::domain::core_types::{BoardState, Piece, PieceId};
use crate::ecs_types::components::{Material, Owner, Position};
use crate::error::{Context, LoadError, Result};
use std::collections::HashMap;

/// 從 ASCII 格式載入棋盤
///
/// ASCII 格式：每行用空格分隔的符號
/// - 第一行第一個符號位於 `origin`，往右 file +1，往下 rank +1
/// - `.` = 空格
/// - 材質符號（`I` `S` `W` `A` `G` `M`）= 棋子；大寫屬於玩家，小寫屬於對手，
///   槽位依閱讀順序分配
/// - 其他字符串（`x`、`1` 等）= 標記位置
/// - 所有非 `.` 的符號（含棋子）都會收集進標記映射
///
/// 返回：(棋盤, 標記映射)
///
/// 例如（`origin` 為 (1, -1)）：
/// ```text
/// . x .
/// . I .
/// . . S
/// ```
pub fn load_from_ascii(
    ascii: &str,
    origin: Position,
) -> Result<(BoardState, HashMap<String, Vec<Position>>)> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }

    let mut board = BoardState::new();
    let mut markers: HashMap<String, Vec<Position>> = HashMap::new();
    let mut next_slot: HashMap<Owner, SlotIndex> = HashMap::new();

    for (row, line) in lines.iter().enumerate() {
        for (col, cell) in line.split_whitespace().enumerate() {
            if cell == "." {
                continue;
            }

            let pos = Position {
                file: origin.file + to_coord(col)?,
                rank: origin.rank + to_coord(row)?,
            };
            markers.entry(cell.to_string()).or_default().push(pos);

            if let Some((material, owner)) = parse_piece_symbol(cell) {
                let slot = next_slot.entry(owner).or_insert(0);
                let piece = Piece::new(PieceId { owner, slot: *slot }, material, pos);
                board
                    .insert(piece)
                    .context(format!("第 {} 行第 {} 個符號 `{}`", row + 1, col + 1, cell))?;
                *slot += 1;
            }
        }
    }

    Ok((board, markers))
}

// 單一字元且為材質符號才視為棋子
fn parse_piece_symbol(cell: &str) -> Option<(Material, Owner)> {
    let mut chars = cell.chars();
    let symbol = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let material = Material::from_symbol(symbol)?;
    let owner = if symbol.is_ascii_uppercase() {
        Owner::Player
    } else {
        Owner::Opponent
    };
    Some((material, owner))
}

fn to_coord(index: usize) -> Result<Coord> {
    index
        .try_into()
        .map_err(|_| LoadError::ParseError("棋盤尺寸過大".to_string()).into())
}
