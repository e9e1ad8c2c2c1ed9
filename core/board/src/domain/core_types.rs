//! 基本資料類型定義

use crate::domain::alias::SlotIndex;
use crate::domain::constants::PIECES_PER_SIDE;
use crate::ecs_types::components::{Material, Owner, Position};
use crate::error::{BoardError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// 棋子身分（所屬方 + 槽位），建立後不變
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId {
    pub owner: Owner,
    pub slot: SlotIndex,
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.owner, self.slot)
    }
}

/// 棋子：不變的身分 + 可變的材質與位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    material: Material,
    position: Position,
}

impl Piece {
    pub fn new(id: PieceId, material: Material, position: Position) -> Self {
        Self {
            id,
            material,
            position,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn owner(&self) -> Owner {
        self.id.owner
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ ({}, {})",
            self.id, self.material, self.position.file, self.position.rank
        )
    }
}

/// 棋盤狀態：雙向棋子位置索引
///
/// 同時維護兩個方向的 mapping，確保兩者永遠同步：
/// - `Position → PieceId`：查詢某位置上的棋子
/// - `PieceId → Piece`：查詢棋子本身（含位置）
///
/// 每個位置最多一枚棋子，重複佔據無法被表示。
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pos_to_piece: HashMap<Position, PieceId>,
    pieces: BTreeMap<PieceId, Piece>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由棋子列表建立棋盤，任何一枚放置失敗即回傳錯誤
    pub fn from_pieces<I>(pieces: I) -> Result<Self>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Self::new();
        for piece in pieces {
            board.insert(piece)?;
        }
        Ok(board)
    }

    /// 放置棋子
    ///
    /// 位置不必在可遊玩區域內（開局棋子位於兩半棋盤之間的空隙）。
    pub fn insert(&mut self, piece: Piece) -> Result<()> {
        let id = piece.id();
        if id.slot >= PIECES_PER_SIDE {
            return Err(BoardError::TooManyPieces {
                owner: id.owner.to_string(),
                slot: id.slot,
                limit: PIECES_PER_SIDE,
            }
            .into());
        }
        if self.pieces.contains_key(&id) {
            return Err(BoardError::PieceAlreadyExists {
                piece: id.to_string(),
            }
            .into());
        }
        self.ensure_vacant(piece.position())?;

        self.pos_to_piece.insert(piece.position(), id);
        self.pieces.insert(id, piece);
        Ok(())
    }

    /// 查詢指定位置的棋子
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.pos_to_piece.get(&pos).and_then(|id| self.pieces.get(id))
    }

    /// 查詢指定身分的棋子
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.pos_to_piece.contains_key(&pos)
    }

    /// 所有棋子，先玩家後對手，各自依槽位排序
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pieces_of(&self, owner: Owner) -> impl Iterator<Item = &Piece> {
        self.pieces.values().filter(move |p| p.owner() == owner)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// 更換棋子材質
    pub fn set_material(&mut self, id: PieceId, material: Material) -> Result<()> {
        let piece = self.pieces.get_mut(&id).ok_or_else(|| BoardError::PieceNotFound {
            piece: id.to_string(),
        })?;
        piece.material = material;
        Ok(())
    }

    /// 移動棋子到新位置（不檢查移動規則，僅供 `commit_move` 使用）
    pub(crate) fn relocate(&mut self, id: PieceId, to: Position) -> Result<()> {
        let from = self
            .pieces
            .get(&id)
            .map(Piece::position)
            .ok_or_else(|| BoardError::PieceNotFound {
                piece: id.to_string(),
            })?;
        if from == to {
            return Ok(());
        }
        self.ensure_vacant(to)?;

        self.pos_to_piece.remove(&from);
        self.pos_to_piece.insert(to, id);
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.position = to;
        }
        Ok(())
    }

    fn ensure_vacant(&self, pos: Position) -> Result<()> {
        match self.piece_at(pos) {
            Some(occupant) => Err(BoardError::PositionOccupied {
                occupant: occupant.to_string(),
                file: pos.file,
                rank: pos.rank,
            }
            .into()),
            None => Ok(()),
        }
    }
}
