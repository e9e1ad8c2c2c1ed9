//! 錯誤處理系統
//!
//! 自製而非 anyhow 的原因：
//! - 庫開發需要強類型（anyhow 型別擦除）
//! - 呼叫端（畫面層）需要依錯誤種類決定提示

use crate::domain::alias::{Coord, SlotIndex};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 頂層錯誤，包含原始錯誤和 context 鏈
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    contexts: Vec<String>,
}

/// 錯誤種類
#[derive(Debug, ThisError)]
pub enum ErrorKind {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Data(#[from] DataError),
}

/// 棋盤錯誤
#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("位置 ({file}, {rank}) 已有棋子: {occupant}")]
    PositionOccupied {
        occupant: String,
        file: Coord,
        rank: Coord,
    },
    #[error("棋子已存在於棋盤上: {piece}")]
    PieceAlreadyExists { piece: String },
    #[error("棋子不存在: {piece}")]
    PieceNotFound { piece: String },
    #[error("{owner} 的棋子槽位 {slot} 超出上限 {limit}")]
    TooManyPieces {
        owner: String,
        slot: SlotIndex,
        limit: SlotIndex,
    },
}

/// 格式載入錯誤
#[derive(Debug, ThisError)]
pub enum LoadError {
    #[error("解析失敗: {0}")]
    ParseError(String),
    #[error("{format} 反序列化失敗: {reason}")]
    DeserializeError { format: String, reason: String },
    #[error("{owner} 的配置表需要 {expected} 個材質，實際為 {actual}")]
    InvalidSetup {
        owner: String,
        expected: usize,
        actual: usize,
    },
}

/// 移動相關錯誤
#[derive(Debug, ThisError)]
pub enum MoveError {
    #[error("尚未選取棋子")]
    NoPieceSelected,
    #[error("{piece} 無法移動到 ({file}, {rank})")]
    IllegalMove {
        piece: String,
        file: Coord,
        rank: Coord,
    },
}

/// World 資料錯誤
#[derive(Debug, ThisError)]
pub enum DataError {
    #[error("World 中缺少 resource: {resource_name}")]
    ResourceNotFound { resource_name: String },
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// 由內而外的 context 鏈（每筆含呼叫位置）
    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// 添加錯誤上下文，自動記錄呼叫位置
    #[track_caller]
    pub fn context<C: Into<String>>(mut self, context: C) -> Self {
        let loc = std::panic::Location::caller();
        self.contexts
            .push(format!("{} [{}:{}]", context.into(), loc.file(), loc.line()));
        self
    }
}

/// 第一行是錯誤種類，之後每行一筆 context
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        self.contexts
            .iter()
            .try_for_each(|ctx| write!(f, "\n  {ctx}"))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl<E: Into<ErrorKind>> From<E> for Error {
    fn from(error: E) -> Self {
        Self {
            kind: error.into(),
            contexts: Vec::new(),
        }
    }
}

/// 為任何可轉成 `Error` 的 Result 添加 context
pub trait Context<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    #[track_caller]
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        // 不用 map_err：closure 會吃掉 track_caller 的呼叫位置
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Into::<Error>::into(e).context(context)),
        }
    }
}
