//! ECS Component 定義
//!
//! 這些型別同時是純資料，核心邏輯（`logic`）直接使用，不需要 World。

use crate::domain::alias::{Coord, SlotIndex};
use crate::domain::constants::MATERIAL_ATLAS_WIDTH;
use bevy_ecs::bundle::Bundle;
use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

// ============================================================================
// 棋盤與位置 Components
// ============================================================================

/// 棋盤位置（座標），可超出可遊玩區域
///
/// 排序為先 file 後 rank，讓結果集合有固定順序。
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Component,
    Serialize,
    Deserialize,
)]
pub struct Position {
    pub file: Coord,
    pub rank: Coord,
}

impl Position {
    pub const fn new(file: Coord, rank: Coord) -> Self {
        Self { file, rank }
    }

    /// 與另一位置的歐氏距離平方
    pub fn distance_squared(self, other: Position) -> Coord {
        let df = self.file - other.file;
        let dr = self.rank - other.rank;
        df * df + dr * dr
    }
}

// ============================================================================
// 棋子 Components
// ============================================================================

/// 棋子材質
///
/// 宣告順序即貼圖集索引，不可任意調整。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Component,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Material {
    Ice,
    Sandpaper,
    Wood,
    Water,
    Glue,
    Metal,
}

impl Material {
    /// 貼圖集中的線性索引
    pub fn atlas_index(self) -> u32 {
        self as u32
    }

    /// 貼圖集中的 (列內位置, 列號)
    pub fn atlas_position(self) -> (u32, u32) {
        let index = self.atlas_index();
        (index % MATERIAL_ATLAS_WIDTH, index / MATERIAL_ATLAS_WIDTH)
    }

    /// ASCII 棋盤使用的符號（大寫）
    pub fn symbol(self) -> char {
        match self {
            Material::Ice => 'I',
            Material::Sandpaper => 'S',
            Material::Wood => 'W',
            Material::Water => 'A',
            Material::Glue => 'G',
            Material::Metal => 'M',
        }
    }

    /// 由 ASCII 符號解析材質，不分大小寫
    pub fn from_symbol(symbol: char) -> Option<Material> {
        match symbol.to_ascii_uppercase() {
            'I' => Some(Material::Ice),
            'S' => Some(Material::Sandpaper),
            'W' => Some(Material::Wood),
            'A' => Some(Material::Water),
            'G' => Some(Material::Glue),
            'M' => Some(Material::Metal),
            _ => None,
        }
    }
}

/// 棋子所屬方
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Component,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Owner {
    Player,
    Opponent,
}

impl Owner {
    pub fn is_player(self) -> bool {
        self == Owner::Player
    }
}

/// 棋子在己方配置表中的槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Component)]
pub struct PieceSlot(pub SlotIndex);

// ============================================================================
// Bundles
// ============================================================================

/// 棋子 Entity 的完整 Bundle
#[derive(Debug, Bundle)]
pub struct PieceBundle {
    pub position: Position,
    pub material: Material,
    pub owner: Owner,
    pub slot: PieceSlot,
}
