//! 遊戲常數定義

use crate::domain::alias::{Coord, SlotIndex};
use crate::ecs_types::components::Material;

/// 可遊玩區域的 rank 範圍（含端點）
pub const RANK_MIN: Coord = -8;
pub const RANK_MAX: Coord = 8;

/// 右側棋盤半邊的 file 範圍（含端點）
pub const RIGHT_BAND_FILES: (Coord, Coord) = (1, 3);

/// 左側棋盤半邊的 file 範圍（含端點）
pub const LEFT_BAND_FILES: (Coord, Coord) = (-4, -2);

/// 每方棋子數量上限
pub const PIECES_PER_SIDE: SlotIndex = 10;

/// 前半配置表（槽位 0..5）與後半配置表的分界
pub const SETUP_HALF: SlotIndex = 5;

/// 材質貼圖集每列的格數
pub const MATERIAL_ATLAS_WIDTH: u32 = 4;

/// 金屬磁吸滑行距離上限（以第一步落點為起算）
pub const METAL_PULL_REACH: Coord = 1;

/// 預設棋子配置表
pub const DEFAULT_SETUP: [Material; PIECES_PER_SIDE as usize] = [
    Material::Ice,
    Material::Sandpaper,
    Material::Wood,
    Material::Water,
    Material::Metal,
    Material::Glue,
    Material::Water,
    Material::Wood,
    Material::Sandpaper,
    Material::Ice,
];
