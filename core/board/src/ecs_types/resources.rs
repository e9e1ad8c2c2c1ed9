//! ECS World Resource 定義

use crate::domain::constants::{DEFAULT_SETUP, PIECES_PER_SIDE};
use crate::domain::core_types::PieceId;
use crate::ecs_types::components::{Material, Position};
use bevy_ecs::prelude::Resource;
use std::collections::BTreeSet;

/// 雙方的棋子配置表（對局初始化前存入 World）
#[derive(Debug, Clone, PartialEq, Eq, Resource)]
pub struct MatchSetup {
    pub player: [Material; PIECES_PER_SIDE as usize],
    pub opponent: [Material; PIECES_PER_SIDE as usize],
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            player: DEFAULT_SETUP,
            opponent: DEFAULT_SETUP,
        }
    }
}

/// 目前選取的棋子，`None` 表示未選取
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Resource)]
pub struct Selection(pub Option<PieceId>);

/// 選取棋子的合法落點（供繪製提示格）
#[derive(Debug, Clone, Default, PartialEq, Eq, Resource)]
pub struct LegalMoves(pub BTreeSet<Position>);
