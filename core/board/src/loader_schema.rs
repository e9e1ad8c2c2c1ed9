//! Loader 相關的資料結構定義

use crate::ecs_types::components::Material;
use serde::{Deserialize, Serialize};

/// 單方的棋子配置表，順序即槽位
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupType {
    pub materials: Vec<Material>,
}

/// 對局配置檔；缺少的一方使用預設配置表
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSetupToml {
    pub player: Option<SetupType>,
    pub opponent: Option<SetupType>,
}
