//! Bypass 棋盤規則引擎
//!
//! - `logic`：純函式的移動規則（幾何、材質、滑行）
//! - `ecs_logic`：以 bevy_ecs World 保存對局狀態，供畫面層呼叫

pub mod domain;
pub mod ecs_logic;
pub mod ecs_types;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;
