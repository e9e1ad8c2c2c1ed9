//! 核心業務邏輯（不是 ECS System）

pub mod board;
pub mod material;
pub mod movement;
pub mod setup;
