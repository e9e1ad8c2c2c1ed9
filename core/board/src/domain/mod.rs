//! 領域型別與常數（不依賴 ECS 執行環境）

pub mod alias;
pub mod constants;
pub mod core_types;
