//! 與畫面層協作的 ECS 邏輯
//!
//! 選取狀態、提示格等原本散落在場景節點上的狀態，都以 World resource 明確保存。

pub mod loader;
pub mod query;
pub mod selection;
pub mod spawner;

use crate::error::DataError;
use bevy_ecs::prelude::Resource;
use std::any::type_name;

/// 產生缺少 resource 的錯誤，名稱移除模組路徑
fn missing_resource<R: Resource>() -> DataError {
    let full_name = type_name::<R>();
    DataError::ResourceNotFound {
        resource_name: full_name
            .rsplit("::")
            .next()
            .unwrap_or(full_name)
            .to_string(),
    }
}
