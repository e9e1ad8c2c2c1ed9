//! 材質移動規則

use crate::domain::alias::Coord;
use crate::domain::constants::METAL_PULL_REACH;
use crate::ecs_types::components::Material;

/// 冰塊碰到這些材質就停下（摩擦、吸收）
pub const ICE_STOPPERS: [Material; 2] = [Material::Sandpaper, Material::Water];

/// 單一材質的移動延伸策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementRule {
    /// 只能走一格
    Step,
    /// 沿同方向滑行；下一格無法進入或接觸到任一 `stoppers` 材質時停下
    ///
    /// 落點只保留滑行終點。
    SlideUntilContact { stoppers: &'static [Material] },
    /// 第一步之外，沿同方向再被吸行，與第一步落點的距離不超過 `reach`
    ///
    /// 第一步與吸行終點都是合法落點。
    MagneticPull { reach: Coord },
}

/// 取得材質對應的移動規則
pub fn movement_rule(material: Material) -> MovementRule {
    match material {
        Material::Ice => MovementRule::SlideUntilContact {
            stoppers: &ICE_STOPPERS,
        },
        Material::Metal => MovementRule::MagneticPull {
            reach: METAL_PULL_REACH,
        },
        Material::Wood | Material::Sandpaper | Material::Water | Material::Glue => {
            MovementRule::Step
        }
    }
}
