//! ECS 型別（Component / Resource）

pub mod components;
pub mod resources;
