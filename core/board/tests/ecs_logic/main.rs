mod loader;
mod selection;
mod spawner;

use bevy_ecs::prelude::World;
use board::ecs_logic::loader::parse_and_insert_match_setup;
use board::ecs_logic::spawner::spawn_match;

fn setup_world_with_match(setup_toml: &str) -> World {
    let mut world = World::new();
    parse_and_insert_match_setup(&mut world, setup_toml)
        .expect("parse_and_insert_match_setup 應成功");
    spawn_match(&mut world).expect("spawn_match 應成功");
    world
}
