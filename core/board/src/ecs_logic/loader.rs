use crate::domain::constants::{DEFAULT_SETUP, PIECES_PER_SIDE};
use crate::ecs_types::components::{Material, Owner};
use crate::ecs_types::resources::MatchSetup;
use crate::error::{LoadError, Result};
use crate::loader_schema::{MatchSetupToml, SetupType};
use bevy_ecs::prelude::World;

/// 反序列化對局配置 TOML
pub fn parse_match_setup(setup_toml: &str) -> Result<MatchSetup> {
    let parsed: MatchSetupToml =
        toml::from_str(setup_toml).map_err(|e| LoadError::DeserializeError {
            format: "setup.toml".to_string(),
            reason: e.to_string(),
        })?;

    Ok(MatchSetup {
        player: to_setup_table(Owner::Player, parsed.player)?,
        opponent: to_setup_table(Owner::Opponent, parsed.opponent)?,
    })
}

/// 反序列化對局配置並存入 World Resource
pub fn parse_and_insert_match_setup(world: &mut World, setup_toml: &str) -> Result<()> {
    let setup = parse_match_setup(setup_toml)?;
    world.insert_resource(setup);
    Ok(())
}

fn to_setup_table(
    owner: Owner,
    setup: Option<SetupType>,
) -> Result<[Material; PIECES_PER_SIDE as usize]> {
    let Some(setup) = setup else {
        return Ok(DEFAULT_SETUP);
    };
    let actual = setup.materials.len();
    setup.materials.try_into().map_err(|_| {
        LoadError::InvalidSetup {
            owner: owner.to_string(),
            expected: PIECES_PER_SIDE as usize,
            actual,
        }
        .into()
    })
}
