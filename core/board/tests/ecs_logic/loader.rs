use super::constants::{
    FULL_SETUP_TOML, PLAYER_ONLY_SETUP_TOML, SHORT_SETUP_TOML, UNKNOWN_MATERIAL_TOML,
};
use bevy_ecs::prelude::World;
use board::domain::constants::DEFAULT_SETUP;
use board::ecs_logic::loader::{parse_and_insert_match_setup, parse_match_setup};
use board::ecs_types::components::Material;
use board::ecs_types::resources::MatchSetup;
use board::error::{ErrorKind, LoadError};

#[test]
fn test_parse_and_insert_match_setup_sets_resource() {
    let mut world = World::new();

    let result = parse_and_insert_match_setup(&mut world, FULL_SETUP_TOML);
    assert!(result.is_ok(), "parse_and_insert_match_setup 應成功：{:?}", result);

    let setup = world
        .get_resource::<MatchSetup>()
        .expect("MatchSetup resource 應已存入 World");
    assert_eq!(setup.player, DEFAULT_SETUP);
    assert_eq!(setup.opponent[0], Material::Metal);
    assert_eq!(setup.opponent[4], Material::Ice);
    assert_eq!(setup.opponent[9], Material::Metal);
}

#[test]
fn test_parse_match_setup_defaults_missing_side() {
    let setup = parse_match_setup(PLAYER_ONLY_SETUP_TOML).expect("應成功解析");
    assert_eq!(setup.player[..5], [Material::Glue; 5]);
    assert_eq!(setup.player[5..], [Material::Metal; 5]);
    assert_eq!(setup.opponent, DEFAULT_SETUP);

    let setup = parse_match_setup("").expect("空檔案應使用預設配置表");
    assert_eq!(setup, MatchSetup::default());
}

#[test]
fn test_parse_match_setup_rejects_wrong_length() {
    let err = parse_match_setup(SHORT_SETUP_TOML).unwrap_err();
    assert!(
        matches!(
            err.kind(),
            ErrorKind::Load(LoadError::InvalidSetup {
                expected: 10,
                actual: 2,
                ..
            })
        ),
        "應回報數量錯誤：{err}"
    );
}

#[test]
fn test_parse_match_setup_rejects_unknown_material() {
    let err = parse_match_setup(UNKNOWN_MATERIAL_TOML).unwrap_err();
    assert!(
        matches!(err.kind(), ErrorKind::Load(LoadError::DeserializeError { .. })),
        "應回報反序列化錯誤：{err}"
    );
}
