use std::io::Write;
use std::path::{Path, PathBuf};

use rogue_content::{ArenaLoader, ConfigLoader};
use rogue_core::{EntityId, Faction, GameConfig, Item, Position, StatusKind, WorldOracle};

fn shipped(file: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../sim/data")
        .join(file)
}

fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn shipped_arena_builds() {
    let arena = ArenaLoader::load(&shipped("arena.ron"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(arena.name, "twin_halls");
    assert_eq!(arena.state.entities.len(), 8);
    assert_eq!(arena.state.turn.len(), 8);
    assert_eq!(arena.state.turn.current_actor(), Ok(EntityId::PLAYER));

    let player = arena.state.entities.player().unwrap();
    assert_eq!(player.position, Some(Position::new(2, 1)));
    assert_eq!(player.stats.strength, 4);
    assert_eq!(player.inventory.len(), 2);

    let hostiles = arena
        .state
        .entities
        .iter()
        .filter(|actor| actor.faction == Faction::Monster)
        .count();
    assert_eq!(hostiles, 6);
    assert_eq!(
        arena.world.items_at(Position::new(10, 8)),
        &[Item::Potion {
            status: StatusKind::AttackUp,
            duration: 20
        }]
    );
    assert!(arena.world.is_magnetic(Position::new(3, 7)));
}

#[test]
fn shipped_config_overrides_some_defaults() {
    let config = ConfigLoader::load(&shipped("config.toml")).unwrap();
    let defaults = GameConfig::default();

    assert_eq!(config.magnetism_radius, 2);
    assert_eq!(config.corpse_search_radius, 2);
    assert_eq!(config.teleport_attempts, defaults.teleport_attempts);
    assert_eq!(config.inventory_capacity, defaults.inventory_capacity);
}

#[test]
fn config_errors_name_the_file() {
    let file = temp_file("fall_damage_min = 9\nfall_damage_max = 3\n");
    let error = ConfigLoader::load(file.path()).unwrap_err().to_string();
    assert!(error.contains("fall_damage_min"));
    assert!(error.contains(&file.path().display().to_string()));
}

#[test]
fn arena_files_round_trip_through_disk() {
    let file = temp_file(
        r########"(
            name: "closet",
            rows: ["###", "#.#", "###"],
            player: (at: (x: 1, y: 1), max_hp: 5),
        )"########,
    );
    let arena = ArenaLoader::load(file.path()).unwrap().build().unwrap();
    assert_eq!(arena.state.turn.len(), 1);
    assert!(arena.state.entities.player().is_some());
}

#[test]
fn missing_files_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let error = ArenaLoader::load(&dir.path().join("nowhere.ron"))
        .unwrap_err()
        .to_string();
    assert!(error.contains("Failed to read file"));
}
