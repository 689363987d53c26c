//! Game configuration loader.

use std::path::Path;

use rogue_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Every field is optional; omitted keys keep their [`GameConfig::default`] value.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.fall_damage_min > config.fall_damage_max {
            anyhow::bail!(
                "fall_damage_min ({}) exceeds fall_damage_max ({})",
                config.fall_damage_min,
                config.fall_damage_max
            );
        }
        if config.magnetism_pull_percent > 100 || config.loot_drop_percent > 100 {
            anyhow::bail!("percentages must lie within 0..=100");
        }
        if config.corpse_search_radius > GameConfig::MAX_CORPSE_SEARCH_RADIUS {
            tracing::warn!(
                configured = config.corpse_search_radius,
                max = GameConfig::MAX_CORPSE_SEARCH_RADIUS,
                "corpse search radius is capped"
            );
        }

        Ok(config)
    }
}
