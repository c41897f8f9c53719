//! Configuration structs with sensible defaults and RON persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "timber.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Trunk felling settings.
    pub felling: FellingConfig,
    /// Foliage decay settings.
    pub decay: DecayConfig,
    /// Foliage loot settings.
    pub loot: LootConfig,
    /// Extra block and tool ids for modded content.
    pub catalog: CatalogConfig,
    /// Host scheduler settings.
    pub host: HostConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Trunk felling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FellingConfig {
    /// Only fell when the actor is sneaking.
    pub require_sneaking: bool,
    /// Neighborhood radius used when walking connected trunk blocks.
    pub search_radius: i32,
    /// Neighborhood radius searched around each trunk block for foliage.
    pub classifier_radius: i32,
    /// Largest item stack spawned for trunk drops.
    pub max_stack_size: u32,
    /// Delay before the tool slot lock is released, in milliseconds.
    pub lock_release_ms: u64,
}

/// How decayed foliage is removed from the world.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RemovalMode {
    /// Set the block to air through the host mutation interface.
    Direct,
    /// Issue a deferred `setblock` command and track the cell as in flight.
    Command,
}

/// Foliage decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecayConfig {
    /// Run a decay sweep after each felling.
    pub enabled: bool,
    /// Neighborhood radius the fill expands by per foliage block.
    pub step_radius: i32,
    /// Foliage with a standing trunk within this radius is kept.
    pub support_radius: i32,
    /// Foliage blocks processed before yielding to the scheduler.
    pub batch_size: usize,
    /// Removal channel.
    pub removal: RemovalMode,
    /// Foliage removals after which a sweep is abandoned.
    pub max_blocks_per_sweep: usize,
    /// Ticks to wait for a command removal to show up before the cell is
    /// released again.
    pub command_timeout_ticks: u64,
}

/// A single configured drop for a foliage species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LootRuleConfig {
    /// Item type id spawned on a hit.
    pub item: String,
    /// Chance in percent, `0.0..=100.0`.
    pub chance: f64,
    /// Inclusive lower bound of the dropped count.
    pub min: u32,
    /// Inclusive upper bound of the dropped count.
    pub max: u32,
}

impl LootRuleConfig {
    fn new(item: &str, chance: f64, min: u32, max: u32) -> Self {
        Self {
            item: item.to_string(),
            chance,
            min,
            max,
        }
    }
}

/// Foliage loot configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LootConfig {
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Species name → drops rolled for each decayed block of that species.
    pub table: BTreeMap<String, Vec<LootRuleConfig>>,
}

/// Extra ids registered on top of the built-in vanilla catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Additional trunk block type ids.
    pub extra_trunks: Vec<String>,
    /// Additional foliage block type id → species name.
    pub extra_foliage: BTreeMap<String, String>,
    /// Additional axe item type ids.
    pub extra_axes: Vec<String>,
}

/// Host scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Host ticks per second.
    pub tick_rate: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for FellingConfig {
    fn default() -> Self {
        Self {
            require_sneaking: true,
            search_radius: 1,
            classifier_radius: 1,
            max_stack_size: 64,
            lock_release_ms: 1000,
        }
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            step_radius: 2,
            support_radius: 2,
            batch_size: 27,
            removal: RemovalMode::Direct,
            max_blocks_per_sweep: 4096,
            command_timeout_ticks: 100,
        }
    }
}

impl Default for LootConfig {
    fn default() -> Self {
        let stick = || LootRuleConfig::new("minecraft:stick", 2.0, 1, 2);
        let apple = || LootRuleConfig::new("minecraft:apple", 0.5, 1, 1);
        let sapling = |item: &str| LootRuleConfig::new(item, 5.0, 1, 1);

        let mut table = BTreeMap::new();
        table.insert(
            "oak".to_string(),
            vec![sapling("minecraft:oak_sapling"), stick(), apple()],
        );
        table.insert(
            "spruce".to_string(),
            vec![sapling("minecraft:spruce_sapling"), stick()],
        );
        table.insert(
            "birch".to_string(),
            vec![sapling("minecraft:birch_sapling"), stick()],
        );
        table.insert(
            "jungle".to_string(),
            vec![
                LootRuleConfig::new("minecraft:jungle_sapling", 2.5, 1, 1),
                stick(),
            ],
        );
        table.insert(
            "acacia".to_string(),
            vec![sapling("minecraft:acacia_sapling"), stick()],
        );
        table.insert(
            "dark_oak".to_string(),
            vec![sapling("minecraft:dark_oak_sapling"), stick(), apple()],
        );
        table.insert(
            "azalea".to_string(),
            vec![sapling("minecraft:azalea"), stick()],
        );
        table.insert(
            "flowering_azalea".to_string(),
            vec![sapling("minecraft:flowering_azalea"), stick()],
        );
        table.insert("mangrove".to_string(), vec![stick()]);
        table.insert(
            "cherry".to_string(),
            vec![sapling("minecraft:cherry_sapling"), stick()],
        );

        Self { seed: None, table }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { tick_rate: 20 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory for timber (e.g. `~/.config/timber`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("timber"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `timber.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("batch_size: 27"));
        assert!(ron_str.contains("max_stack_size: 64"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(felling: (max_stack_size: 16))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.felling.max_stack_size, 16);
        assert_eq!(config.felling.lock_release_ms, 1000);
        assert_eq!(config.decay, DecayConfig::default());
        assert_eq!(config.loot, LootConfig::default());
    }

    #[test]
    fn test_removal_mode_parses() {
        let config: Config = ron::from_str("(decay: (removal: Command))").unwrap();
        assert_eq!(config.decay.removal, RemovalMode::Command);
    }

    #[test]
    fn test_default_loot_table_matches_species() {
        let loot = LootConfig::default();
        assert_eq!(loot.table.len(), 10);
        assert_eq!(loot.table["oak"].len(), 3);
        assert_eq!(loot.table["mangrove"].len(), 1);
        assert_eq!(loot.table["mangrove"][0].item, "minecraft:stick");
        assert_eq!(loot.table["jungle"][0].chance, 2.5);
        assert_eq!(loot.table["oak"][2].chance, 0.5);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.decay.batch_size = 8;
        config.loot.seed = Some(42);
        config
            .catalog
            .extra_foliage
            .insert("mymod:palm_leaves".to_string(), "jungle".to_string());

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.felling.require_sneaking = false;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert!(!result.unwrap().felling.require_sneaking);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{{not valid}}").unwrap();

        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { path: p, .. } if *p == path));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
