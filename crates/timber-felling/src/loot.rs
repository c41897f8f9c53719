//! Per-species foliage loot.
//!
//! Every configured drop for a species rolls independently: a uniform number
//! in `[0, 100)` is compared against the drop's percentage, and on a hit the
//! count is drawn uniformly from its inclusive range.

use rand::Rng;
use rustc_hash::FxHashMap;
use thiserror::Error;
use timber_config::LootConfig;
use timber_world::{FoliageSpecies, ItemStack};

/// One possible drop for a species.
#[derive(Clone, Debug, PartialEq)]
pub struct LootEntry {
    /// Item type id spawned on a hit.
    pub item: String,
    /// Chance in percent.
    pub chance: f64,
    /// Inclusive minimum count.
    pub min: u32,
    /// Inclusive maximum count.
    pub max: u32,
}

/// Errors raised while building a loot table.
#[derive(Debug, Error, PartialEq)]
pub enum LootError {
    /// The configured species name does not exist.
    #[error("unknown foliage species in loot table: {0}")]
    UnknownSpecies(String),
    /// Chance is not within `0..=100`.
    #[error("{species}: chance {chance} for {item} is outside 0..=100")]
    ChanceOutOfRange {
        /// Species name.
        species: String,
        /// Item id.
        item: String,
        /// Offending chance.
        chance: f64,
    },
    /// `min` exceeds `max`.
    #[error("{species}: count range {min}..={max} for {item} is inverted")]
    InvertedRange {
        /// Species name.
        species: String,
        /// Item id.
        item: String,
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
}

/// Immutable species → drops mapping.
#[derive(Clone, Debug, Default)]
pub struct LootTable {
    entries: FxHashMap<FoliageSpecies, Vec<LootEntry>>,
}

impl LootTable {
    /// Creates a table with no drops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds and validates a table from configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`LootError`] for unknown species names, chances outside
    /// `0..=100`, or inverted count ranges.
    pub fn from_config(config: &LootConfig) -> Result<Self, LootError> {
        let mut table = Self::empty();
        for (name, rules) in &config.table {
            let species = FoliageSpecies::from_name(name)
                .ok_or_else(|| LootError::UnknownSpecies(name.clone()))?;
            for rule in rules {
                table.insert(
                    species,
                    LootEntry {
                        item: rule.item.clone(),
                        chance: rule.chance,
                        min: rule.min,
                        max: rule.max,
                    },
                )?;
            }
        }
        Ok(table)
    }

    /// Adds a drop for `species` after validating it.
    ///
    /// # Errors
    ///
    /// See [`LootTable::from_config`].
    pub fn insert(&mut self, species: FoliageSpecies, entry: LootEntry) -> Result<(), LootError> {
        if !(0.0..=100.0).contains(&entry.chance) {
            return Err(LootError::ChanceOutOfRange {
                species: species.name().to_string(),
                item: entry.item,
                chance: entry.chance,
            });
        }
        if entry.min > entry.max {
            return Err(LootError::InvertedRange {
                species: species.name().to_string(),
                item: entry.item,
                min: entry.min,
                max: entry.max,
            });
        }
        self.entries.entry(species).or_default().push(entry);
        Ok(())
    }

    /// Configured drops for a species.
    pub fn entries(&self, species: FoliageSpecies) -> &[LootEntry] {
        self.entries.get(&species).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rolls every drop configured for `species`.
    pub fn resolve<R: Rng + ?Sized>(&self, species: FoliageSpecies, rng: &mut R) -> Vec<ItemStack> {
        let mut drops = Vec::new();
        for entry in self.entries(species) {
            let roll = rng.random::<f64>() * 100.0;
            if roll >= entry.chance {
                continue;
            }
            let count = rng.random_range(entry.min..=entry.max);
            if count > 0 {
                drops.push(ItemStack::new(entry.item.clone(), count));
            }
        }
        drops
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use timber_config::LootRuleConfig;

    fn entry(item: &str, chance: f64, min: u32, max: u32) -> LootEntry {
        LootEntry {
            item: item.to_string(),
            chance,
            min,
            max,
        }
    }

    #[test]
    fn test_certain_drops_always_both() {
        let mut table = LootTable::empty();
        table
            .insert(FoliageSpecies::Oak, entry("minecraft:oak_sapling", 100.0, 1, 1))
            .unwrap();
        table
            .insert(FoliageSpecies::Oak, entry("minecraft:stick", 100.0, 1, 2))
            .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..500 {
            let drops = table.resolve(FoliageSpecies::Oak, &mut rng);
            assert_eq!(drops.len(), 2);
            assert_eq!(drops[0].type_id, "minecraft:oak_sapling");
            assert_eq!(drops[0].count, 1);
            assert_eq!(drops[1].type_id, "minecraft:stick");
            assert!((1..=2).contains(&drops[1].count));
        }
    }

    #[test]
    fn test_zero_chance_never_drops() {
        let mut table = LootTable::empty();
        table
            .insert(FoliageSpecies::Birch, entry("minecraft:birch_sapling", 0.0, 1, 1))
            .unwrap();
        table
            .insert(FoliageSpecies::Birch, entry("minecraft:stick", 100.0, 1, 1))
            .unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..500 {
            let drops = table.resolve(FoliageSpecies::Birch, &mut rng);
            assert_eq!(drops, vec![ItemStack::new("minecraft:stick", 1)]);
        }
    }

    #[test]
    fn test_counts_cover_range() {
        let mut table = LootTable::empty();
        table
            .insert(FoliageSpecies::Spruce, entry("minecraft:stick", 100.0, 1, 3))
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..300 {
            let drops = table.resolve(FoliageSpecies::Spruce, &mut rng);
            seen[drops[0].count as usize] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn test_partial_chance_is_roughly_proportional() {
        let mut table = LootTable::empty();
        table
            .insert(FoliageSpecies::Jungle, entry("minecraft:jungle_sapling", 25.0, 1, 1))
            .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let hits = (0..10_000)
            .filter(|_| !table.resolve(FoliageSpecies::Jungle, &mut rng).is_empty())
            .count();
        assert!((2_000..3_000).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_unconfigured_species_drops_nothing() {
        let table = LootTable::from_config(&LootConfig::default()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(table.entries(FoliageSpecies::NetherWart).is_empty());
        assert!(table.resolve(FoliageSpecies::WarpedWart, &mut rng).is_empty());
    }

    #[test]
    fn test_default_config_loads() {
        let table = LootTable::from_config(&LootConfig::default()).unwrap();
        assert_eq!(table.entries(FoliageSpecies::Oak).len(), 3);
        assert_eq!(table.entries(FoliageSpecies::Mangrove).len(), 1);
        assert_eq!(table.entries(FoliageSpecies::Azalea)[0].item, "minecraft:azalea");
    }

    #[test]
    fn test_unknown_species_rejected() {
        let mut config = LootConfig::default();
        config.table.insert("baobab".to_string(), Vec::new());
        assert_eq!(
            LootTable::from_config(&config).unwrap_err(),
            LootError::UnknownSpecies("baobab".to_string())
        );
    }

    #[test]
    fn test_bad_rules_rejected() {
        let mut config = LootConfig::default();
        config.table.insert(
            "oak".to_string(),
            vec![LootRuleConfig {
                item: "minecraft:apple".to_string(),
                chance: 150.0,
                min: 1,
                max: 1,
            }],
        );
        assert!(matches!(
            LootTable::from_config(&config),
            Err(LootError::ChanceOutOfRange { .. })
        ));

        let mut table = LootTable::empty();
        let result = table.insert(FoliageSpecies::Oak, entry("minecraft:stick", 2.0, 3, 1));
        assert!(matches!(result, Err(LootError::InvertedRange { .. })));
    }
}
