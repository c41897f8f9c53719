//! Block catalog: resolves host type ids to a closed set of [`BlockKind`]s.
//!
//! The catalog is built once at startup from the vanilla id tables plus any
//! configured extras. Registration rejects duplicates and unknown species, so
//! a bad configuration fails at load time instead of silently matching
//! nothing during a felling.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::host::Block;

/// Type id of the empty block.
pub const AIR: &str = "minecraft:air";

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Wood species with a vanilla trunk block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WoodSpecies {
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
    Mangrove,
    Cherry,
    /// Fungal stem from the crimson forest.
    Crimson,
    /// Fungal stem from the warped forest.
    Warped,
}

impl WoodSpecies {
    /// All wood species.
    pub const ALL: [Self; 10] = [
        Self::Oak,
        Self::Spruce,
        Self::Birch,
        Self::Jungle,
        Self::Acacia,
        Self::DarkOak,
        Self::Mangrove,
        Self::Cherry,
        Self::Crimson,
        Self::Warped,
    ];

    /// Lowercase species name as used in type ids.
    pub fn name(self) -> &'static str {
        match self {
            Self::Oak => "oak",
            Self::Spruce => "spruce",
            Self::Birch => "birch",
            Self::Jungle => "jungle",
            Self::Acacia => "acacia",
            Self::DarkOak => "dark_oak",
            Self::Mangrove => "mangrove",
            Self::Cherry => "cherry",
            Self::Crimson => "crimson",
            Self::Warped => "warped",
        }
    }

    /// Type id of the trunk block.
    pub fn trunk_id(self) -> String {
        match self {
            Self::Crimson | Self::Warped => format!("minecraft:{}_stem", self.name()),
            _ => format!("minecraft:{}_log", self.name()),
        }
    }

    /// Type id of the stripped trunk block.
    pub fn stripped_id(self) -> String {
        match self {
            Self::Crimson | Self::Warped => format!("minecraft:stripped_{}_stem", self.name()),
            _ => format!("minecraft:stripped_{}_log", self.name()),
        }
    }
}

/// Foliage species; each one has its own loot entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FoliageSpecies {
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
    Mangrove,
    Cherry,
    Azalea,
    FloweringAzalea,
    /// Nether wart block, the crown of crimson fungi.
    NetherWart,
    /// Warped wart block, the crown of warped fungi.
    WarpedWart,
}

impl FoliageSpecies {
    /// All foliage species.
    pub const ALL: [Self; 12] = [
        Self::Oak,
        Self::Spruce,
        Self::Birch,
        Self::Jungle,
        Self::Acacia,
        Self::DarkOak,
        Self::Mangrove,
        Self::Cherry,
        Self::Azalea,
        Self::FloweringAzalea,
        Self::NetherWart,
        Self::WarpedWart,
    ];

    /// Lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Oak => "oak",
            Self::Spruce => "spruce",
            Self::Birch => "birch",
            Self::Jungle => "jungle",
            Self::Acacia => "acacia",
            Self::DarkOak => "dark_oak",
            Self::Mangrove => "mangrove",
            Self::Cherry => "cherry",
            Self::Azalea => "azalea",
            Self::FloweringAzalea => "flowering_azalea",
            Self::NetherWart => "nether_wart",
            Self::WarpedWart => "warped_wart",
        }
    }

    /// Parses a configuration name back into a species.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|species| species.name() == name)
    }

    /// Type id of the vanilla foliage block.
    pub fn block_id(self) -> &'static str {
        match self {
            Self::Oak => "minecraft:oak_leaves",
            Self::Spruce => "minecraft:spruce_leaves",
            Self::Birch => "minecraft:birch_leaves",
            Self::Jungle => "minecraft:jungle_leaves",
            Self::Acacia => "minecraft:acacia_leaves",
            Self::DarkOak => "minecraft:dark_oak_leaves",
            Self::Mangrove => "minecraft:mangrove_leaves",
            Self::Cherry => "minecraft:cherry_leaves",
            Self::Azalea => "minecraft:azalea_leaves",
            Self::FloweringAzalea => "minecraft:azalea_leaves_flowered",
            Self::NetherWart => "minecraft:nether_wart_block",
            Self::WarpedWart => "minecraft:warped_wart_block",
        }
    }
}

/// What the felling core cares about for a given block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Air,
    /// Log or stem that can be felled and that supports foliage.
    Trunk,
    /// Stripped log or stem; ignored by connectivity and support checks.
    StrippedTrunk,
    Foliage(FoliageSpecies),
    Other,
}

impl BlockKind {
    /// Returns `true` for a non-stripped trunk.
    pub fn is_trunk(self) -> bool {
        self == Self::Trunk
    }

    /// Returns `true` for any foliage-family block.
    pub fn is_foliage(self) -> bool {
        matches!(self, Self::Foliage(_))
    }
}

/// Errors raised while building the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The type id is already registered.
    #[error("duplicate block or item id: {0}")]
    DuplicateId(String),
    /// A configured foliage entry names a species that does not exist.
    #[error("unknown foliage species `{species}` for {type_id}")]
    UnknownSpecies {
        /// Configured block id.
        type_id: String,
        /// Configured species name.
        species: String,
    },
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// How a type id resolves to a [`BlockKind`].
#[derive(Clone, Copy, Debug)]
enum Entry {
    Fixed(BlockKind),
    /// Legacy foliage block whose species lives in the variant state.
    /// The first listed species is the block's default state.
    Variant(&'static [FoliageSpecies]),
}

const LEGACY_LEAVES: &[FoliageSpecies] = &[
    FoliageSpecies::Oak,
    FoliageSpecies::Spruce,
    FoliageSpecies::Birch,
    FoliageSpecies::Jungle,
];
const LEGACY_LEAVES2: &[FoliageSpecies] = &[FoliageSpecies::Acacia, FoliageSpecies::DarkOak];

const VANILLA_AXES: [&str; 6] = [
    "minecraft:wooden_axe",
    "minecraft:stone_axe",
    "minecraft:iron_axe",
    "minecraft:golden_axe",
    "minecraft:diamond_axe",
    "minecraft:netherite_axe",
];

/// Maps host type ids to [`BlockKind`] with O(1) lookup, and knows which item
/// ids are axes.
pub struct Catalog {
    blocks: FxHashMap<String, Entry>,
    axes: FxHashSet<String>,
}

impl Catalog {
    /// Creates a catalog containing only air.
    pub fn empty() -> Self {
        let mut blocks = FxHashMap::default();
        blocks.insert(AIR.to_string(), Entry::Fixed(BlockKind::Air));
        Self {
            blocks,
            axes: FxHashSet::default(),
        }
    }

    /// Creates a catalog with every vanilla trunk, foliage block and axe.
    pub fn vanilla() -> Self {
        let mut catalog = Self::empty();
        for species in WoodSpecies::ALL {
            catalog
                .blocks
                .insert(species.trunk_id(), Entry::Fixed(BlockKind::Trunk));
            catalog
                .blocks
                .insert(species.stripped_id(), Entry::Fixed(BlockKind::StrippedTrunk));
        }
        for species in FoliageSpecies::ALL {
            catalog.blocks.insert(
                species.block_id().to_string(),
                Entry::Fixed(BlockKind::Foliage(species)),
            );
        }
        catalog
            .blocks
            .insert("minecraft:leaves".to_string(), Entry::Variant(LEGACY_LEAVES));
        catalog
            .blocks
            .insert("minecraft:leaves2".to_string(), Entry::Variant(LEGACY_LEAVES2));
        catalog
            .axes
            .extend(VANILLA_AXES.iter().map(|id| id.to_string()));
        catalog
    }

    /// Registers an extra trunk block id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the id is already known.
    pub fn register_trunk(&mut self, type_id: &str) -> Result<(), CatalogError> {
        self.insert_block(type_id, Entry::Fixed(BlockKind::Trunk))
    }

    /// Registers an extra foliage block id under a named species.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownSpecies`] if `species` is not a
    /// [`FoliageSpecies`] name, or [`CatalogError::DuplicateId`].
    pub fn register_foliage(&mut self, type_id: &str, species: &str) -> Result<(), CatalogError> {
        let Some(parsed) = FoliageSpecies::from_name(species) else {
            return Err(CatalogError::UnknownSpecies {
                type_id: type_id.to_string(),
                species: species.to_string(),
            });
        };
        self.insert_block(type_id, Entry::Fixed(BlockKind::Foliage(parsed)))
    }

    /// Registers an extra axe item id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the id is already an axe.
    pub fn register_axe(&mut self, item_id: &str) -> Result<(), CatalogError> {
        if !self.axes.insert(item_id.to_string()) {
            return Err(CatalogError::DuplicateId(item_id.to_string()));
        }
        Ok(())
    }

    fn insert_block(&mut self, type_id: &str, entry: Entry) -> Result<(), CatalogError> {
        if self.blocks.contains_key(type_id) {
            return Err(CatalogError::DuplicateId(type_id.to_string()));
        }
        self.blocks.insert(type_id.to_string(), entry);
        Ok(())
    }

    /// Resolves a bare type id. Legacy variant blocks resolve to their
    /// default species.
    pub fn kind_of(&self, type_id: &str) -> BlockKind {
        self.resolve(type_id, None)
    }

    /// Resolves a block, consulting its variant state where needed.
    pub fn classify(&self, block: &Block) -> BlockKind {
        self.resolve(&block.type_id, block.variant.as_deref())
    }

    fn resolve(&self, type_id: &str, variant: Option<&str>) -> BlockKind {
        match self.blocks.get(type_id) {
            Some(Entry::Fixed(kind)) => *kind,
            Some(Entry::Variant(species)) => {
                let chosen = variant
                    .and_then(|name| species.iter().find(|s| s.name() == name))
                    .unwrap_or(&species[0]);
                BlockKind::Foliage(*chosen)
            }
            None => BlockKind::Other,
        }
    }

    /// Returns `true` if `item_id` is a known axe.
    pub fn is_axe(&self, item_id: &str) -> bool {
        self.axes.contains(item_id)
    }

    /// Number of registered block ids (including air).
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if only air is registered.
    pub fn is_empty(&self) -> bool {
        self.blocks.len() <= 1
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::vanilla()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
