//! Item stacks and the tool components the durability ledger reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Enchantment that scales effective durability.
pub const UNBREAKING: &str = "unbreaking";

/// Wear state of a damageable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durability {
    /// Damage taken so far; the item breaks when this reaches the max.
    pub damage: u32,
    /// Damage the item can take.
    pub max_durability: u32,
}

/// An item stack as seen through the host's inventory interface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Item type id (e.g. `minecraft:iron_axe`).
    pub type_id: String,
    /// Number of items in the stack.
    pub count: u32,
    /// Durability component, if the item is damageable.
    pub durability: Option<Durability>,
    /// Enchantment name → level.
    pub enchantments: BTreeMap<String, u32>,
}

impl ItemStack {
    /// Creates a plain stack with no components.
    pub fn new(type_id: impl Into<String>, count: u32) -> Self {
        Self {
            type_id: type_id.into(),
            count,
            durability: None,
            enchantments: BTreeMap::new(),
        }
    }

    /// Creates a single damageable tool.
    pub fn tool(type_id: impl Into<String>, damage: u32, max_durability: u32) -> Self {
        let mut stack = Self::new(type_id, 1);
        stack.durability = Some(Durability {
            damage,
            max_durability,
        });
        stack
    }

    /// Adds or replaces an enchantment.
    pub fn with_enchantment(mut self, name: &str, level: u32) -> Self {
        self.enchantments.insert(name.to_string(), level);
        self
    }

    /// Level of the named enchantment, `0` when absent.
    pub fn enchantment_level(&self, name: &str) -> u32 {
        self.enchantments.get(name).copied().unwrap_or(0)
    }
}
