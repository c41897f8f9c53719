//! Durability ledger: how much of a felling the tool can pay for.
//!
//! Unbreaking is modelled the deterministic way: a tool with level `n`
//! behaves as if it had `n + 1` times its durability. Damage is scaled up
//! into that effective space, the felling is charged one point per trunk
//! block, and the result is scaled back down (rounding up) to a raw damage
//! value.

use timber_world::{BlockPos, Durability, ItemStack, UNBREAKING};

/// Durability in effective (enchantment-scaled) units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurabilityRecord {
    /// `1 + unbreaking level`.
    pub multiplier: u64,
    /// Current damage × multiplier, capped at `effective_max`.
    pub effective_damage: u64,
    /// Max durability × multiplier.
    pub effective_max: u64,
}

impl DurabilityRecord {
    /// Scales a raw durability component by the enchantment multiplier.
    pub fn new(durability: Durability, unbreaking_level: u32) -> Self {
        let multiplier = 1 + u64::from(unbreaking_level);
        let effective_max = u64::from(durability.max_durability) * multiplier;
        let effective_damage = (u64::from(durability.damage) * multiplier).min(effective_max);
        Self {
            multiplier,
            effective_damage,
            effective_max,
        }
    }

    /// Trunk blocks the tool can still cut.
    pub fn remaining(&self) -> u64 {
        self.effective_max - self.effective_damage
    }
}

/// Outcome of planning a felling against a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumptionPlan {
    /// Trunk blocks that will actually be felled.
    pub actual: usize,
    /// Trunk blocks dropped from the top of the list.
    pub truncated: usize,
    /// Raw damage to write back onto the tool.
    pub new_damage: u32,
}

impl ConsumptionPlan {
    /// Drops the trailing (topmost) entries the tool cannot pay for.
    pub fn apply(&self, trunk: &mut Vec<BlockPos>) {
        trunk.truncate(self.actual);
    }
}

/// Plans cutting `planned` trunk blocks with a tool in the given state.
///
/// If the cut would reach the tool's effective max, the overflow is removed
/// from the end of the work list and damage stops at the max.
pub fn plan_consumption(
    durability: Durability,
    unbreaking_level: u32,
    planned: usize,
) -> ConsumptionPlan {
    let record = DurabilityRecord::new(durability, unbreaking_level);
    let tentative = record.effective_damage + planned as u64;
    let overflow = tentative.saturating_sub(record.effective_max);
    let actual = planned.saturating_sub(overflow as usize);

    let consumed = tentative.min(record.effective_max);
    let new_damage = consumed
        .div_ceil(record.multiplier)
        .min(u64::from(durability.max_durability)) as u32;

    ConsumptionPlan {
        actual,
        truncated: planned - actual,
        new_damage,
    }
}

/// Plans against `tool` and writes the new damage onto it.
///
/// Returns `None` for items without a durability component; those are never
/// charged and never truncate the cut.
pub fn charge_tool(tool: &mut ItemStack, planned: usize) -> Option<ConsumptionPlan> {
    let level = tool.enchantment_level(UNBREAKING);
    let durability = tool.durability.as_mut()?;
    let plan = plan_consumption(*durability, level, planned);
    durability.damage = plan.new_damage;
    Some(plan)
}
