//! COGS calculator.
//!
//! Cost rules, keyed on the inventory item's uom (case-insensitive):
//!
//! | uom | cost of one ingredient line |
//! |---|---|
//! | `kg`, `liter` | `quantity / 1000 * price_per_qty` |
//! | `pcs` and anything else | `quantity / item.quantity * price_per_qty` |
//!
//! The bulk rule assumes one purchased unit is exactly 1000 recipe sub-units
//! and ignores the item's own `quantity`. Existing catalogs rely on that, so it
//! is kept as is.
//!
//! Lines whose item no longer exists cost nothing. [`cost_breakdown`] reports
//! them; [`calculate_cogs`] just skips them.

use std::collections::HashMap;

use serde::Serialize;

use brewerp_core::{InventoryItemId, ValueObject};
use brewerp_inventory::{InventoryItem, UomKind};
use brewerp_recipes::RecipeItem;

/// Recipe sub-units per purchased bulk unit (g per kg, ml per liter).
const SUB_UNITS_PER_BULK_UNIT: f64 = 1000.0;

/// Cost of one ingredient line against the item it references.
///
/// No guard against `item.quantity == 0`; the inventory invariant keeps it
/// positive.
pub fn ingredient_cost(line: &RecipeItem, item: &InventoryItem) -> f64 {
    match item.uom_kind() {
        UomKind::Bulk => (line.quantity / SUB_UNITS_PER_BULK_UNIT) * item.price_per_qty,
        UomKind::Pieces | UomKind::Other => (line.quantity / item.quantity) * item.price_per_qty,
    }
}

fn index(inventory: &[InventoryItem]) -> HashMap<InventoryItemId, &InventoryItem> {
    let mut by_id = HashMap::with_capacity(inventory.len());
    for item in inventory {
        // First match wins, same as a linear scan.
        by_id.entry(item.id).or_insert(item);
    }
    by_id
}

/// Total ingredient cost of one serving.
///
/// Pure and deterministic. An empty list costs `0`; unknown item ids add `0`.
/// The result is not rounded.
pub fn calculate_cogs(items: &[RecipeItem], inventory: &[InventoryItem]) -> f64 {
    let by_id = index(inventory);
    items.iter().fold(0.0, |total, line| match by_id.get(&line.item_id) {
        Some(item) => total + ingredient_cost(line, item),
        None => total,
    })
}

/// Cost of a single ingredient line, as shown in a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientCost {
    pub item_id: InventoryItemId,
    /// `None` when the line references a deleted item.
    pub name: Option<String>,
    pub uom: Option<String>,
    pub quantity: f64,
    pub cost: f64,
}

impl IngredientCost {
    pub fn is_missing(&self) -> bool {
        self.name.is_none()
    }
}

impl ValueObject for IngredientCost {}

/// Per-line costs of a recipe plus their total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub lines: Vec<IngredientCost>,
    pub total: f64,
}

impl ValueObject for CostBreakdown {}

impl CostBreakdown {
    /// Item ids referenced by the recipe that are no longer in the inventory.
    pub fn missing_items(&self) -> Vec<InventoryItemId> {
        self.lines
            .iter()
            .filter(|line| line.is_missing())
            .map(|line| line.item_id)
            .collect()
    }
}

/// Line-by-line version of [`calculate_cogs`]; `total` is the same number.
pub fn cost_breakdown(items: &[RecipeItem], inventory: &[InventoryItem]) -> CostBreakdown {
    let by_id = index(inventory);
    let mut total = 0.0;
    let mut lines = Vec::with_capacity(items.len());

    for line in items {
        let entry = match by_id.get(&line.item_id) {
            Some(item) => {
                let cost = ingredient_cost(line, item);
                total += cost;
                IngredientCost {
                    item_id: line.item_id,
                    name: Some(item.name.clone()),
                    uom: Some(item.uom.clone()),
                    quantity: line.quantity,
                    cost,
                }
            }
            None => {
                tracing::debug!(item_id = %line.item_id, "ingredient references a missing inventory item");
                IngredientCost {
                    item_id: line.item_id,
                    name: None,
                    uom: None,
                    quantity: line.quantity,
                    cost: 0.0,
                }
            }
        };
        lines.push(entry);
    }

    CostBreakdown { lines, total }
}
