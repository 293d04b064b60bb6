//! Default catalog for a fresh install.

use brewerp_auth::AuthState;
use brewerp_core::{InventoryItemId, RecipeId};
use brewerp_inventory::InventoryItem;
use brewerp_recipes::{Recipe, RecipeItem};

use crate::state_store::PersistedState;

/// (id, name, batch quantity, uom, batch price)
const SEED_INVENTORY: [(u64, &str, f64, &str, f64); 6] = [
    (1, "Aren Sugar", 1.0, "kg", 60000.0),
    (2, "Milk", 1.0, "Liter", 30000.0),
    (3, "Ice Cube", 1.0, "Kg", 15000.0),
    (4, "Plastic Cup", 10.0, "pcs", 5000.0),
    (5, "Coffee Bean", 1.0, "kg", 100000.0),
    (6, "Mineral Water", 1.0, "Liter", 5000.0),
];

/// Ingredient lines of the house iced coffee: (item id, quantity).
const CLASSIC_ICED_COFFEE: [(u64, f64); 6] = [
    (1, 15.0),  // g
    (2, 150.0), // ml
    (3, 20.0),  // g
    (4, 1.0),   // pcs
    (5, 20.0),  // g
    (6, 50.0),  // ml
];

pub fn seed_inventory() -> Vec<InventoryItem> {
    SEED_INVENTORY
        .iter()
        .map(|&(id, name, quantity, uom, price_per_qty)| InventoryItem {
            id: InventoryItemId::new(id),
            name: name.to_string(),
            quantity,
            uom: uom.to_string(),
            price_per_qty,
        })
        .collect()
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![Recipe {
        id: RecipeId::new(1),
        name: "Classic Iced Coffee".to_string(),
        description: "Our signature iced coffee with milk and aren sugar".to_string(),
        items: CLASSIC_ICED_COFFEE
            .iter()
            .map(|&(id, quantity)| RecipeItem::new(InventoryItemId::new(id), quantity))
            .collect(),
        selling_price: 25000.0,
    }]
}

/// First-run state: the default catalog and nobody signed in.
pub fn seed_state() -> PersistedState {
    PersistedState {
        auth: AuthState::logged_out(),
        inventory: seed_inventory(),
        recipes: seed_recipes(),
    }
}
