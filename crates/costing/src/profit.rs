//! Scaling and profit analysis.

use core::num::NonZeroU32;
use core::str::FromStr;

use serde::Serialize;

use brewerp_core::{DomainError, RecipeId};
use brewerp_inventory::InventoryItem;
use brewerp_recipes::Recipe;

use crate::cogs::calculate_cogs;

/// Number of servings to scale a recipe to. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CupCount(NonZeroU32);

impl CupCount {
    pub const ONE: CupCount = CupCount(NonZeroU32::MIN);

    pub fn new(cups: u32) -> Result<Self, DomainError> {
        NonZeroU32::new(cups)
            .map(Self)
            .ok_or_else(|| DomainError::validation("number of cups must be at least 1"))
    }

    /// Lenient constructor for free-form input: anything below 1 becomes 1.
    pub fn clamped(cups: i64) -> Self {
        let cups = cups.clamp(1, i64::from(u32::MAX)) as u32;
        // clamp guarantees a non-zero value.
        NonZeroU32::new(cups).map_or(Self::ONE, Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for CupCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl FromStr for CupCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cups: u32 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("number of cups must be a positive integer, got {s:?}")))?;
        Self::new(cups)
    }
}

impl core::fmt::Display for CupCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// `cost_per_cup * cups`.
pub fn total_cost(cost_per_cup: f64, cups: CupCount) -> f64 {
    cost_per_cup * f64::from(cups.get())
}

/// `(selling_price - cost_per_cup) * cups`.
pub fn total_profit(selling_price: f64, cost_per_cup: f64, cups: CupCount) -> f64 {
    (selling_price - cost_per_cup) * f64::from(cups.get())
}

/// Cost and profit of a recipe scaled to a number of cups.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitAnalysis {
    pub recipe_id: RecipeId,
    pub cups: CupCount,
    pub cost_per_cup: f64,
    pub selling_price: f64,
    pub profit_per_cup: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    /// `profit_per_cup / selling_price`; `None` for a free drink.
    pub margin: Option<f64>,
}

/// Analyse `recipe` against the current inventory prices.
///
/// Nothing is cached: call again after prices change.
pub fn analyze(recipe: &Recipe, inventory: &[InventoryItem], cups: CupCount) -> ProfitAnalysis {
    let cost_per_cup = calculate_cogs(&recipe.items, inventory);
    let profit_per_cup = recipe.selling_price - cost_per_cup;
    let margin = (recipe.selling_price > 0.0).then(|| profit_per_cup / recipe.selling_price);

    ProfitAnalysis {
        recipe_id: recipe.id,
        cups,
        cost_per_cup,
        selling_price: recipe.selling_price,
        profit_per_cup,
        total_cost: total_cost(cost_per_cup, cups),
        total_profit: total_profit(recipe.selling_price, cost_per_cup, cups),
        margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewerp_core::InventoryItemId;
    use brewerp_recipes::RecipeItem;

    fn inventory() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new(InventoryItemId::new(1), "Aren Sugar", 1.0, "kg", 60000.0).unwrap(),
            InventoryItem::new(InventoryItemId::new(2), "Milk", 1.0, "Liter", 30000.0).unwrap(),
        ]
    }

    fn recipe(selling_price: f64) -> Recipe {
        Recipe::new(
            RecipeId::new(1),
            "Aren Latte",
            "Milk and aren sugar",
            vec![
                RecipeItem::new(InventoryItemId::new(1), 15.0),
                RecipeItem::new(InventoryItemId::new(2), 150.0),
            ],
            selling_price,
        )
        .unwrap()
    }

    #[test]
    fn cup_count_rejects_zero() {
        assert!(CupCount::new(0).is_err());
        assert!("0".parse::<CupCount>().is_err());
        assert!("-3".parse::<CupCount>().is_err());
        assert!("two".parse::<CupCount>().is_err());
        assert_eq!("12".parse::<CupCount>().unwrap().get(), 12);
    }

    #[test]
    fn clamped_cup_count_never_drops_below_one() {
        assert_eq!(CupCount::clamped(-5), CupCount::ONE);
        assert_eq!(CupCount::clamped(0), CupCount::ONE);
        assert_eq!(CupCount::clamped(3).get(), 3);
        assert_eq!(CupCount::clamped(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn analysis_for_single_cup() {
        let analysis = analyze(&recipe(25000.0), &inventory(), CupCount::ONE);
        assert_eq!(analysis.cost_per_cup, 5400.0);
        assert_eq!(analysis.profit_per_cup, 19600.0);
        assert_eq!(analysis.total_cost, 5400.0);
        assert_eq!(analysis.total_profit, 19600.0);
        assert_eq!(analysis.margin, Some(19600.0 / 25000.0));
    }

    #[test]
    fn analysis_scales_with_cups() {
        let cups = CupCount::new(10).unwrap();
        let analysis = analyze(&recipe(25000.0), &inventory(), cups);
        assert_eq!(analysis.total_cost, 54000.0);
        assert_eq!(analysis.total_profit, 196000.0);
    }

    #[test]
    fn loss_making_and_free_recipes() {
        let loss = analyze(&recipe(5000.0), &inventory(), CupCount::new(2).unwrap());
        assert_eq!(loss.profit_per_cup, -400.0);
        assert_eq!(loss.total_profit, -800.0);

        let free = analyze(&recipe(0.0), &inventory(), CupCount::ONE);
        assert_eq!(free.margin, None);
    }

    #[test]
    fn analysis_tracks_price_changes() {
        let mut inventory = inventory();
        let before = analyze(&recipe(25000.0), &inventory, CupCount::ONE);
        inventory[1].price_per_qty = 40000.0;
        let after = analyze(&recipe(25000.0), &inventory, CupCount::ONE);
        assert_eq!(before.cost_per_cup, 5400.0);
        assert_eq!(after.cost_per_cup, 6900.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: totals are the per-cup figures times the cup count.
            #[test]
            fn totals_scale_with_cups(
                selling_price in 0.0f64..1_000_000.0,
                cups in 1u32..10_000
            ) {
                let cups = CupCount::new(cups).unwrap();
                let analysis = analyze(&recipe(selling_price), &inventory(), cups);
                let n = f64::from(cups.get());
                prop_assert_eq!(analysis.total_cost, analysis.cost_per_cup * n);
                prop_assert_eq!(analysis.total_profit, (selling_price - analysis.cost_per_cup) * n);
            }
        }
    }
}
