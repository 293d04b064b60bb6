//! Cost of goods sold and profit.
//!
//! Everything here is a pure function of a recipe and an inventory snapshot.
//! Results are derived fresh on every call and never written back.

pub mod cogs;
pub mod money;
pub mod profit;

pub use cogs::{CostBreakdown, IngredientCost, calculate_cogs, cost_breakdown, ingredient_cost};
pub use money::{format_amount, format_rupiah};
pub use profit::{CupCount, ProfitAnalysis, analyze, total_cost, total_profit};
