//! Recipes domain module.
//!
//! A recipe is a named drink made from a fixed list of inventory quantities
//! plus the price it sells for. Pure domain logic: no IO, no persistence.

pub mod recipe;
pub mod store;

pub use recipe::{IngredientInput, Recipe, RecipeForm, RecipeItem};
pub use store::RecipeStore;
