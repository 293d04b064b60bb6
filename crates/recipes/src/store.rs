//! In-memory recipe store.

use brewerp_core::{DomainResult, EntityCollection, InventoryItemId, RecipeId};

use crate::recipe::Recipe;

/// Ordered collection of recipes, exclusively owned by the workspace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeStore {
    recipes: EntityCollection<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> DomainResult<Self> {
        for recipe in &recipes {
            recipe.validate()?;
        }
        Ok(Self {
            recipes: EntityCollection::from_vec(recipes)?,
        })
    }

    pub fn list(&self) -> &[Recipe] {
        self.recipes.list()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn add(&mut self, recipe: Recipe) -> DomainResult<Recipe> {
        recipe.validate()?;
        let stored = self.recipes.add(recipe)?;
        tracing::debug!(recipe_id = %stored.id, name = %stored.name, "recipe added");
        Ok(stored)
    }

    /// Replace the recipe with the same id, ingredient list included.
    /// Returns `Ok(false)` when nothing matched.
    pub fn update(&mut self, recipe: Recipe) -> DomainResult<bool> {
        recipe.validate()?;
        let id = recipe.id;
        let matched = self.recipes.update(recipe);
        if !matched {
            tracing::debug!(recipe_id = %id, "recipe update ignored: no such recipe");
        }
        Ok(matched)
    }

    pub fn delete(&mut self, id: RecipeId) -> Option<Recipe> {
        let removed = self.recipes.delete(&id);
        if removed.is_none() {
            tracing::debug!(recipe_id = %id, "recipe delete ignored: no such recipe");
        }
        removed
    }

    /// Recipes with at least one ingredient line pointing at `item_id`.
    pub fn referencing(&self, item_id: InventoryItemId) -> Vec<&Recipe> {
        self.list().iter().filter(|recipe| recipe.uses_item(item_id)).collect()
    }
}
