//! Application state container.
//!
//! `Workspace` owns the session, both stores, the state store and the
//! observer bus. Every mutation follows the same sequence:
//!
//! 1. apply the change in memory;
//! 2. publish a [`StoreEvent`] to subscribers;
//! 3. save the full state blob.
//!
//! A failed save is logged and otherwise ignored: memory stays authoritative
//! for the rest of the session and the next successful save catches up. The
//! calculator functions only ever see read-only slices of the stores.

use std::sync::Arc;

use thiserror::Error;

use brewerp_auth::{AuthError, AuthState, MagicLink};
use brewerp_core::{DomainError, DomainResult, InventoryItemId, RecipeId};
use brewerp_costing::{CostBreakdown, CupCount, ProfitAnalysis, analyze, calculate_cogs, cost_breakdown};
use brewerp_events::{Event, EventBus, InMemoryEventBus, StoreEvent, StoreEventKind, Subscription};
use brewerp_inventory::{InventoryItem, InventoryItemForm, InventoryStore};
use brewerp_recipes::{Recipe, RecipeForm, RecipeStore};

use crate::seed::seed_state;
use crate::state_store::{PersistedState, StateStore, StateStoreError};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("state store error: {0}")]
    Store(#[from] StateStoreError),
}

/// Answer to "are you sure?" before a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

pub struct Workspace<S: StateStore> {
    auth: AuthState,
    inventory: InventoryStore,
    recipes: RecipeStore,
    store: S,
    bus: Arc<InMemoryEventBus<StoreEvent>>,
}

impl<S: StateStore> core::fmt::Debug for Workspace<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Workspace")
            .field("auth", &self.auth)
            .field("inventory", &self.inventory.len())
            .field("recipes", &self.recipes.len())
            .finish_non_exhaustive()
    }
}

impl<S: StateStore> Workspace<S> {
    /// Rehydrate from `store`, or seed the default catalog on first run.
    ///
    /// A missing blob is not an error; an unreadable or invalid one is.
    pub fn open(store: S) -> Result<Self, WorkspaceError> {
        match store.load()? {
            Some(state) => {
                let workspace = Self::from_state(state, store)?;
                tracing::info!(
                    inventory = workspace.inventory.len(),
                    recipes = workspace.recipes.len(),
                    "state loaded"
                );
                Ok(workspace)
            }
            None => {
                let workspace = Self::from_state(seed_state(), store)?;
                tracing::info!("no saved state found; seeded default catalog");
                workspace.persist();
                Ok(workspace)
            }
        }
    }

    fn from_state(state: PersistedState, store: S) -> DomainResult<Self> {
        Ok(Self {
            auth: state.auth,
            inventory: InventoryStore::from_items(state.inventory)?,
            recipes: RecipeStore::from_recipes(state.recipes)?,
            store,
            bus: Arc::new(InMemoryEventBus::new()),
        })
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn recipes(&self) -> &RecipeStore {
        &self.recipes
    }

    pub fn state_store(&self) -> &S {
        &self.store
    }

    /// Register an observer. It receives every change made after this call.
    pub fn subscribe(&self) -> Subscription<StoreEvent> {
        self.bus.subscribe()
    }

    /// Current state, as it would be saved.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            auth: self.auth.clone(),
            inventory: self.inventory.list().to_vec(),
            recipes: self.recipes.list().to_vec(),
        }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.snapshot()) {
            tracing::warn!(error = %err, "failed to save state; keeping in-memory state");
        }
    }

    fn commit(&self, kind: StoreEventKind) {
        let event = StoreEvent::now(kind);
        tracing::debug!(event = event.event_type(), "publishing");
        if let Err(err) = self.bus.publish(event) {
            tracing::warn!(error = ?err, "failed to notify observers");
        }
        self.persist();
    }

    // -------------------------
    // Session
    // -------------------------

    /// Validate the address and complete the simulated magic-link round trip.
    pub fn sign_in(&mut self, email: &str) -> Result<&AuthState, AuthError> {
        let link = MagicLink::request(email)?;
        Ok(self.complete_sign_in(link))
    }

    /// Finish sign-in with a link obtained from [`MagicLink::request`].
    pub fn complete_sign_in(&mut self, link: MagicLink) -> &AuthState {
        let email = link.email().to_string();
        self.auth = link.verify();
        tracing::info!(%email, "signed in");
        self.commit(StoreEventKind::SignedIn { email });
        &self.auth
    }

    pub fn sign_out(&mut self) {
        self.auth = AuthState::logged_out();
        tracing::info!("signed out");
        self.commit(StoreEventKind::SignedOut);
    }

    // -------------------------
    // Inventory
    // -------------------------

    pub fn add_inventory_item(&mut self, form: &InventoryItemForm) -> DomainResult<InventoryItem> {
        let mut item = form.parse()?;
        // New records always get a fresh id.
        item.id = InventoryItemId::default();
        let stored = self.inventory.add(item)?;
        tracing::info!(item_id = %stored.id, name = %stored.name, "inventory item added");
        self.commit(StoreEventKind::InventoryItemAdded {
            item_id: stored.id,
            name: stored.name.clone(),
        });
        Ok(stored)
    }

    /// Returns `Ok(false)` when the form's id matches no item.
    pub fn update_inventory_item(&mut self, form: &InventoryItemForm) -> DomainResult<bool> {
        let Some(id) = form.id else {
            return Err(DomainError::validation("an item id is required to update"));
        };
        let item = form.parse()?;
        if !self.inventory.update(item)? {
            return Ok(false);
        }
        tracing::info!(item_id = %id, "inventory item updated");
        self.commit(StoreEventKind::InventoryItemUpdated { item_id: id });
        Ok(true)
    }

    /// Delete an item once confirmed. Recipes that use it keep their lines,
    /// which then cost nothing.
    pub fn delete_inventory_item(
        &mut self,
        id: InventoryItemId,
        confirmation: Confirmation,
    ) -> DomainResult<Option<InventoryItem>> {
        if confirmation == Confirmation::Declined {
            tracing::debug!(item_id = %id, "inventory delete declined");
            return Ok(None);
        }
        let Some(removed) = self.inventory.delete(id) else {
            return Ok(None);
        };
        let dangling = self.recipes.referencing(id).len();
        tracing::info!(item_id = %id, dangling_recipes = dangling, "inventory item deleted");
        self.commit(StoreEventKind::InventoryItemDeleted { item_id: id });
        Ok(Some(removed))
    }

    pub fn replace_inventory(&mut self, items: Vec<InventoryItem>) -> DomainResult<()> {
        self.inventory.replace_all(items)?;
        let count = self.inventory.len();
        tracing::info!(count, "inventory replaced");
        self.commit(StoreEventKind::InventoryReplaced { count });
        Ok(())
    }

    // -------------------------
    // Recipes
    // -------------------------

    pub fn add_recipe(&mut self, form: &RecipeForm) -> DomainResult<Recipe> {
        let mut recipe = form.parse()?;
        recipe.id = RecipeId::default();
        let stored = self.recipes.add(recipe)?;
        tracing::info!(recipe_id = %stored.id, name = %stored.name, "recipe added");
        self.commit(StoreEventKind::RecipeAdded {
            recipe_id: stored.id,
            name: stored.name.clone(),
        });
        Ok(stored)
    }

    pub fn update_recipe(&mut self, form: &RecipeForm) -> DomainResult<bool> {
        let Some(id) = form.id else {
            return Err(DomainError::validation("a recipe id is required to update"));
        };
        let recipe = form.parse()?;
        if !self.recipes.update(recipe)? {
            return Ok(false);
        }
        tracing::info!(recipe_id = %id, "recipe updated");
        self.commit(StoreEventKind::RecipeUpdated { recipe_id: id });
        Ok(true)
    }

    pub fn delete_recipe(
        &mut self,
        id: RecipeId,
        confirmation: Confirmation,
    ) -> DomainResult<Option<Recipe>> {
        if confirmation == Confirmation::Declined {
            tracing::debug!(recipe_id = %id, "recipe delete declined");
            return Ok(None);
        }
        let Some(removed) = self.recipes.delete(id) else {
            return Ok(None);
        };
        tracing::info!(recipe_id = %id, "recipe deleted");
        self.commit(StoreEventKind::RecipeDeleted { recipe_id: id });
        Ok(Some(removed))
    }

    /// Put the default catalog back. The session is kept.
    pub fn reset_catalog(&mut self) -> DomainResult<()> {
        let seed = seed_state();
        self.inventory = InventoryStore::from_items(seed.inventory)?;
        self.recipes = RecipeStore::from_recipes(seed.recipes)?;
        tracing::info!("catalog reset to defaults");
        self.commit(StoreEventKind::StateReset);
        Ok(())
    }

    // -------------------------
    // Costing (read-only)
    // -------------------------

    fn recipe(&self, id: RecipeId) -> DomainResult<&Recipe> {
        self.recipes
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("recipe {id}")))
    }

    pub fn cogs(&self, id: RecipeId) -> DomainResult<f64> {
        let recipe = self.recipe(id)?;
        Ok(calculate_cogs(&recipe.items, self.inventory.list()))
    }

    pub fn cost_breakdown(&self, id: RecipeId) -> DomainResult<CostBreakdown> {
        let recipe = self.recipe(id)?;
        Ok(cost_breakdown(&recipe.items, self.inventory.list()))
    }

    pub fn profit(&self, id: RecipeId, cups: CupCount) -> DomainResult<ProfitAnalysis> {
        let recipe = self.recipe(id)?;
        Ok(analyze(recipe, self.inventory.list(), cups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewerp_recipes::IngredientInput;
    use crate::state_store::InMemoryStateStore;

    fn workspace() -> Workspace<Arc<InMemoryStateStore>> {
        Workspace::open(Arc::new(InMemoryStateStore::new())).unwrap()
    }

    fn cup_form() -> InventoryItemForm {
        InventoryItemForm {
            id: None,
            name: "Paper Straw".into(),
            quantity: "100".into(),
            uom: "pcs".into(),
            price_per_qty: "20000".into(),
        }
    }

    #[test]
    fn first_open_seeds_and_saves() {
        let ws = workspace();
        assert_eq!(ws.inventory().len(), 6);
        assert_eq!(ws.recipes().len(), 1);
        assert_eq!(ws.state_store().save_count(), 1);
        assert_eq!(ws.state_store().snapshot(), Some(seed_state()));
    }

    #[test]
    fn open_rehydrates_saved_state() {
        let mut state = seed_state();
        state.inventory.truncate(2);
        let ws = Workspace::open(InMemoryStateStore::with_state(state.clone())).unwrap();
        assert_eq!(ws.snapshot(), state);
        assert_eq!(ws.state_store().save_count(), 0);
    }

    #[test]
    fn open_rejects_invalid_saved_state() {
        let mut state = seed_state();
        state.inventory[0].quantity = 0.0;
        let err = Workspace::open(InMemoryStateStore::with_state(state)).unwrap_err();
        assert!(matches!(err, WorkspaceError::Domain(DomainError::InvariantViolation(_))));
    }

    #[test]
    fn open_rejects_recipe_without_description() {
        let mut state = seed_state();
        state.recipes[0].description = String::new();
        let err = Workspace::open(InMemoryStateStore::with_state(state)).unwrap_err();
        assert!(matches!(err, WorkspaceError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn mutations_save_and_notify() {
        let mut ws = workspace();
        let events = ws.subscribe();

        let straw = ws.add_inventory_item(&cup_form()).unwrap();
        assert_eq!(straw.id, InventoryItemId::new(7));
        assert_eq!(ws.state_store().save_count(), 2);

        let received = events.drain();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].kind,
            StoreEventKind::InventoryItemAdded {
                item_id: InventoryItemId::new(7),
                name: "Paper Straw".into()
            }
        );
        assert_eq!(ws.state_store().snapshot().unwrap().inventory.len(), 7);
    }

    #[test]
    fn add_ignores_id_from_form() {
        let mut ws = workspace();
        let mut form = cup_form();
        form.id = Some(InventoryItemId::new(1));
        assert_eq!(ws.add_inventory_item(&form).unwrap().id, InventoryItemId::new(7));
    }

    #[test]
    fn validation_errors_leave_state_untouched() {
        let mut ws = workspace();
        let events = ws.subscribe();
        let mut form = cup_form();
        form.quantity = "0".into();

        assert!(matches!(ws.add_inventory_item(&form), Err(DomainError::Validation(_))));
        assert_eq!(ws.inventory().len(), 6);
        assert!(events.drain().is_empty());
        assert_eq!(ws.state_store().save_count(), 1);
    }

    #[test]
    fn update_unknown_item_is_a_noop() {
        let mut ws = workspace();
        let mut form = cup_form();
        form.id = Some(InventoryItemId::new(99));
        assert!(!ws.update_inventory_item(&form).unwrap());
        assert_eq!(ws.state_store().save_count(), 1);

        form.id = None;
        assert!(matches!(ws.update_inventory_item(&form), Err(DomainError::Validation(_))));
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let mut ws = workspace();
        let removed = ws
            .delete_inventory_item(InventoryItemId::new(1), Confirmation::Declined)
            .unwrap();
        assert!(removed.is_none());
        assert_eq!(ws.inventory().len(), 6);

        assert!(ws.delete_recipe(RecipeId::new(1), false.into()).unwrap().is_none());
        assert_eq!(ws.recipes().len(), 1);
    }

    #[test]
    fn deleting_ingredient_keeps_recipe_lines_and_zeroes_their_cost() {
        let mut ws = workspace();
        assert_eq!(ws.cogs(RecipeId::new(1)).unwrap(), 8450.0);

        // Coffee Bean: 20 g of a 100,000 / kg bag = 2,000.
        ws.delete_inventory_item(InventoryItemId::new(5), Confirmation::Confirmed)
            .unwrap()
            .unwrap();

        let recipe = ws.recipes().get(RecipeId::new(1)).unwrap();
        assert_eq!(recipe.items.len(), 6);
        assert_eq!(ws.cogs(RecipeId::new(1)).unwrap(), 6450.0);
        assert_eq!(
            ws.cost_breakdown(RecipeId::new(1)).unwrap().missing_items(),
            vec![InventoryItemId::new(5)]
        );
    }

    #[test]
    fn recipe_crud_round() {
        let mut ws = workspace();
        let form = RecipeForm {
            id: None,
            name: "Americano".into(),
            description: "Espresso and water".into(),
            ingredients: vec![
                IngredientInput::new(InventoryItemId::new(5), "18"),
                IngredientInput::new(InventoryItemId::new(6), "200"),
                IngredientInput::new(InventoryItemId::new(4), "1"),
            ],
            selling_price: "18000".into(),
        };
        let americano = ws.add_recipe(&form).unwrap();
        assert_eq!(americano.id, RecipeId::new(2));
        // 1,800 + 1,000 + 500
        assert_eq!(ws.cogs(americano.id).unwrap(), 3300.0);

        let mut edit = RecipeForm::from(&americano);
        edit.ingredients.retain(|line| line.item_id != InventoryItemId::new(4));
        assert!(ws.update_recipe(&edit).unwrap());
        assert_eq!(ws.cogs(americano.id).unwrap(), 2800.0);

        let removed = ws.delete_recipe(americano.id, Confirmation::Confirmed).unwrap();
        assert_eq!(removed.map(|r| r.name), Some("Americano".to_string()));
        assert!(matches!(ws.cogs(americano.id), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn profit_uses_current_prices() {
        let mut ws = workspace();
        let cups = CupCount::new(3).unwrap();
        let before = ws.profit(RecipeId::new(1), cups).unwrap();
        assert_eq!(before.total_cost, 25350.0);
        assert_eq!(before.total_profit, 49650.0);

        let mut milk = InventoryItemForm::from(ws.inventory().get(InventoryItemId::new(2)).unwrap());
        milk.price_per_qty = "40000".into();
        assert!(ws.update_inventory_item(&milk).unwrap());

        let after = ws.profit(RecipeId::new(1), cups).unwrap();
        assert_eq!(after.cost_per_cup, 9950.0);
    }

    #[test]
    fn failed_saves_keep_memory_authoritative() {
        let mut ws = workspace();
        ws.state_store().set_fail_saves(true);

        ws.add_inventory_item(&cup_form()).unwrap();
        assert_eq!(ws.inventory().len(), 7);
        assert_eq!(ws.state_store().snapshot().unwrap().inventory.len(), 6);

        ws.state_store().set_fail_saves(false);
        ws.sign_out();
        assert_eq!(ws.state_store().snapshot().unwrap().inventory.len(), 7);
    }

    #[test]
    fn sign_in_and_out() {
        let mut ws = workspace();
        assert!(matches!(ws.sign_in("not-an-email"), Err(AuthError::InvalidEmail)));
        assert!(!ws.auth().is_authenticated());

        ws.sign_in("owner@kopi.id").unwrap();
        assert!(ws.auth().is_authenticated());
        assert_eq!(
            ws.state_store().snapshot().unwrap().auth.email.as_deref(),
            Some("owner@kopi.id")
        );

        ws.sign_out();
        assert_eq!(ws.auth(), &AuthState::logged_out());
    }

    #[test]
    fn reset_restores_catalog_and_keeps_session() {
        let mut ws = workspace();
        ws.sign_in("owner@kopi.id").unwrap();
        ws.delete_recipe(RecipeId::new(1), Confirmation::Confirmed).unwrap();
        ws.replace_inventory(Vec::new()).unwrap();

        ws.reset_catalog().unwrap();
        assert_eq!(ws.inventory().len(), 6);
        assert_eq!(ws.recipes().len(), 1);
        assert!(ws.auth().is_authenticated());
    }
}
