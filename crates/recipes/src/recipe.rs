use serde::{Deserialize, Serialize};

use brewerp_core::form::{parse_non_negative, require_text};
use brewerp_core::{DomainError, DomainResult, Entity, InventoryItemId, RecipeId, ValueObject};
use brewerp_inventory::InventoryItem;

/// One ingredient line: how much of an inventory item a single serving uses.
///
/// `quantity` is in the item's base sub-unit: grams / millilitres for `kg` and
/// `Liter` items, a count for `pcs` items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub item_id: InventoryItemId,
    pub quantity: f64,
}

impl ValueObject for RecipeItem {}

impl RecipeItem {
    pub fn new(item_id: InventoryItemId, quantity: f64) -> Self {
        Self { item_id, quantity }
    }

    /// Display unit for this line.
    ///
    /// Quantities above 1000 read as `kg/L`, lines for an item whose uom is
    /// exactly `pcs` read as `pcs`, everything else (including lines whose item
    /// no longer exists) as `g/ml`.
    pub fn unit_label(&self, item: Option<&InventoryItem>) -> &'static str {
        if self.quantity > 1000.0 {
            "kg/L"
        } else if item.is_some_and(|item| item.uom == "pcs") {
            // Exact match: "PCS" or "Pcs" items still read as g/ml here, even
            // though costing treats every non-bulk uom alike.
            "pcs"
        } else {
            "g/ml"
        }
    }
}

/// A drink on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    /// Ingredient lines in display order. The same item may appear twice.
    pub items: Vec<RecipeItem>,
    pub selling_price: f64,
}

impl Recipe {
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        description: impl Into<String>,
        items: Vec<RecipeItem>,
        selling_price: f64,
    ) -> DomainResult<Self> {
        let recipe = Self {
            id,
            name: name.into(),
            description: description.into(),
            items,
            selling_price,
        };
        recipe.validate()?;
        Ok(recipe)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description is required"));
        }
        if !(self.selling_price.is_finite() && self.selling_price >= 0.0) {
            return Err(DomainError::invariant("selling price cannot be negative"));
        }
        if let Some(line) = self
            .items
            .iter()
            .find(|line| !(line.quantity.is_finite() && line.quantity >= 0.0))
        {
            return Err(DomainError::invariant(format!(
                "ingredient quantity for item {} cannot be negative",
                line.item_id
            )));
        }
        Ok(())
    }

    /// True when any ingredient line points at `item_id`.
    pub fn uses_item(&self, item_id: InventoryItemId) -> bool {
        self.items.iter().any(|line| line.item_id == item_id)
    }
}

impl Entity for Recipe {
    type Id = RecipeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

/// Raw quantity typed next to one inventory item in the recipe form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInput {
    pub item_id: InventoryItemId,
    pub quantity: String,
}

impl IngredientInput {
    pub fn new(item_id: InventoryItemId, quantity: impl Into<String>) -> Self {
        Self {
            item_id,
            quantity: quantity.into(),
        }
    }
}

/// Raw recipe form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeForm {
    /// Set when editing an existing recipe.
    pub id: Option<RecipeId>,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<IngredientInput>,
    pub selling_price: String,
}

impl RecipeForm {
    /// Parse and validate the form.
    ///
    /// Ingredient entries left blank or set to `0` are dropped, so the recipe
    /// only lists what it actually uses. The ingredient list always replaces
    /// the previous one wholesale.
    pub fn parse(&self) -> DomainResult<Recipe> {
        let name = require_text("name", &self.name)?;
        let description = require_text("description", &self.description)?;
        let selling_price = parse_non_negative("selling price", &self.selling_price)?;

        let mut items = Vec::with_capacity(self.ingredients.len());
        for input in &self.ingredients {
            if input.quantity.trim().is_empty() {
                continue;
            }
            let field = format!("quantity for item {}", input.item_id);
            let quantity = parse_non_negative(&field, &input.quantity)?;
            if quantity > 0.0 {
                items.push(RecipeItem::new(input.item_id, quantity));
            }
        }

        Recipe::new(
            self.id.unwrap_or_default(),
            name,
            description,
            items,
            selling_price,
        )
    }
}

impl From<&Recipe> for RecipeForm {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: Some(recipe.id),
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            ingredients: recipe
                .items
                .iter()
                .map(|line| IngredientInput::new(line.item_id, line.quantity.to_string()))
                .collect(),
            selling_price: recipe.selling_price.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, uom: &str) -> InventoryItem {
        InventoryItem::new(InventoryItemId::new(id), "x", 1.0, uom, 1.0).unwrap()
    }

    fn form() -> RecipeForm {
        RecipeForm {
            id: None,
            name: "Iced Latte".into(),
            description: "Espresso over milk and ice".into(),
            ingredients: vec![
                IngredientInput::new(InventoryItemId::new(1), "18"),
                IngredientInput::new(InventoryItemId::new(2), "0"),
                IngredientInput::new(InventoryItemId::new(3), ""),
                IngredientInput::new(InventoryItemId::new(4), "1"),
            ],
            selling_price: "28000".into(),
        }
    }

    #[test]
    fn form_drops_unused_ingredients() {
        let recipe = form().parse().unwrap();
        assert_eq!(recipe.id, RecipeId::default());
        assert_eq!(
            recipe.items,
            vec![
                RecipeItem::new(InventoryItemId::new(1), 18.0),
                RecipeItem::new(InventoryItemId::new(4), 1.0),
            ]
        );
        assert_eq!(recipe.selling_price, 28000.0);
    }

    #[test]
    fn form_rejects_missing_fields_and_bad_numbers() {
        let mut no_name = form();
        no_name.name = " ".into();
        let mut no_description = form();
        no_description.description.clear();
        let mut bad_price = form();
        bad_price.selling_price = "-1".into();
        let mut bad_quantity = form();
        bad_quantity.ingredients[0].quantity = "lots".into();
        let mut negative_quantity = form();
        negative_quantity.ingredients[0].quantity = "-3".into();

        for case in [no_name, no_description, bad_price, bad_quantity, negative_quantity] {
            assert!(matches!(case.parse(), Err(DomainError::Validation(_))), "{case:?}");
        }
    }

    #[test]
    fn record_and_form_agree_on_required_description() {
        let mut recipe = form().parse().unwrap();
        recipe.description = "  ".into();
        assert!(matches!(recipe.validate(), Err(DomainError::Validation(_))));
        assert!(Recipe::new(RecipeId::new(1), "Americano", "", Vec::new(), 18000.0).is_err());
    }

    #[test]
    fn form_allows_recipe_without_ingredients() {
        let mut f = form();
        f.ingredients.clear();
        assert!(f.parse().unwrap().items.is_empty());
    }

    #[test]
    fn unit_labels_follow_quantity_then_uom() {
        let pcs = item(4, "pcs");
        let kg = item(1, "kg");
        assert_eq!(RecipeItem::new(pcs.id, 1.0).unit_label(Some(&pcs)), "pcs");
        assert_eq!(RecipeItem::new(kg.id, 15.0).unit_label(Some(&kg)), "g/ml");
        assert_eq!(RecipeItem::new(kg.id, 1500.0).unit_label(Some(&kg)), "kg/L");
        assert_eq!(RecipeItem::new(pcs.id, 2000.0).unit_label(Some(&pcs)), "kg/L");
        assert_eq!(RecipeItem::new(InventoryItemId::new(9), 3.0).unit_label(None), "g/ml");
        // Exact match only, as displayed.
        assert_eq!(RecipeItem::new(pcs.id, 1.0).unit_label(Some(&item(4, "PCS"))), "g/ml");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let recipe = form().parse().unwrap();
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["sellingPrice"], 28000.0);
        assert_eq!(json["items"][0]["itemId"], 1);
        assert_eq!(json["items"][0]["quantity"], 18.0);
    }

    #[test]
    fn uses_item_checks_ingredient_lines() {
        let recipe = form().parse().unwrap();
        assert!(recipe.uses_item(InventoryItemId::new(4)));
        assert!(!recipe.uses_item(InventoryItemId::new(2)));
    }
}
