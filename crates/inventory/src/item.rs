use serde::{Deserialize, Serialize};

use brewerp_core::form::{parse_non_negative, parse_positive, require_text};
use brewerp_core::{DomainError, DomainResult, Entity, InventoryItemId};

/// How a unit-of-measure label is costed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UomKind {
    /// `kg` or `liter`: one purchased unit is 1000 recipe sub-units (g / ml).
    Bulk,
    /// `pcs`: counted pieces.
    Pieces,
    /// Anything else; costed like pieces.
    Other,
}

impl UomKind {
    /// Classify a uom label, case-insensitively.
    pub fn of(uom: &str) -> Self {
        match uom.trim().to_ascii_lowercase().as_str() {
            "kg" | "liter" => UomKind::Bulk,
            "pcs" => UomKind::Pieces,
            _ => UomKind::Other,
        }
    }
}

/// A raw material and the price of one purchased batch of it.
///
/// `quantity` is the size of that batch in `uom` (e.g. `10` pcs for a sleeve of
/// cups) and `price_per_qty` is what the whole batch costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub quantity: f64,
    pub uom: String,
    pub price_per_qty: f64,
}

impl InventoryItem {
    /// Build a validated item. Pass `InventoryItemId::default()` to let the
    /// store allocate the id.
    pub fn new(
        id: InventoryItemId,
        name: impl Into<String>,
        quantity: f64,
        uom: impl Into<String>,
        price_per_qty: f64,
    ) -> DomainResult<Self> {
        let item = Self {
            id,
            name: name.into(),
            quantity,
            uom: uom.into(),
            price_per_qty,
        };
        item.validate()?;
        Ok(item)
    }

    pub fn uom_kind(&self) -> UomKind {
        UomKind::of(&self.uom)
    }

    /// Check the record invariants: non-empty name and uom, `quantity > 0`,
    /// `price_per_qty >= 0`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.uom.trim().is_empty() {
            return Err(DomainError::validation("uom is required"));
        }
        if !(self.quantity.is_finite() && self.quantity > 0.0) {
            return Err(DomainError::invariant("quantity must be greater than zero"));
        }
        if !(self.price_per_qty.is_finite() && self.price_per_qty >= 0.0) {
            return Err(DomainError::invariant("price per quantity cannot be negative"));
        }
        Ok(())
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn assign_id(&mut self, id: Self::Id) {
        self.id = id;
    }
}

/// Raw inventory form input, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItemForm {
    /// Set when editing an existing item.
    pub id: Option<InventoryItemId>,
    pub name: String,
    pub quantity: String,
    pub uom: String,
    pub price_per_qty: String,
}

impl InventoryItemForm {
    /// Parse and validate the form. Nothing is stored on error.
    pub fn parse(&self) -> DomainResult<InventoryItem> {
        let name = require_text("name", &self.name)?;
        let quantity = parse_positive("quantity", &self.quantity)?;
        let uom = require_text("uom", &self.uom)?;
        let price_per_qty = parse_non_negative("price per quantity", &self.price_per_qty)?;

        InventoryItem::new(self.id.unwrap_or_default(), name, quantity, uom, price_per_qty)
    }
}

impl From<&InventoryItem> for InventoryItemForm {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            uom: item.uom.clone(),
            price_per_qty: item.price_per_qty.to_string(),
        }
    }
}
