use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use serde::Serialize;

/// Units per item after a service visit.
pub const RESTOCK_ITEM_QUANTITY: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSlot {
    id: String,
    price: Cents,
    quantity: u32,
}

impl ItemSlot {
    pub fn new(id: impl Into<String>, price: Cents, quantity: u32) -> Result<Self> {
        let id = id.into();
        if price.is_zero() {
            return Err(VendingError::ValidationError(format!(
                "Item {id} must have a positive price"
            )));
        }
        if price > Cents::MAX_UNIT {
            return Err(VendingError::ValidationError(format!(
                "Item {id} price {price} exceeds {}",
                Cents::MAX_UNIT
            )));
        }
        Ok(Self {
            id,
            price,
            quantity,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> Cents {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Purchasable items with their prices and remaining stock.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: Vec<ItemSlot>,
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: ItemSlot) -> Result<()> {
        if self.is_valid_item_id(&item.id) {
            return Err(VendingError::DuplicateItem(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn is_valid_item_id(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&ItemSlot> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| VendingError::UnknownItem(id.to_string()))
    }

    pub fn has_stock(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.quantity > 0)
    }

    pub fn price(&self, id: &str) -> Result<Cents> {
        Ok(self.get(id)?.price)
    }

    /// Remaining units; zero when the item is not in the catalog.
    pub fn quantity(&self, id: &str) -> u32 {
        self.get(id).map_or(0, ItemSlot::quantity)
    }

    /// Removes one unit of the item.
    pub fn eject_item(&mut self, id: &str) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| VendingError::UnknownItem(id.to_string()))?;
        if item.quantity == 0 {
            return Err(VendingError::ValidationError(format!(
                "Item {id} is out of stock"
            )));
        }
        item.quantity -= 1;
        Ok(())
    }

    // Prices and item definitions are fixed; only quantities are restored.
    pub fn restock(&mut self) {
        for item in &mut self.items {
            item.quantity = RESTOCK_ITEM_QUANTITY;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSlot> {
        self.items.iter()
    }
}
