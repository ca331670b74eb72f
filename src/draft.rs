//! Item Draft
//!
//! Add-form input before it reaches the store. The store accepts anything,
//! so this is where an empty description is turned away.

use crate::error::DraftError;

/// Validated input, ready for `ItemListStore::add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub description: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: u32,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
        }
    }
}

impl ItemDraft {
    pub fn validate(&self, max_quantity: u32) -> Result<NewItem, DraftError> {
        if self.description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if !(1..=max_quantity).contains(&self.quantity) {
            return Err(DraftError::QuantityOutOfRange {
                quantity: self.quantity,
                max: max_quantity,
            });
        }
        Ok(NewItem {
            description: self.description.clone(),
            quantity: self.quantity,
        })
    }

    /// Back to an empty description and quantity 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Quantity from a `<select>` option value
pub fn parse_quantity(value: &str, max_quantity: u32) -> Result<u32, DraftError> {
    let quantity = value
        .trim()
        .parse::<u32>()
        .map_err(|_| DraftError::InvalidQuantity(value.to_string()))?;
    if !(1..=max_quantity).contains(&quantity) {
        return Err(DraftError::QuantityOutOfRange { quantity, max: max_quantity });
    }
    Ok(quantity)
}
