//! Frontend Models
//!
//! Packing list entities and the presentation sort key.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSortByError;

/// Identifier of an item, unique for the lifetime of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of the packing list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// Create a new unpacked item
    pub fn new(id: ItemId, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
        }
    }

    /// Copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Display order of the list. Never written back into the list itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Insertion order
    #[default]
    Input,
    Description,
    Packed,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Input => "Sort by input order",
            SortBy::Description => "Sort by description",
            SortBy::Packed => "Sort by packed status",
        }
    }
}

impl FromStr for SortBy {
    type Err = ParseSortByError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| ParseSortByError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_is_unpacked() {
        let item = Item::new(ItemId(7), "Hat", 2);
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.description, "Hat");
        assert_eq!(item.quantity, 2);
        assert!(!item.packed);
    }

    #[test]
    fn test_toggled_only_changes_packed() {
        let item = Item::new(ItemId(1), "Socks", 12);
        let toggled = item.toggled();
        assert!(toggled.packed);
        assert_eq!(toggled.id, item.id);
        assert_eq!(toggled.description, item.description);
        assert_eq!(toggled.quantity, item.quantity);
        assert_eq!(toggled.toggled(), item);
    }

    #[test]
    fn test_sort_by_round_trips_through_select_values() {
        for sort in SortBy::ALL {
            assert_eq!(sort.as_str().parse::<SortBy>(), Ok(sort));
        }
    }

    #[test]
    fn test_sort_by_rejects_unknown_value() {
        let err = "alphabetical".parse::<SortBy>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown sort key: alphabetical");
    }

    #[test]
    fn test_item_id_displays_bare_number() {
        assert_eq!(ItemId(42).to_string(), "42");
    }
}
