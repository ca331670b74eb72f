//! Sort View
//!
//! Presentation-only ordering of a snapshot. The list itself keeps
//! insertion order; these views are rebuilt on every render.

use std::sync::Arc;

use crate::models::{Item, SortBy};
use crate::packing_list::PackingList;

/// Items of `list` in display order for `sort_by`.
/// Both sorts are stable, so ties keep their insertion order.
pub fn sorted_view(list: &PackingList, sort_by: SortBy) -> Vec<Arc<Item>> {
    let mut view = list.items().to_vec();
    match sort_by {
        SortBy::Input => {}
        SortBy::Description => view.sort_by(|a, b| a.description.cmp(&b.description)),
        SortBy::Packed => view.sort_by_key(|item| item.packed),
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemId;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn item(id: u64, description: &str, packed: bool) -> Item {
        Item {
            id: ItemId(id),
            description: description.to_string(),
            quantity: 1,
            packed,
        }
    }

    fn descriptions(view: &[Arc<Item>]) -> Vec<&str> {
        view.iter().map(|item| item.description.as_str()).collect()
    }

    #[test]
    fn test_input_order_is_identity() {
        let list = PackingList::from_items([item(1, "Socks", false), item(2, "Passports", true)]);
        assert_eq!(descriptions(&sorted_view(&list, SortBy::Input)), vec!["Socks", "Passports"]);
    }

    #[test]
    fn test_sort_by_description_leaves_list_alone() {
        let list = PackingList::from_items([
            item(1, "Socks", false),
            item(2, "Passports", false),
            item(3, "Shoes", false),
        ]);
        let view = sorted_view(&list, SortBy::Description);
        assert_eq!(descriptions(&view), vec!["Passports", "Shoes", "Socks"]);

        let order: Vec<&str> = list.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(order, vec!["Socks", "Passports", "Shoes"]);
    }

    #[test]
    fn test_sort_by_description_is_case_respecting() {
        let list = PackingList::from_items([item(1, "apple", false), item(2, "Zebra", false)]);
        assert_eq!(descriptions(&sorted_view(&list, SortBy::Description)), vec!["Zebra", "apple"]);
    }

    #[test]
    fn test_sort_by_description_keeps_ties_in_input_order() {
        let list = PackingList::from_items([
            item(1, "Socks", false),
            item(2, "Hat", false),
            item(3, "Socks", true),
        ]);
        let ids: Vec<u64> = sorted_view(&list, SortBy::Description).iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_by_packed_is_stable_partition() {
        let list = PackingList::from_items([item(1, "A", false), item(2, "B", true), item(3, "C", false)]);
        assert_eq!(descriptions(&sorted_view(&list, SortBy::Packed)), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_view_shares_items_with_list() {
        let list = PackingList::from_items([item(1, "B", false), item(2, "A", false)]);
        let view = sorted_view(&list, SortBy::Description);
        assert!(Arc::ptr_eq(&view[0], &list.items()[1]));
    }

    proptest! {
        #[test]
        fn views_are_permutations(
            entries in proptest::collection::vec(("[A-Za-z]{0,4}", any::<bool>()), 0..32),
            sort in prop_oneof![Just(SortBy::Input), Just(SortBy::Description), Just(SortBy::Packed)],
        ) {
            let list = PackingList::from_items(
                entries.iter().enumerate().map(|(i, (d, p))| item(i as u64, d, *p)),
            );
            let view = sorted_view(&list, sort);
            let mut ids: Vec<u64> = view.iter().map(|i| i.id.0).collect();
            ids.sort_unstable();
            let expected: Vec<u64> = (0..entries.len() as u64).collect();
            prop_assert_eq!(ids, expected);

            if sort == SortBy::Packed {
                let first_packed = view.iter().position(|i| i.packed).unwrap_or(view.len());
                prop_assert!(view[first_packed..].iter().all(|i| i.packed));
            }
        }
    }
}
