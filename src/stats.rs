//! Packing Statistics
//!
//! Derived counts for the footer, recomputed from each snapshot.

use crate::packing_list::PackingList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub packed: usize,
    /// Packed share rounded half-up to a whole percent; 0 for an empty list
    pub percentage: u32,
}

impl Stats {
    pub fn of(list: &PackingList) -> Self {
        let total = list.len();
        let packed = list.iter().filter(|item| item.packed).count();
        Self {
            total,
            packed,
            percentage: percentage(packed, total),
        }
    }

    /// Footer sentence
    pub fn message(&self) -> String {
        format!(
            "You have {} items in your list, and you have already packed {}% of them.",
            self.total, self.percentage
        )
    }
}

fn percentage(packed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // integer round-half-up of packed * 100 / total
    ((packed * 100 + total / 2) / total) as u32
}
