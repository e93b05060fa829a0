//! Displayed set model
//!
//! The ordered cards currently visible along with the active sort order.
//! The set is replaced wholesale on every fetch, search or filter change and
//! reordered in place when the sort changes.

use super::card::Card;
use super::country::CountryRecord;
use super::sort::{self, SortDirection, SortField};

#[derive(Debug, Clone, Default)]
pub struct DisplayedSet {
    cards: Vec<Card>,
    field: SortField,
    direction: SortDirection,
}

impl DisplayedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the records and order them by the current sort settings
    pub fn replace(&mut self, records: &[CountryRecord]) {
        let mut cards = Card::render_all(records);
        sort::sort(&mut cards, self.field, self.direction);
        self.cards = cards;
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Re-sort the existing cards by `field`, returns whether the order may have changed
    pub fn set_field(&mut self, field: SortField) -> bool {
        if field == self.field {
            return false;
        }
        self.field = field;
        if self.direction == SortDirection::Descending {
            self.cards.reverse();
        }
        sort::sort(&mut self.cards, self.field, self.direction);
        true
    }

    /// Switch direction with an O(n) reversal; no comparisons are made
    pub fn set_direction(&mut self, direction: SortDirection) -> bool {
        if direction == self.direction {
            return false;
        }
        self.direction = direction;
        self.cards.reverse();
        true
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a 1-based display position
    pub fn get(&self, position: usize) -> Option<&Card> {
        position.checked_sub(1).and_then(|i| self.cards.get(i))
    }
}
