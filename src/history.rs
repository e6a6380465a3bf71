//! Recent-history list for generated usernames
//!
//! Caller-side convenience used by the CLI: a bounded, most-recent-first
//! list of picks. The engine itself never touches this.

use std::collections::VecDeque;

use chrono::Utc;
use rand::Rng;

use crate::types::HistoryItem;

/// Maximum number of retained entries
pub const MAX_HISTORY: usize = 20;

const ID_ALPHABET: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const ID_LENGTH: usize = 9;

/// Bounded most-recent-first history of generated usernames
#[derive(Debug, Clone, Default)]
pub struct History {
    items: VecDeque<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_HISTORY),
        }
    }

    /// Record a pick at the front of the list, dropping the oldest entry
    /// once the capacity is reached.
    pub fn record(&mut self, value: impl Into<String>) -> &HistoryItem {
        let item = HistoryItem {
            id: random_id(&mut rand::thread_rng()),
            value: value.into(),
            timestamp: Utc::now(),
        };
        self.items.push_front(item);
        self.items.truncate(MAX_HISTORY);
        &self.items[0]
    }

    /// Entries, most recent first
    pub fn items(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.front()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn random_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())])
        .collect()
}
