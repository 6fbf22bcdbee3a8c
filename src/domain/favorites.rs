// src/domain/favorites.rs

use std::collections::BTreeSet;

// Commas are not valid in cookie values.
const COOKIE_SEPARATOR: char = '.';

/// Listing ids a visitor has hearted. Lives only as long as the visitor's
/// session cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<u32>,
}

impl Favorites {
    /// Flips membership of `id`. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Parses the dot-separated cookie form (`1.4.7`). Junk entries are dropped.
    pub fn from_cookie_value(raw: &str) -> Self {
        let ids = raw
            .split(COOKIE_SEPARATOR)
            .filter_map(|part| part.trim().parse::<u32>().ok())
            .collect();
        Self { ids }
    }

    pub fn to_cookie_value(&self) -> String {
        self.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(&COOKIE_SEPARATOR.to_string())
    }
}
