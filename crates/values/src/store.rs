//! A presence-aware key-value store
//!
//! [Store] keeps three observable states per key: never written, explicitly
//! cleared, and occupied. Clearing writes a tombstone rather than removing
//! the entry, so a cleared key is observably different from one that was
//! never set — the two must not collapse into a single 'no value' signal.

use crate::Key;
use indexmap::{Equivalent, IndexMap};
use rustc_hash::FxHasher;
use std::hash::{BuildHasherDefault, Hash};

/// The hasher used by [Store]
pub type StoreHasher = FxHasher;

type SlotMap<V> = IndexMap<Key, Slot<V>, BuildHasherDefault<StoreHasher>>;

/// The stored state of a key that's present in a [Store]'s key set
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<V> {
    /// The key was explicitly cleared; the tombstone keeps the key in the
    /// key set
    Cleared,
    /// The key holds a value
    Occupied(V),
}

/// The result of looking up a key in a [Store]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<'a, V> {
    /// The key has never been written (or was removed outright)
    Missing,
    /// The key was explicitly cleared
    Cleared,
    /// The key holds a value
    Occupied(&'a V),
}

impl<'a, V> Lookup<'a, V> {
    /// Returns true if the key has never been written
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns true if the key was explicitly cleared
    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }

    /// Returns the looked-up value, or `None` for both empty states
    ///
    /// Note that this collapses the missing/cleared distinction; use the
    /// enum directly when the difference matters.
    pub fn value(self) -> Option<&'a V> {
        match self {
            Self::Occupied(value) => Some(value),
            _ => None,
        }
    }
}

/// An insertion-ordered map distinguishing cleared keys from missing ones
///
/// Values are opaque to the store; any `V` will do.
#[derive(Clone, Debug, Default)]
pub struct Store<V> {
    entries: SlotMap<V>,
}

impl<V> Store<V> {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            entries: SlotMap::default(),
        }
    }

    /// Creates an empty store with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SlotMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Occupies the key's slot with a value
    ///
    /// Returns the value that was displaced, if the slot was occupied.
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        match self.entries.insert(key.into(), Slot::Occupied(value)) {
            Some(Slot::Occupied(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Looks up the key, keeping the three possible states distinct
    pub fn get<K>(&self, key: &K) -> Lookup<'_, V>
    where
        K: Hash + Equivalent<Key> + ?Sized,
    {
        match self.entries.get(key) {
            None => Lookup::Missing,
            Some(Slot::Cleared) => Lookup::Cleared,
            Some(Slot::Occupied(value)) => Lookup::Occupied(value),
        }
    }

    /// Writes a tombstone for the key
    ///
    /// The key stays in the key set, and lookups report
    /// [Cleared](Lookup::Cleared) from now on. Clearing a key that was never
    /// written still records the tombstone. Returns the value that was
    /// displaced, if the slot was occupied.
    pub fn clear(&mut self, key: impl Into<Key>) -> Option<V> {
        match self.entries.insert(key.into(), Slot::Cleared) {
            Some(Slot::Occupied(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Removes the key outright, tombstone included
    ///
    /// Unlike [clear](Store::clear) this erases the entry's history: lookups
    /// report [Missing](Lookup::Missing) afterwards. Returns the removed
    /// value, if the slot was occupied.
    pub fn remove<K>(&mut self, key: &K) -> Option<V>
    where
        K: Hash + Equivalent<Key> + ?Sized,
    {
        match self.entries.shift_remove(key) {
            Some(Slot::Occupied(previous)) => Some(previous),
            _ => None,
        }
    }

    /// Returns true if the key is in the key set, cleared or occupied
    pub fn contains_key<K>(&self, key: &K) -> bool
    where
        K: Hash + Equivalent<Key> + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries in the store, tombstones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store contains no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the key set in insertion order, tombstones included
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates over the occupied entries in insertion order
    pub fn occupied(&self) -> impl Iterator<Item = (&Key, &V)> {
        self.entries.iter().filter_map(|(key, slot)| match slot {
            Slot::Occupied(value) => Some((key, value)),
            Slot::Cleared => None,
        })
    }
}

impl<V> FromIterator<(Key, V)> for Store<V> {
    fn from_iter<T: IntoIterator<Item = (Key, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key, Slot::Occupied(value)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_remove_with_string() {
        let mut store = Store::new();

        assert!(store.get("test").is_missing());
        store.insert("test", 1);
        assert_eq!(store.get("test").value(), Some(&1));
        assert_eq!(store.remove("test"), Some(1));
        assert!(store.get("test").is_missing());
    }

    #[test]
    fn clearing_is_not_removing() {
        let mut store = Store::new();

        store.insert("a", "value");
        assert_eq!(store.clear("a"), Some("value"));
        assert!(store.get("a").is_cleared());
        assert!(store.contains_key("a"));
        assert_eq!(store.len(), 1);

        assert_eq!(store.remove("a"), None);
        assert!(store.get("a").is_missing());
        assert!(store.is_empty());
    }
}
