use crate::Text;
use bimap::BiMap;
use std::{
    cell::{Cell, RefCell},
    fmt,
    hash::{Hash, Hasher},
};

/// A unique identifier with a text description
///
/// Symbols are compared by identity rather than by description: two symbols
/// made with [Symbol::new] are never equal, even when their descriptions
/// match. Shared symbols come from the interning registry instead, where
/// [Symbol::interned] hands out the same symbol for the same key.
///
/// The registry is per-thread, matching the single-threaded value model.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Text,
}

impl Symbol {
    /// Makes a new symbol, unique for the lifetime of the thread
    pub fn new(description: impl Into<Text>) -> Self {
        Self {
            id: next_id(),
            description: description.into(),
        }
    }

    /// Returns the symbol interned under the given key
    ///
    /// Interning the same key again returns an equal symbol; the key doubles
    /// as the description.
    pub fn interned(key: &str) -> Self {
        REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            let id = match registry.get_by_left(key) {
                Some(id) => *id,
                None => {
                    let id = next_id();
                    registry.insert(key.to_string(), id);
                    id
                }
            };
            Self {
                id,
                description: Text::from(key),
            }
        })
    }

    /// Returns the key the symbol was interned under
    ///
    /// `None` for symbols that were made with [Symbol::new].
    pub fn key(&self) -> Option<Text> {
        REGISTRY.with(|registry| {
            registry
                .borrow()
                .get_by_right(&self.id)
                .map(|key| Text::from(key.as_str()))
        })
    }

    /// Returns the symbol's description
    pub fn description(&self) -> &Text {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.id);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({}: {})", self.id, self.description)
    }
}

fn next_id() -> u64 {
    NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

thread_local! {
    static REGISTRY: RefCell<BiMap<String, u64>> = RefCell::new(BiMap::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_symbols_are_never_equal() {
        let a = Symbol::new("name");
        let b = Symbol::new("name");

        assert_ne!(a, b);
        assert_eq!(a.description(), b.description());
        assert_eq!(a.key(), None);
    }

    #[test]
    fn interned_symbols_are_shared() {
        let a = Symbol::interned("shared");
        let b = Symbol::interned("shared");

        assert_eq!(a, b);
        assert_eq!(a.key().as_deref(), Some("shared"));
        assert_eq!(a.to_string(), "Symbol(shared)");
    }
}
