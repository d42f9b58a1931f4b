//! Keyed store with an explicit conflict policy

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;

use crate::error::{Error, Result};

/// What [`Container::add`] is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Only insert a new key
    Create,
    /// Only overwrite an existing key
    Update,
    /// Insert or overwrite
    CreateOrUpdate,
}

impl Mode {
    /// Does this mode accept a write, knowing whether the key is present?
    pub fn accepts(self, present: bool) -> bool {
        match self {
            Mode::Create => !present,
            Mode::Update => present,
            Mode::CreateOrUpdate => true,
        }
    }
}

/// A map of values by key, with create/update semantics.
///
/// Iteration order is unspecified. Once frozen, no new key is accepted.
#[derive(Clone)]
pub struct Container<K, V> {
    values: AHashMap<K, V>,
    frozen: bool,
    debug: bool,
}

impl<K, V> Default for Container<K, V> {
    fn default() -> Self {
        Self {
            values: AHashMap::new(),
            frozen: false,
            debug: false,
        }
    }
}

impl<K: Eq + Hash + fmt::Debug, V> Container<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value.
    ///
    /// Returns `Ok(false)` and leaves the container unchanged if `mode`
    /// refuses the write. A new key in a frozen container is an error.
    pub fn add(&mut self, key: K, value: V, mode: Mode) -> Result<bool> {
        let present = self.values.contains_key(&key);
        if !mode.accepts(present) {
            return Ok(false);
        }
        if !present {
            if self.frozen {
                return Err(Error::frozen(&key));
            }
            if self.debug {
                log::debug!("Container: new key {:?}", key);
            }
        }
        self.values.insert(key, value);
        Ok(true)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrowed view of the values
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.values.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.values.iter()
    }

    /// Refuse new keys from now on
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Log new keys at debug level
    pub fn debug(&mut self) {
        self.debug = true;
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Container<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("values", &self.values)
            .field("frozen", &self.frozen)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_twice_keeps_first() {
        let mut container = Container::new();
        assert!(container.add("k", 1, Mode::Create).unwrap());
        assert!(!container.add("k", 2, Mode::Create).unwrap());
        assert_eq!(container.get(&"k"), Some(&1));
    }

    #[test]
    fn test_update_absent_inserts_nothing() {
        let mut container: Container<&str, i32> = Container::new();
        assert!(!container.add("k", 1, Mode::Update).unwrap());
        assert!(container.is_empty());
    }

    #[test]
    fn test_update_present() {
        let mut container = Container::new();
        container.add("k", 1, Mode::Create).unwrap();
        assert!(container.add("k", 2, Mode::Update).unwrap());
        assert_eq!(container.get(&"k"), Some(&2));
    }

    #[test]
    fn test_create_or_update_overwrites() {
        let mut container = Container::new();
        assert!(container.add("k", 1, Mode::CreateOrUpdate).unwrap());
        assert!(container.add("k", 2, Mode::CreateOrUpdate).unwrap());
        assert_eq!(container.get(&"k"), Some(&2));
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_values() {
        let mut container = Container::new();
        for (i, key) in ["a", "b", "c"].into_iter().enumerate() {
            container.add(key, i, Mode::Create).unwrap();
        }
        let mut values: Vec<_> = container.values().copied().collect();
        values.sort();
        assert_eq!(values, vec![0, 1, 2]);
        assert_eq!(container.iter().count(), 3);
    }

    #[test]
    fn test_frozen() {
        let mut container = Container::new();
        container.add("k", 1, Mode::Create).unwrap();
        container.freeze();
        assert!(container.is_frozen());
        assert!(matches!(
            container.add("other", 2, Mode::CreateOrUpdate),
            Err(Error::Frozen(_))
        ));
        assert!(!container.contains_key(&"other"));
        // existing keys may still be updated
        assert!(container.add("k", 3, Mode::Update).unwrap());
        assert_eq!(container.get(&"k"), Some(&3));
        // a refused mode is not an error
        assert!(!container.add("other", 2, Mode::Update).unwrap());
    }

    #[test]
    fn test_debug_mode_adds() {
        let mut container = Container::new();
        container.debug();
        assert!(container.add(1, "one", Mode::Create).unwrap());
        assert_eq!(format!("{container:?}"), "Container { values: {1: \"one\"}, frozen: false }");
    }
}
