//! Keyed store routing each key to one of several destinations

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;

use super::container::Mode;
use crate::error::{Error, Result};

/// A closed set of destinations, e.g. the sections of the output files
pub trait Destination: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every destination
    const ALL: &'static [Self];
}

/// Like [`Container`](super::Container), but each key lives in exactly one
/// destination. Writing a key to another destination moves it.
#[derive(Clone)]
pub struct MultiContainer<K, V, S> {
    values_by_destination: AHashMap<S, AHashMap<K, V>>,
    destination_by_key: AHashMap<K, S>,
    frozen: bool,
    debug: bool,
}

impl<K, V, S: Destination> Default for MultiContainer<K, V, S> {
    fn default() -> Self {
        Self {
            values_by_destination: S::ALL.iter().map(|&s| (s, AHashMap::new())).collect(),
            destination_by_key: AHashMap::new(),
            frozen: false,
            debug: false,
        }
    }
}

impl<K, V, S> MultiContainer<K, V, S>
where
    K: Eq + Hash + Clone + fmt::Debug,
    S: Destination,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to a destination.
    ///
    /// The mode is checked against the key in any destination. On success,
    /// a key found in another destination is removed from there. Returns
    /// `Ok(false)` if the mode refused the write.
    pub fn add(&mut self, key: K, value: V, destination: S, mode: Mode) -> Result<bool> {
        let current = self.destination_by_key.get(&key).copied();
        if !mode.accepts(current.is_some()) {
            return Ok(false);
        }
        if current != Some(destination) {
            if self.frozen {
                return Err(Error::frozen(&key));
            }
            if self.debug {
                match current {
                    Some(old) => log::debug!(
                        "MultiContainer: move {:?} from {:?} to {:?}",
                        key,
                        old,
                        destination
                    ),
                    None => log::debug!("MultiContainer: new key {:?} in {:?}", key, destination),
                }
            }
            if let Some(old) = current {
                if let Some(values) = self.values_by_destination.get_mut(&old) {
                    values.remove(&key);
                }
            }
            self.destination_by_key.insert(key.clone(), destination);
        }
        self.values_by_destination
            .entry(destination)
            .or_default()
            .insert(key, value);
        Ok(true)
    }

    /// The value of `key` if it lives in `destination`
    pub fn get(&self, key: &K, destination: S) -> Option<&V> {
        self.values_by_destination.get(&destination)?.get(key)
    }

    pub fn destination_of(&self, key: &K) -> Option<S> {
        self.destination_by_key.get(key).copied()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.destination_by_key.contains_key(key)
    }

    /// Number of keys in a destination
    pub fn len(&self, destination: S) -> usize {
        self.values_by_destination
            .get(&destination)
            .map_or(0, |values| values.len())
    }

    /// No key at all
    pub fn is_empty(&self) -> bool {
        self.destination_by_key.is_empty()
    }

    /// Values of one destination, in unspecified order
    pub fn values(&self, destination: S) -> impl Iterator<Item = &V> + '_ {
        self.values_by_destination
            .get(&destination)
            .into_iter()
            .flat_map(|values| values.values())
    }

    pub fn iter(&self, destination: S) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.values_by_destination
            .get(&destination)
            .into_iter()
            .flat_map(|values| values.iter())
    }

    /// Refuse new keys and moves from now on
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Log new keys and moves at debug level
    pub fn debug(&mut self) {
        self.debug = true;
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S: Destination> fmt::Debug for MultiContainer<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for destination in S::ALL {
            if let Some(values) = self.values_by_destination.get(destination) {
                map.entry(destination, values);
            }
        }
        map.finish()
    }
}
