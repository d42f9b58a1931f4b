//! List of named elements with unique names

use std::fmt;

use ahash::AHashSet;

use crate::error::{Error, Result};

/// An element with a name, e.g. a table
pub trait NamedObject {
    fn name(&self) -> &str;
}

/// A list where two elements never share a name.
///
/// Elements must not change their name while in the list.
#[derive(Clone)]
pub struct UniqueList<T> {
    elements: Vec<T>,
    names: AHashSet<String>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            names: AHashSet::new(),
        }
    }
}

impl<T: NamedObject> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element
    pub fn push(&mut self, element: T) -> Result<()> {
        self.claim_name(element.name())?;
        self.elements.push(element);
        Ok(())
    }

    /// Insert an element at `index` (`index <= len`)
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        if index > self.elements.len() {
            return Err(Error::index(index, self.elements.len()));
        }
        self.claim_name(element.name())?;
        self.elements.insert(index, element);
        Ok(())
    }

    /// Replace the element at `index` and return the old one.
    ///
    /// The old name is released; the new name may be the old one.
    pub fn set(&mut self, index: usize, element: T) -> Result<T> {
        let Some(old) = self.elements.get(index) else {
            return Err(Error::index(index, self.elements.len()));
        };
        let old_name = old.name().to_string();
        if element.name() != old_name {
            self.claim_name(element.name())?;
            self.names.remove(&old_name);
        }
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.elements.iter().find(|e| e.name() == name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut T> {
        self.elements.iter_mut().find(|e| e.name() == name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.name() == name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Remove the element at `index`
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.elements.len() {
            return Err(Error::index(index, self.elements.len()));
        }
        let element = self.elements.remove(index);
        self.names.remove(element.name());
        Ok(element)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<T> {
        let index = self.index_of(name)?;
        self.remove(index).ok()
    }

    /// Remove an element equal to `element`
    pub fn remove_element(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.elements.iter().position(|e| e == element)?;
        self.remove(index).ok()
    }

    /// Names in list order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(|e| e.name())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn claim_name(&mut self, name: &str) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.elements).finish()
    }
}
