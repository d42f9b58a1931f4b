//! `<config:config-item-map-entry>` in its three flavors

use std::collections::BTreeMap;
use std::fmt;

use super::block::ConfigBlock;
use super::item::{ConfigElementType, ConfigItem};
use crate::error::{Error, Result};
use crate::xml::XmlUtil;

/// An entry of a map-indexed or map-named block.
///
/// The entry holds either an ordered sequence of blocks, a name-keyed set
/// of blocks, or a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigItemMapEntry {
    Sequence(ConfigItemMapEntrySequence),
    Set(ConfigItemMapEntrySet),
    Singleton(ConfigItemMapEntrySingleton),
}

impl ConfigItemMapEntry {
    pub fn name(&self) -> Option<&str> {
        match self {
            ConfigItemMapEntry::Sequence(entry) => entry.name(),
            ConfigItemMapEntry::Set(entry) => entry.name(),
            ConfigItemMapEntry::Singleton(entry) => entry.name(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ConfigItemMapEntry::Sequence(entry) => entry.len(),
            ConfigItemMapEntry::Set(entry) => entry.len(),
            ConfigItemMapEntry::Singleton(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &ConfigBlock> + '_> {
        match self {
            ConfigItemMapEntry::Sequence(entry) => Box::new(entry.iter()),
            ConfigItemMapEntry::Set(entry) => Box::new(entry.iter()),
            ConfigItemMapEntry::Singleton(entry) => Box::new(std::iter::once(entry.block())),
        }
    }

    /// Add a block. Fails with [`Error::Unsupported`] on a singleton.
    pub fn add(&mut self, block: impl Into<ConfigBlock>) -> Result<bool> {
        match self {
            ConfigItemMapEntry::Sequence(entry) => Ok(entry.add(block)),
            ConfigItemMapEntry::Set(entry) => Ok(entry.add(block)),
            ConfigItemMapEntry::Singleton(entry) => entry.add(block),
        }
    }

    /// Add an item. Fails with [`Error::Unsupported`] on a singleton.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        item_type: ConfigElementType,
        value: impl Into<String>,
    ) -> Result<bool> {
        match self {
            ConfigItemMapEntry::Sequence(entry) => Ok(entry.add_item(name, item_type, value)),
            ConfigItemMapEntry::Set(entry) => Ok(entry.add_item(name, item_type, value)),
            ConfigItemMapEntry::Singleton(entry) => entry.add_item(name, item_type, value),
        }
    }

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        out.write_str("<config:config-item-map-entry")?;
        if let Some(name) = self.name() {
            util.append_e_attribute(out, "config:name", name)?;
        }
        out.write_char('>')?;
        for block in self.iter() {
            block.append_xml(util, out)?;
        }
        out.write_str("</config:config-item-map-entry>")
    }
}

impl From<ConfigItemMapEntrySequence> for ConfigItemMapEntry {
    fn from(entry: ConfigItemMapEntrySequence) -> Self {
        ConfigItemMapEntry::Sequence(entry)
    }
}

impl From<ConfigItemMapEntrySet> for ConfigItemMapEntry {
    fn from(entry: ConfigItemMapEntrySet) -> Self {
        ConfigItemMapEntry::Set(entry)
    }
}

impl From<ConfigItemMapEntrySingleton> for ConfigItemMapEntry {
    fn from(entry: ConfigItemMapEntrySingleton) -> Self {
        ConfigItemMapEntry::Singleton(entry)
    }
}

/// Ordered blocks; names may repeat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigItemMapEntrySequence {
    name: Option<String>,
    blocks: Vec<ConfigBlock>,
}

impl ConfigItemMapEntrySequence {
    /// An anonymous sequence
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            blocks: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Append a block; always accepted
    pub fn add(&mut self, block: impl Into<ConfigBlock>) -> bool {
        self.blocks.push(block.into());
        true
    }

    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        item_type: ConfigElementType,
        value: impl Into<String>,
    ) -> bool {
        self.add(ConfigItem::new(name, item_type, value))
    }

    pub fn insert(&mut self, index: usize, block: impl Into<ConfigBlock>) -> Result<()> {
        if index > self.blocks.len() {
            return Err(Error::index(index, self.blocks.len()));
        }
        self.blocks.insert(index, block.into());
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&ConfigBlock> {
        self.blocks.get(index)
    }

    pub fn remove(&mut self, index: usize) -> Result<ConfigBlock> {
        if index >= self.blocks.len() {
            return Err(Error::index(index, self.blocks.len()));
        }
        Ok(self.blocks.remove(index))
    }

    /// Set the value of the item at `index`.
    ///
    /// Returns the previous value, or `None` (and changes nothing) if the
    /// block at `index` is not an item.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<Option<String>> {
        let len = self.blocks.len();
        let block = self
            .blocks
            .get_mut(index)
            .ok_or_else(|| Error::index(index, len))?;
        Ok(block.set_item_value(value))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigBlock> {
        self.blocks.iter()
    }
}

/// Blocks keyed by name, written in name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigItemMapEntrySet {
    name: Option<String>,
    blocks: BTreeMap<String, ConfigBlock>,
}

impl ConfigItemMapEntrySet {
    /// An anonymous set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            blocks: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Add a block unless its name is taken
    pub fn add(&mut self, block: impl Into<ConfigBlock>) -> bool {
        let block = block.into();
        let key = block.key();
        if self.blocks.contains_key(&key) {
            return false;
        }
        self.blocks.insert(key, block);
        true
    }

    /// Add an item. Refused if an item has this name; a block of another
    /// kind with the same name is replaced.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        item_type: ConfigElementType,
        value: impl Into<String>,
    ) -> bool {
        let name = name.into();
        if self.blocks.get(&name).is_some_and(ConfigBlock::is_item) {
            return false;
        }
        let item = ConfigItem::new(name.clone(), item_type, value);
        self.blocks.insert(name, item.into());
        true
    }

    /// Add or replace a block; returns the replaced one
    pub fn put(&mut self, block: impl Into<ConfigBlock>) -> Option<ConfigBlock> {
        let block = block.into();
        self.blocks.insert(block.key(), block)
    }

    pub fn remove(&mut self, name: &str) -> Option<ConfigBlock> {
        self.blocks.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ConfigBlock> {
        self.blocks.get(name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut ConfigBlock> {
        self.blocks.get_mut(name)
    }

    /// Set the value of the item `name`; returns the previous value
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.blocks.get_mut(name)?.set_item_value(value)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigBlock> + '_ {
        self.blocks.values()
    }
}

/// Exactly one block; membership never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItemMapEntrySingleton {
    name: Option<String>,
    block: Box<ConfigBlock>,
}

impl ConfigItemMapEntrySingleton {
    /// An anonymous singleton
    pub fn new(block: impl Into<ConfigBlock>) -> Self {
        Self {
            name: None,
            block: Box::new(block.into()),
        }
    }

    pub fn named(name: impl Into<String>, block: impl Into<ConfigBlock>) -> Self {
        Self {
            name: Some(name.into()),
            block: Box::new(block.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn block(&self) -> &ConfigBlock {
        &self.block
    }

    /// Always fails
    pub fn add(&mut self, _block: impl Into<ConfigBlock>) -> Result<bool> {
        Err(Error::Unsupported("add to a singleton map entry"))
    }

    /// Always fails
    pub fn add_item(
        &mut self,
        _name: impl Into<String>,
        _item_type: ConfigElementType,
        _value: impl Into<String>,
    ) -> Result<bool> {
        Err(Error::Unsupported("add to a singleton map entry"))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.block.name() == Some(name)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ConfigBlock> {
        self.contains(name).then(|| self.block.as_ref())
    }

    /// Set the value of the wrapped item; returns the previous value
    pub fn set(&mut self, value: impl Into<String>) -> Option<String> {
        self.block.set_item_value(value)
    }

    /// Like [`set`](Self::set), if the wrapped block is called `name`
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        if !self.contains(name) {
            return None;
        }
        self.set(value)
    }
}
