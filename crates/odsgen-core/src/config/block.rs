//! Any node of the settings tree

use std::fmt;

use super::item::ConfigItem;
use super::item_set::ConfigItemSet;
use super::map_entry::ConfigItemMapEntry;
use super::map_indexed::ConfigItemMapIndexed;
use super::map_named::ConfigItemMapNamed;
use crate::xml::XmlUtil;

/// A node of `office:settings`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigBlock {
    Item(ConfigItem),
    ItemSet(ConfigItemSet),
    MapEntry(ConfigItemMapEntry),
    MapIndexed(ConfigItemMapIndexed),
    MapNamed(ConfigItemMapNamed),
}

impl ConfigBlock {
    /// `config:name`; only map entries may be anonymous
    pub fn name(&self) -> Option<&str> {
        match self {
            ConfigBlock::Item(item) => Some(item.name()),
            ConfigBlock::ItemSet(set) => Some(set.name()),
            ConfigBlock::MapEntry(entry) => entry.name(),
            ConfigBlock::MapIndexed(map) => Some(map.name()),
            ConfigBlock::MapNamed(map) => Some(map.name()),
        }
    }

    pub fn as_item(&self) -> Option<&ConfigItem> {
        match self {
            ConfigBlock::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut ConfigItem> {
        match self {
            ConfigBlock::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self, ConfigBlock::Item(_))
    }

    /// Set the value if this block is an item; returns the previous value
    pub fn set_item_value(&mut self, value: impl Into<String>) -> Option<String> {
        self.as_item_mut().map(|item| item.set_value(value))
    }

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        match self {
            ConfigBlock::Item(item) => item.append_xml(util, out),
            ConfigBlock::ItemSet(set) => set.append_xml(util, out),
            ConfigBlock::MapEntry(entry) => entry.append_xml(util, out),
            ConfigBlock::MapIndexed(map) => map.append_xml(util, out),
            ConfigBlock::MapNamed(map) => map.append_xml(util, out),
        }
    }

    /// Key used by name-keyed collections
    pub(crate) fn key(&self) -> String {
        self.name().unwrap_or_default().to_string()
    }
}

impl From<ConfigItem> for ConfigBlock {
    fn from(item: ConfigItem) -> Self {
        ConfigBlock::Item(item)
    }
}

impl From<ConfigItemSet> for ConfigBlock {
    fn from(set: ConfigItemSet) -> Self {
        ConfigBlock::ItemSet(set)
    }
}

impl From<ConfigItemMapEntry> for ConfigBlock {
    fn from(entry: ConfigItemMapEntry) -> Self {
        ConfigBlock::MapEntry(entry)
    }
}

impl From<ConfigItemMapIndexed> for ConfigBlock {
    fn from(map: ConfigItemMapIndexed) -> Self {
        ConfigBlock::MapIndexed(map)
    }
}

impl From<ConfigItemMapNamed> for ConfigBlock {
    fn from(map: ConfigItemMapNamed) -> Self {
        ConfigBlock::MapNamed(map)
    }
}
