//! `<config:config-item-set>`: blocks with unique names

use std::collections::BTreeMap;
use std::fmt;

use super::block::ConfigBlock;
use super::item::{ConfigElementType, ConfigItem};
use crate::xml::XmlUtil;

/// A named set of blocks, written in name order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItemSet {
    name: String,
    blocks: BTreeMap<String, ConfigBlock>,
}

impl ConfigItemSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocks: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
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

    /// Add an item unless its name is taken
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        item_type: ConfigElementType,
        value: impl Into<String>,
    ) -> bool {
        self.add(ConfigItem::new(name, item_type, value))
    }

    /// Add or replace a block; returns the replaced one
    pub fn put(&mut self, block: impl Into<ConfigBlock>) -> Option<ConfigBlock> {
        let block = block.into();
        self.blocks.insert(block.key(), block)
    }

    /// Set the value of the item `name`; `None` if there is no such item
    pub fn set_item_value(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        self.blocks.get_mut(name)?.set_item_value(value)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ConfigBlock> {
        self.blocks.get(name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut ConfigBlock> {
        self.blocks.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ConfigBlock> {
        self.blocks.remove(name)
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

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        out.write_str("<config:config-item-set")?;
        util.append_e_attribute(out, "config:name", &self.name)?;
        out.write_char('>')?;
        for block in self.blocks.values() {
            block.append_xml(util, out)?;
        }
        out.write_str("</config:config-item-set>")
    }
}
