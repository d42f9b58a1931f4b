//! `<config:config-item-map-named>`: map entries keyed by name

use std::collections::BTreeMap;
use std::fmt;

use super::map_entry::ConfigItemMapEntry;
use crate::error::{Error, Result};
use crate::xml::XmlUtil;

/// A named map of named entries, e.g. the per-table settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItemMapNamed {
    name: String,
    entries: BTreeMap<String, ConfigItemMapEntry>,
}

impl ConfigItemMapNamed {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add or replace an entry by its name; returns the replaced one.
    ///
    /// An anonymous entry cannot be keyed and is refused.
    pub fn put(
        &mut self,
        entry: impl Into<ConfigItemMapEntry>,
    ) -> Result<Option<ConfigItemMapEntry>> {
        let entry = entry.into();
        let Some(name) = entry.name().map(str::to_string) else {
            return Err(Error::Unsupported("anonymous entry in a named map"));
        };
        Ok(self.entries.insert(name, entry))
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ConfigItemMapEntry> {
        self.entries.get(name)
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Option<&mut ConfigItemMapEntry> {
        self.entries.get_mut(name)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<ConfigItemMapEntry> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigItemMapEntry> + '_ {
        self.entries.values()
    }

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        out.write_str("<config:config-item-map-named")?;
        util.append_e_attribute(out, "config:name", &self.name)?;
        out.write_char('>')?;
        for entry in self.entries.values() {
            entry.append_xml(util, out)?;
        }
        out.write_str("</config:config-item-map-named>")
    }
}
