//! `<config:config-item-map-indexed>`: ordered map entries

use std::fmt;

use super::map_entry::ConfigItemMapEntry;
use crate::error::{Error, Result};
use crate::xml::XmlUtil;

/// A named list of map entries, e.g. the `Views` of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItemMapIndexed {
    name: String,
    entries: Vec<ConfigItemMapEntry>,
}

impl ConfigItemMapIndexed {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, entry: impl Into<ConfigItemMapEntry>) {
        self.entries.push(entry.into());
    }

    pub fn insert(&mut self, index: usize, entry: impl Into<ConfigItemMapEntry>) -> Result<()> {
        if index > self.entries.len() {
            return Err(Error::index(index, self.entries.len()));
        }
        self.entries.insert(index, entry.into());
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&ConfigItemMapEntry> {
        let len = self.entries.len();
        self.entries.get(index).ok_or_else(|| Error::index(index, len))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut ConfigItemMapEntry> {
        let len = self.entries.len();
        self.entries.get_mut(index).ok_or_else(|| Error::index(index, len))
    }

    /// Replace the entry at `index`; returns the old one
    pub fn set(
        &mut self,
        index: usize,
        entry: impl Into<ConfigItemMapEntry>,
    ) -> Result<ConfigItemMapEntry> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, entry.into()))
    }

    pub fn remove(&mut self, index: usize) -> Result<ConfigItemMapEntry> {
        if index >= self.entries.len() {
            return Err(Error::index(index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    pub fn contains(&self, entry: &ConfigItemMapEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigItemMapEntry> {
        self.entries.iter()
    }

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        out.write_str("<config:config-item-map-indexed")?;
        util.append_e_attribute(out, "config:name", &self.name)?;
        out.write_char('>')?;
        for entry in &self.entries {
            entry.append_xml(util, out)?;
        }
        out.write_str("</config:config-item-map-indexed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigElementType, ConfigItemMapEntrySequence, ConfigItemMapEntrySet};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positional_access() {
        let mut map = ConfigItemMapIndexed::new("Views");
        map.push(ConfigItemMapEntrySequence::named("a"));
        map.insert(0, ConfigItemMapEntrySequence::named("b")).unwrap();
        assert_eq!(map.get(0).unwrap().name(), Some("b"));
        let old = map.set(1, ConfigItemMapEntrySet::named("c")).unwrap();
        assert_eq!(old.name(), Some("a"));
        assert_eq!(map.remove(0).unwrap().name(), Some("b"));
        assert_eq!(map.len(), 1);
        assert!(map.contains(&ConfigItemMapEntrySet::named("c").into()));
    }

    #[test]
    fn test_out_of_range() {
        let mut map = ConfigItemMapIndexed::new("Views");
        assert!(matches!(map.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 })));
        assert!(map.get_mut(0).is_err());
        assert!(map.set(0, ConfigItemMapEntrySequence::new()).is_err());
        assert!(map.remove(0).is_err());
        assert!(map.insert(1, ConfigItemMapEntrySequence::new()).is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_append_xml() {
        let mut map = ConfigItemMapIndexed::new("Views");
        let mut view = ConfigItemMapEntrySequence::new();
        view.add_item("ViewId", ConfigElementType::String, "view1");
        map.push(view);
        let mut out = String::new();
        map.append_xml(&mut XmlUtil::default(), &mut out).unwrap();
        assert_eq!(
            out,
            "<config:config-item-map-indexed config:name=\"Views\">\
             <config:config-item-map-entry>\
             <config:config-item config:name=\"ViewId\" config:type=\"string\">view1</config:config-item>\
             </config:config-item-map-entry>\
             </config:config-item-map-indexed>"
        );
    }
}
