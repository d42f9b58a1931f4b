//! Leaf of the settings tree: `<config:config-item>`

use std::fmt;

use super::element::ConfigElement;
use crate::xml::XmlUtil;

/// Value of the `config:type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigElementType {
    Boolean,
    Short,
    Int,
    Long,
    Double,
    String,
    DateTime,
    Base64Binary,
}

impl ConfigElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigElementType::Boolean => "boolean",
            ConfigElementType::Short => "short",
            ConfigElementType::Int => "int",
            ConfigElementType::Long => "long",
            ConfigElementType::Double => "double",
            ConfigElementType::String => "string",
            ConfigElementType::DateTime => "datetime",
            ConfigElementType::Base64Binary => "base64Binary",
        }
    }
}

impl fmt::Display for ConfigElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed setting value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    name: String,
    item_type: ConfigElementType,
    value: String,
}

impl ConfigItem {
    pub fn new(
        name: impl Into<String>,
        item_type: ConfigElementType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            item_type,
            value: value.into(),
        }
    }

    /// An item for a well-known setting
    pub fn from_element(element: ConfigElement, value: impl Into<String>) -> Self {
        Self::new(element.name(), element.element_type(), value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> ConfigElementType {
        self.item_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, returning the previous one
    pub fn set_value(&mut self, value: impl Into<String>) -> String {
        std::mem::replace(&mut self.value, value.into())
    }

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        out.write_str("<config:config-item")?;
        util.append_e_attribute(out, "config:name", &self.name)?;
        util.append_attribute(out, "config:type", self.item_type)?;
        out.write_char('>')?;
        util.append_content(out, &self.value)?;
        out.write_str("</config:config-item>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_append_xml() {
        let item = ConfigItem::new("PrinterName", ConfigElementType::String, "HP <& Co>");
        let mut out = String::new();
        item.append_xml(&mut XmlUtil::default(), &mut out).unwrap();
        assert_eq!(
            out,
            "<config:config-item config:name=\"PrinterName\" config:type=\"string\">HP &lt;&amp; Co&gt;</config:config-item>"
        );
    }

    #[test]
    fn test_set_value() {
        let mut item = ConfigItem::from_element(ConfigElement::ZoomValue, "100");
        assert_eq!(item.item_type(), ConfigElementType::Short);
        assert_eq!(item.set_value("150"), "100");
        assert_eq!(item.value(), "150");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ConfigElementType::Base64Binary.to_string(), "base64Binary");
        assert_eq!(ConfigElementType::DateTime.as_str(), "datetime");
    }
}
