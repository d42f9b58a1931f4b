//! Styles and where they are written

use std::fmt;

use odsgen_core::{Destination, Mode, MultiContainer, Result, XmlUtil};

/// Value of `style:family`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    Table,
    TableColumn,
    TableRow,
    TableCell,
    Paragraph,
    Text,
}

impl StyleFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleFamily::Table => "table",
            StyleFamily::TableColumn => "table-column",
            StyleFamily::TableRow => "table-row",
            StyleFamily::TableCell => "table-cell",
            StyleFamily::Paragraph => "paragraph",
            StyleFamily::Text => "text",
        }
    }
}

/// A named style with the attributes of its `style:{family}-properties`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    name: String,
    family: StyleFamily,
    properties: Vec<(String, String)>,
}

impl Style {
    pub fn new(name: impl Into<String>, family: StyleFamily) -> Self {
        Self {
            name: name.into(),
            family,
            properties: Vec::new(),
        }
    }

    /// Add a property, e.g. `("fo:background-color", "#ff0000")`
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> StyleFamily {
        self.family
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        out.write_str("<style:style")?;
        util.append_e_attribute(out, "style:name", &self.name)?;
        util.append_attribute(out, "style:family", self.family.as_str())?;
        if self.properties.is_empty() {
            return out.write_str("/>");
        }
        write!(out, "><style:{}-properties", self.family.as_str())?;
        for (name, value) in &self.properties {
            util.append_e_attribute(out, name, value)?;
        }
        out.write_str("/></style:style>")
    }
}

/// The three places a style can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleDestination {
    /// `office:automatic-styles` of content.xml
    ContentAutomaticStyles,
    /// `office:automatic-styles` of styles.xml
    StylesAutomaticStyles,
    /// `office:styles` of styles.xml
    StylesCommonStyles,
}

impl Destination for StyleDestination {
    const ALL: &'static [Self] = &[
        StyleDestination::ContentAutomaticStyles,
        StyleDestination::StylesAutomaticStyles,
        StyleDestination::StylesCommonStyles,
    ];
}

/// Styles of a document, deduplicated by name
#[derive(Debug, Clone, Default)]
pub struct StylesContainer {
    styles: MultiContainer<String, Style, StyleDestination>,
}

impl StylesContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style for a destination, see [`MultiContainer::add`]
    pub fn add(&mut self, style: Style, destination: StyleDestination, mode: Mode) -> Result<bool> {
        self.styles
            .add(style.name().to_string(), style, destination, mode)
    }

    /// Automatic style used by the tables
    pub fn add_content_style(&mut self, style: Style, mode: Mode) -> Result<bool> {
        self.add(style, StyleDestination::ContentAutomaticStyles, mode)
    }

    /// Automatic style used by styles.xml; moves a content style there
    pub fn add_styles_style(&mut self, style: Style, mode: Mode) -> Result<bool> {
        self.add(style, StyleDestination::StylesAutomaticStyles, mode)
    }

    /// Common style, visible to the user
    pub fn add_common_style(&mut self, style: Style, mode: Mode) -> Result<bool> {
        self.add(style, StyleDestination::StylesCommonStyles, mode)
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        let name = name.to_string();
        let destination = self.styles.destination_of(&name)?;
        self.styles.get(&name, destination)
    }

    pub fn destination_of(&self, name: &str) -> Option<StyleDestination> {
        self.styles.destination_of(&name.to_string())
    }

    /// Styles of a destination, by name
    pub fn styles(&self, destination: StyleDestination) -> Vec<&Style> {
        let mut styles: Vec<&Style> = self.styles.values(destination).collect();
        styles.sort_by(|a, b| a.name().cmp(b.name()));
        styles
    }

    pub fn append_styles<W: fmt::Write + ?Sized>(
        &self,
        destination: StyleDestination,
        util: &mut XmlUtil,
        out: &mut W,
    ) -> fmt::Result {
        for style in self.styles(destination) {
            style.append_xml(util, out)?;
        }
        Ok(())
    }

    /// Refuse new styles from now on
    pub fn freeze(&mut self) {
        self.styles.freeze();
    }

    pub fn debug(&mut self) {
        self.styles.debug();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell_style(name: &str, color: &str) -> Style {
        Style::new(name, StyleFamily::TableCell).property("fo:background-color", color)
    }

    #[test]
    fn test_append_xml() {
        let mut out = String::new();
        let mut util = XmlUtil::default();
        cell_style("ce1", "#ff0000").append_xml(&mut util, &mut out).unwrap();
        assert_eq!(
            out,
            "<style:style style:name=\"ce1\" style:family=\"table-cell\">\
             <style:table-cell-properties fo:background-color=\"#ff0000\"/></style:style>"
        );
        out.clear();
        Style::new("p", StyleFamily::Paragraph).append_xml(&mut util, &mut out).unwrap();
        assert_eq!(out, "<style:style style:name=\"p\" style:family=\"paragraph\"/>");
    }

    #[test]
    fn test_dedup_and_move() {
        let mut styles = StylesContainer::new();
        assert!(styles.add_content_style(cell_style("ce1", "#ff0000"), Mode::Create).unwrap());
        assert!(!styles.add_content_style(cell_style("ce1", "#00ff00"), Mode::Create).unwrap());
        assert_eq!(styles.get("ce1"), Some(&cell_style("ce1", "#ff0000")));

        assert!(styles.add_styles_style(cell_style("ce1", "#0000ff"), Mode::CreateOrUpdate).unwrap());
        assert!(styles.styles(StyleDestination::ContentAutomaticStyles).is_empty());
        assert_eq!(
            styles.destination_of("ce1"),
            Some(StyleDestination::StylesAutomaticStyles)
        );
    }

    #[test]
    fn test_styles_sorted() {
        let mut styles = StylesContainer::new();
        for name in ["b", "c", "a"] {
            styles.add_common_style(cell_style(name, "#000000"), Mode::Create).unwrap();
        }
        let names: Vec<_> = styles
            .styles(StyleDestination::StylesCommonStyles)
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_frozen() {
        let mut styles = StylesContainer::new();
        styles.freeze();
        assert!(styles.add_content_style(cell_style("x", "#000000"), Mode::Create).is_err());
    }
}
