//! Content of settings.xml
//!
//! ```text
//! ooo:view-settings
//!   VisibleArea*
//!   Views (map-indexed)
//!     <first view> (map entry)
//!       ViewId, ActiveTable, ZoomValue, ShowGrid, ...
//!       Tables (map-named)
//!         <table name> (map entry): CursorPositionX, ...
//! ooo:configuration-settings
//! ```

use std::fmt;

use odsgen_core::{
    ConfigBlock, ConfigElement, ConfigItem, ConfigItemMapEntry, ConfigItemMapEntrySet,
    ConfigItemMapIndexed, ConfigItemMapNamed, ConfigItemSet, XmlUtil,
};

use crate::error::{OdsError, OdsResult};

const VIEWS: &str = "Views";
const TABLES: &str = "Tables";

/// The `office:settings` tree of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    view_settings: ConfigItemSet,
    configuration_settings: ConfigItemSet,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Settings LibreOffice writes for a new spreadsheet
    pub fn new() -> Self {
        let mut view_settings = ConfigItemSet::new("ooo:view-settings");
        for (element, value) in [
            (ConfigElement::VisibleAreaTop, "0"),
            (ConfigElement::VisibleAreaLeft, "0"),
            (ConfigElement::VisibleAreaWidth, "680"),
            (ConfigElement::VisibleAreaHeight, "400"),
        ] {
            view_settings.add(ConfigItem::from_element(element, value));
        }

        let mut first_view = ConfigItemMapEntrySet::new();
        for (element, value) in [
            (ConfigElement::ViewId, "view1"),
            (ConfigElement::ActiveTable, ""),
            (ConfigElement::HorizontalScrollbarWidth, "270"),
            (ConfigElement::PageViewZoomValue, "60"),
            (ConfigElement::ShowPageBreakPreview, "false"),
            (ConfigElement::ZoomType, "0"),
            (ConfigElement::ZoomValue, "100"),
            (ConfigElement::ShowZeroValues, "true"),
            (ConfigElement::ShowNotes, "true"),
            (ConfigElement::ShowGrid, "true"),
            (ConfigElement::GridColor, "12632256"),
            (ConfigElement::ShowPageBreaks, "true"),
            (ConfigElement::HasColumnRowHeaders, "true"),
            (ConfigElement::HasSheetTabs, "true"),
            (ConfigElement::IsOutlineSymbolsSet, "true"),
            (ConfigElement::IsSnapToRaster, "false"),
            (ConfigElement::RasterIsVisible, "false"),
            (ConfigElement::RasterResolutionX, "1000"),
            (ConfigElement::RasterResolutionY, "1000"),
            (ConfigElement::RasterSubdivisionX, "1"),
            (ConfigElement::RasterSubdivisionY, "1"),
            (ConfigElement::IsRasterAxisSynchronized, "true"),
        ] {
            first_view.add(ConfigItem::from_element(element, value));
        }
        first_view.add(ConfigItemMapNamed::new(TABLES));

        let mut views = ConfigItemMapIndexed::new(VIEWS);
        views.push(first_view);
        view_settings.add(views);

        let mut configuration_settings = ConfigItemSet::new("ooo:configuration-settings");
        for (element, value) in [
            (ConfigElement::ShowZeroValues, "true"),
            (ConfigElement::ShowNotes, "true"),
            (ConfigElement::ShowGrid, "true"),
            (ConfigElement::GridColor, "12632256"),
            (ConfigElement::ShowPageBreaks, "true"),
            (ConfigElement::HasColumnRowHeaders, "true"),
            (ConfigElement::HasSheetTabs, "true"),
            (ConfigElement::IsOutlineSymbolsSet, "true"),
            (ConfigElement::LinkUpdateMode, "3"),
            (ConfigElement::PrinterName, ""),
            (ConfigElement::PrinterSetup, ""),
            (ConfigElement::ApplyUserData, "true"),
            (ConfigElement::CharacterCompressionType, "0"),
            (ConfigElement::IsKernAsianPunctuation, "false"),
            (ConfigElement::SaveVersionOnClose, "false"),
            (ConfigElement::UpdateFromTemplate, "true"),
            (ConfigElement::AutoCalculate, "true"),
            (ConfigElement::IsSnapToRaster, "false"),
            (ConfigElement::RasterIsVisible, "false"),
            (ConfigElement::RasterResolutionX, "1000"),
            (ConfigElement::RasterResolutionY, "1000"),
            (ConfigElement::RasterSubdivisionX, "1"),
            (ConfigElement::RasterSubdivisionY, "1"),
            (ConfigElement::IsRasterAxisSynchronized, "true"),
            (ConfigElement::AllowPrintJobCancel, "true"),
            (ConfigElement::LoadReadonly, "false"),
        ] {
            configuration_settings.add(ConfigItem::from_element(element, value));
        }

        Self {
            view_settings,
            configuration_settings,
        }
    }

    pub fn view_settings(&self) -> &ConfigItemSet {
        &self.view_settings
    }

    pub fn configuration_settings(&self) -> &ConfigItemSet {
        &self.configuration_settings
    }

    pub fn configuration_settings_mut(&mut self) -> &mut ConfigItemSet {
        &mut self.configuration_settings
    }

    /// Set an item of the first view, e.g. `ZoomValue`.
    ///
    /// Returns the previous value, `None` if the view has no such item.
    pub fn set_view_setting(&mut self, name: &str, value: impl Into<String>) -> Option<String> {
        match self.first_view_mut()? {
            ConfigItemMapEntry::Set(view) => view.set(name, value),
            _ => None,
        }
    }

    /// Value of an item of the first view
    pub fn view_setting(&self, name: &str) -> Option<&str> {
        let view = self.first_view()?;
        view.iter()
            .filter_map(ConfigBlock::as_item)
            .find(|item| item.name() == name)
            .map(ConfigItem::value)
    }

    pub fn set_active_table(&mut self, table_name: &str) {
        self.set_view_setting(ConfigElement::ActiveTable.name(), table_name);
    }

    /// Create the per-table entry with LibreOffice's defaults
    pub fn add_table_config(&mut self, table_name: &str) -> OdsResult<()> {
        let mut entry = ConfigItemMapEntrySet::named(table_name);
        for (element, value) in [
            (ConfigElement::CursorPositionX, "0"),
            (ConfigElement::CursorPositionY, "0"),
            (ConfigElement::HorizontalSplitMode, "0"),
            (ConfigElement::VerticalSplitMode, "0"),
            (ConfigElement::HorizontalSplitPosition, "0"),
            (ConfigElement::VerticalSplitPosition, "0"),
            (ConfigElement::ActiveSplitRange, "2"),
            (ConfigElement::PositionLeft, "0"),
            (ConfigElement::PositionRight, "0"),
            (ConfigElement::PositionTop, "0"),
            (ConfigElement::PositionBottom, "0"),
            (ConfigElement::ZoomType, "0"),
            (ConfigElement::ZoomValue, "100"),
            (ConfigElement::PageViewZoomValue, "60"),
        ] {
            entry.add(ConfigItem::from_element(element, value));
        }
        self.tables_mut()?.put(entry)?;
        Ok(())
    }

    pub fn remove_table_config(&mut self, table_name: &str) -> bool {
        self.tables_mut()
            .map(|tables| tables.remove_by_name(table_name).is_some())
            .unwrap_or(false)
    }

    /// Set an item of a table entry, e.g. `CursorPositionX`
    pub fn set_table_setting(
        &mut self,
        table_name: &str,
        name: &str,
        value: impl Into<String>,
    ) -> OdsResult<Option<String>> {
        let tables = self.tables_mut()?;
        match tables.get_by_name_mut(table_name) {
            Some(ConfigItemMapEntry::Set(entry)) => Ok(entry.set(name, value)),
            Some(_) => Ok(None),
            None => Err(OdsError::UnknownTable(table_name.to_string())),
        }
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables()
            .map(|tables| tables.iter().filter_map(ConfigItemMapEntry::name).collect())
            .unwrap_or_default()
    }

    /// Write the two root sets
    pub fn append_xml<W: fmt::Write + ?Sized>(&self, util: &mut XmlUtil, out: &mut W) -> fmt::Result {
        self.view_settings.append_xml(util, out)?;
        self.configuration_settings.append_xml(util, out)
    }

    fn first_view(&self) -> Option<&ConfigItemMapEntry> {
        match self.view_settings.get_by_name(VIEWS)? {
            ConfigBlock::MapIndexed(views) => views.get(0).ok(),
            _ => None,
        }
    }

    fn first_view_mut(&mut self) -> Option<&mut ConfigItemMapEntry> {
        match self.view_settings.get_by_name_mut(VIEWS)? {
            ConfigBlock::MapIndexed(views) => views.get_mut(0).ok(),
            _ => None,
        }
    }

    fn tables(&self) -> Option<&ConfigItemMapNamed> {
        match self.first_view()? {
            ConfigItemMapEntry::Set(view) => match view.get_by_name(TABLES)? {
                ConfigBlock::MapNamed(tables) => Some(tables),
                _ => None,
            },
            _ => None,
        }
    }

    fn tables_mut(&mut self) -> OdsResult<&mut ConfigItemMapNamed> {
        let tables = match self.first_view_mut() {
            Some(ConfigItemMapEntry::Set(view)) => view.get_by_name_mut(TABLES),
            _ => None,
        };
        match tables {
            Some(ConfigBlock::MapNamed(tables)) => Ok(tables),
            _ => Err(odsgen_core::Error::Unsupported("settings without a Tables map").into()),
        }
    }
}
