//! Well-known LibreOffice settings

use super::item::ConfigElementType;

macro_rules! config_elements {
    ($($variant:ident => ($name:literal, $ty:ident),)+) => {
        /// A setting LibreOffice knows, with its name and type
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ConfigElement {
            $($variant,)+
        }

        impl ConfigElement {
            /// Every known setting
            pub const ALL: &'static [ConfigElement] = &[$(ConfigElement::$variant,)+];

            /// Value of `config:name`
            pub fn name(&self) -> &'static str {
                match self {
                    $(ConfigElement::$variant => $name,)+
                }
            }

            /// Value of `config:type`
            pub fn element_type(&self) -> ConfigElementType {
                match self {
                    $(ConfigElement::$variant => ConfigElementType::$ty,)+
                }
            }
        }
    };
}

config_elements! {
    ShowFormulas => ("ShowFormulas", Boolean),
    ShowZeroValues => ("ShowZeroValues", Boolean),
    IsValueHighlightingEnabled => ("IsValueHighlightingEnabled", Boolean),
    ShowNotes => ("ShowNotes", Boolean),
    HasVerticalScrollBar => ("HasVerticalScrollBar", Boolean),
    HasHorizontalScrollBar => ("HasHorizontalScrollBar", Boolean),
    HasSheetTabs => ("HasSheetTabs", Boolean),
    IsOutlineSymbolsSet => ("IsOutlineSymbolsSet", Boolean),
    HasColumnRowHeaders => ("HasColumnRowHeaders", Boolean),
    ShowGrid => ("ShowGrid", Boolean),
    GridColor => ("GridColor", Long),
    ShowHelpLines => ("ShowHelpLines", Boolean),
    ShowAnchor => ("ShowAnchor", Boolean),
    ShowPageBreaks => ("ShowPageBreaks", Boolean),
    ShowObjects => ("ShowObjects", Short),
    ShowCharts => ("ShowCharts", Short),
    ShowDrawing => ("ShowDrawing", Short),
    HideSpellMarks => ("HideSpellMarks", Boolean),
    ZoomType => ("ZoomType", Short),
    ZoomValue => ("ZoomValue", Short),
    ForbiddenCharacters => ("ForbiddenCharacters", Long),
    LinkUpdateMode => ("LinkUpdateMode", Short),
    PrinterName => ("PrinterName", String),
    PrinterSetup => ("PrinterSetup", Base64Binary),
    IsKernAsianPunctuation => ("IsKernAsianPunctuation", Boolean),
    CharacterCompressionType => ("CharacterCompressionType", Short),
    ApplyUserData => ("ApplyUserData", Boolean),
    SaveVersionOnClose => ("SaveVersionOnClose", Boolean),
    UpdateFromTemplate => ("UpdateFromTemplate", Boolean),
    FieldAutoUpdate => ("FieldAutoUpdate", Boolean),
    CurrentDatabaseDataSource => ("CurrentDatabaseDataSource", String),
    CurrentDatabaseCommand => ("CurrentDatabaseCommand", String),
    CurrentDatabaseCommandType => ("CurrentDatabaseCommandType", Long),
    DefaultTabStop => ("DefaultTabStop", Long),
    IsPrintBooklet => ("IsPrintBooklet", Boolean),
    IsPrintBookletFront => ("IsPrintBookletFront", Boolean),
    IsPrintBookletBack => ("IsPrintBookletBack", Boolean),
    PrintQuality => ("PrintQuality", Long),
    ColorTableUrl => ("ColorTableURL", String),
    DashTableUrl => ("DashTableURL", String),
    LineEndTableUrl => ("LineEndTableURL", String),
    HatchTableUrl => ("HatchTableURL", String),
    GradientTableUrl => ("GradientTableURL", String),
    BitmapTableUrl => ("BitmapTableURL", String),
    AutoCalculate => ("AutoCalculate", Boolean),
    PrinterIndependentLayout => ("PrinterIndependentLayout", Short),
    AddExternalLeading => ("AddExternalLeading", Boolean),
    EmbedFonts => ("EmbedFonts", Boolean),
    EmbedSystemFonts => ("EmbedSystemFonts", Boolean),
    EmbedOnlyUsedFonts => ("EmbedOnlyUsedFonts", Boolean),
    EmbedLatinScriptFonts => ("EmbedLatinScriptFonts", Short),
    EmbedAsianScriptFonts => ("EmbedAsianScriptFonts", Short),
    EmbedComplexScriptFonts => ("EmbedComplexScriptFonts", Short),
    IsSnapToRaster => ("IsSnapToRaster", Boolean),
    RasterIsVisible => ("RasterIsVisible", Boolean),
    RasterResolutionX => ("RasterResolutionX", Long),
    RasterResolutionY => ("RasterResolutionY", Long),
    RasterSubdivisionX => ("RasterSubdivisionX", Long),
    RasterSubdivisionY => ("RasterSubdivisionY", Long),
    IsRasterAxisSynchronized => ("IsRasterAxisSynchronized", Boolean),
    ViewId => ("ViewId", String),
    ActiveTable => ("ActiveTable", String),
    HorizontalScrollbarWidth => ("HorizontalScrollbarWidth", Int),
    PageViewZoomValue => ("PageViewZoomValue", Int),
    ShowPageBreakPreview => ("ShowPageBreakPreview", Boolean),
    AllowPrintJobCancel => ("AllowPrintJobCancel", Boolean),
    LoadReadonly => ("LoadReadonly", Boolean),
    VisibleAreaTop => ("VisibleAreaTop", Int),
    VisibleAreaLeft => ("VisibleAreaLeft", Int),
    VisibleAreaWidth => ("VisibleAreaWidth", Int),
    VisibleAreaHeight => ("VisibleAreaHeight", Int),
    HorizontalSplitMode => ("HorizontalSplitMode", Short),
    VerticalSplitMode => ("VerticalSplitMode", Short),
    HorizontalSplitPosition => ("HorizontalSplitPosition", Int),
    VerticalSplitPosition => ("VerticalSplitPosition", Int),
    CursorPositionX => ("CursorPositionX", Int),
    CursorPositionY => ("CursorPositionY", Int),
    ActiveSplitRange => ("ActiveSplitRange", Short),
    PositionLeft => ("PositionLeft", Int),
    PositionRight => ("PositionRight", Int),
    PositionTop => ("PositionTop", Int),
    PositionBottom => ("PositionBottom", Int),
}

impl ConfigElement {
    /// Look up a setting by its `config:name`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(ConfigElement::from_name("ShowGrid"), Some(ConfigElement::ShowGrid));
        assert_eq!(ConfigElement::from_name("ColorTableURL"), Some(ConfigElement::ColorTableUrl));
        assert_eq!(ConfigElement::from_name("NoSuchSetting"), None);
    }

    #[test]
    fn test_types() {
        assert_eq!(ConfigElement::GridColor.element_type(), ConfigElementType::Long);
        assert_eq!(ConfigElement::CursorPositionX.element_type(), ConfigElementType::Int);
        assert_eq!(ConfigElement::PrinterSetup.element_type(), ConfigElementType::Base64Binary);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ConfigElement::ALL.iter().map(|e| e.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ConfigElement::ALL.len());
    }
}
