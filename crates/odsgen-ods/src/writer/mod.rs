//! ODS package writer

mod content;
mod meta;
mod styles;

use std::fmt::Write as _;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use odsgen_core::{EscaperOptions, XmlUtil};

use crate::document::Document;
use crate::error::OdsResult;

pub(crate) const MIMETYPE: &str = "application/vnd.oasis.opendocument.spreadsheet";
pub(crate) const ODF_VERSION: &str = "1.2";
pub(crate) const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Namespace declarations shared by content.xml and styles.xml
pub(crate) const DOCUMENT_NAMESPACES: &str = concat!(
    r#" xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0""#,
    r#" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0""#,
    r#" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0""#,
    r#" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0""#,
    r#" xmlns:fo="urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0""#,
    r#" xmlns:number="urn:oasis:names:tc:opendocument:xmlns:datastyle:1.0""#,
    r#" xmlns:svg="urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0""#,
    r#" xmlns:of="urn:oasis:names:tc:opendocument:xmlns:of:1.2""#,
);

/// Package entries after `mimetype`, in write order
pub(crate) const XML_ENTRIES: [&str; 5] = [
    "META-INF/manifest.xml",
    "meta.xml",
    "styles.xml",
    "content.xml",
    "settings.xml",
];

/// Options of [`OdsWriter`]
#[derive(Debug, Clone)]
pub struct OdsWriterOptions {
    /// Deflate the XML entries (`mimetype` is always stored)
    pub compress: bool,
    /// Value of `meta:generator`
    pub generator: String,
    /// Fixed creation date; the current time if `None`
    pub creation_date: Option<NaiveDateTime>,
    /// Options of the escaper cache
    pub escaper: EscaperOptions,
}

impl Default for OdsWriterOptions {
    fn default() -> Self {
        Self {
            compress: true,
            generator: concat!("odsgen/", env!("CARGO_PKG_VERSION")).to_string(),
            creation_date: None,
            escaper: EscaperOptions::default(),
        }
    }
}

/// ODS file writer
#[derive(Debug, Clone, Default)]
pub struct OdsWriter {
    options: OdsWriterOptions,
}

impl OdsWriter {
    pub fn new(options: OdsWriterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &OdsWriterOptions {
        &self.options
    }

    /// Write a document to a file path with default options
    pub fn write_file<P: AsRef<Path>>(document: &Document, path: P) -> OdsResult<()> {
        Self::default().save(document, path)
    }

    /// Write a document to a writer with default options
    pub fn write<W: Write + Seek>(document: &Document, writer: W) -> OdsResult<()> {
        Self::default().write_to(document, writer)
    }

    /// Write a document to a file path
    pub fn save<P: AsRef<Path>>(&self, document: &Document, path: P) -> OdsResult<()> {
        let file = File::create(path)?;
        self.write_to(document, file)
    }

    /// Write a document to a writer
    pub fn write_to<W: Write + Seek>(&self, document: &Document, writer: W) -> OdsResult<()> {
        let mut zip = zip::ZipWriter::new(writer);
        let mut util = XmlUtil::with_options(self.options.escaper);
        let creation_date = self
            .options
            .creation_date
            .unwrap_or_else(|| chrono::Local::now().naive_local());

        // mimetype must come first and uncompressed
        let stored = self.file_options(creation_date, false);
        zip.start_file("mimetype", stored)?;
        zip.write_all(MIMETYPE.as_bytes())?;
        log::debug!("wrote mimetype");

        let options = self.file_options(creation_date, self.options.compress);
        let mut written = 0;
        for name in XML_ENTRIES {
            let xml = match name {
                "META-INF/manifest.xml" => meta::manifest_xml()?,
                "meta.xml" => meta::meta_xml(document, &self.options.generator, creation_date, &mut util)?,
                "styles.xml" => styles::styles_xml(document, &mut util)?,
                "content.xml" => content::content_xml(document, &mut util)?,
                _ => Self::settings_xml(document, &mut util)?,
            };
            zip.start_file(name, options)?;
            zip.write_all(xml.as_bytes())?;
            log::debug!("wrote {name} ({} bytes)", xml.len());
            written += xml.len();
        }

        zip.finish()?;
        log::info!(
            "wrote ODS package: {} table(s), {written} bytes of XML",
            document.table_count()
        );
        Ok(())
    }

    /// The content of settings.xml
    pub fn settings_xml(document: &Document, util: &mut XmlUtil) -> OdsResult<String> {
        let mut out = String::with_capacity(8 * 1024);
        out.push_str(XML_HEADER);
        write!(
            out,
            r#"<office:document-settings xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:config="urn:oasis:names:tc:opendocument:xmlns:config:1.0" office:version="{ODF_VERSION}">"#
        )?;
        out.push_str("<office:settings>");
        document.settings().append_xml(util, &mut out)?;
        out.push_str("</office:settings></office:document-settings>");
        Ok(out)
    }

    fn file_options(
        &self,
        date: NaiveDateTime,
        compress: bool,
    ) -> zip::write::SimpleFileOptions {
        let method = if compress {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        let options = zip::write::SimpleFileOptions::default().compression_method(method);
        match to_zip_date(date) {
            Some(date) => options.last_modified_time(date),
            None => options,
        }
    }
}

fn to_zip_date(date: NaiveDateTime) -> Option<zip::DateTime> {
    use chrono::{Datelike, Timelike};

    let year = u16::try_from(date.year()).ok()?;
    zip::DateTime::from_date_and_time(
        year,
        date.month() as u8,
        date.day() as u8,
        date.hour() as u8,
        date.minute() as u8,
        date.second() as u8,
    )
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn fixed_options() -> OdsWriterOptions {
        OdsWriterOptions {
            creation_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|d| d.and_hms_opt(12, 30, 0)),
            ..OdsWriterOptions::default()
        }
    }

    fn sample() -> Document {
        let mut doc = Document::new();
        let table = doc.add_table("Sheet1").unwrap();
        table.set_cell(0, 0, "a & b").unwrap();
        table.set_cell(1, 1, 2.5).unwrap();
        doc
    }

    #[test]
    fn test_entries_in_order() {
        let mut buffer = Cursor::new(Vec::new());
        OdsWriter::new(fixed_options())
            .write_to(&sample(), &mut buffer)
            .unwrap();

        let mut archive = zip::ZipArchive::new(buffer).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        let mut expected = vec!["mimetype".to_string()];
        expected.extend(XML_ENTRIES.iter().map(|s| s.to_string()));
        assert_eq!(names, expected);

        let mut mimetype = archive.by_index(0).unwrap();
        assert_eq!(mimetype.compression(), zip::CompressionMethod::Stored);
        let mut text = String::new();
        mimetype.read_to_string(&mut text).unwrap();
        assert_eq!(text, MIMETYPE);
    }

    #[test]
    fn test_uncompressed() {
        let options = OdsWriterOptions {
            compress: false,
            ..fixed_options()
        };
        let mut buffer = Cursor::new(Vec::new());
        OdsWriter::new(options).write_to(&sample(), &mut buffer).unwrap();
        let mut archive = zip::ZipArchive::new(buffer).unwrap();
        let content = archive.by_name("content.xml").unwrap();
        assert_eq!(content.compression(), zip::CompressionMethod::Stored);
    }

    #[test]
    fn test_reproducible_output() {
        let write = || {
            let mut buffer = Cursor::new(Vec::new());
            OdsWriter::new(fixed_options())
                .write_to(&sample(), &mut buffer)
                .unwrap();
            buffer.into_inner()
        };
        assert_eq!(write(), write());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.ods");
        OdsWriter::write_file(&sample(), &path).unwrap();

        let archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1 + XML_ENTRIES.len());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
        assert_eq!(&bytes[30..38], b"mimetype");
    }

    #[test]
    fn test_settings_xml() {
        let xml = OdsWriter::settings_xml(&sample(), &mut XmlUtil::default()).unwrap();
        assert!(xml.starts_with(XML_HEADER));
        assert!(xml.contains("<office:settings><config:config-item-set config:name=\"ooo:view-settings\">"));
        assert!(xml.contains("<config:config-item config:name=\"ActiveTable\" config:type=\"string\">Sheet1</config:config-item>"));
        assert!(xml.ends_with("</office:settings></office:document-settings>"));
    }
}
