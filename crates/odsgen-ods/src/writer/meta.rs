//! META-INF/manifest.xml and meta.xml

use std::fmt::Write;

use chrono::NaiveDateTime;
use odsgen_core::XmlUtil;

use super::{MIMETYPE, ODF_VERSION, XML_ENTRIES, XML_HEADER};
use crate::document::Document;
use crate::error::OdsResult;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub(crate) fn manifest_xml() -> OdsResult<String> {
    let mut out = String::with_capacity(1024);
    out.push_str(XML_HEADER);
    write!(
        out,
        r#"<manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="{ODF_VERSION}">"#
    )?;
    write!(
        out,
        r#"<manifest:file-entry manifest:full-path="/" manifest:version="{ODF_VERSION}" manifest:media-type="{MIMETYPE}"/>"#
    )?;
    for path in XML_ENTRIES.iter().filter(|path| !path.starts_with("META-INF/")) {
        write!(
            out,
            r#"<manifest:file-entry manifest:full-path="{path}" manifest:media-type="text/xml"/>"#
        )?;
    }
    out.push_str("</manifest:manifest>");
    Ok(out)
}

pub(crate) fn meta_xml(
    document: &Document,
    generator: &str,
    creation_date: NaiveDateTime,
    util: &mut XmlUtil,
) -> OdsResult<String> {
    let date = creation_date.format(DATE_FORMAT);
    let cell_count: usize = document.tables().map(|table| table.cell_count()).sum();

    let mut out = String::with_capacity(1024);
    out.push_str(XML_HEADER);
    write!(
        out,
        concat!(
            r#"<office:document-meta xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0""#,
            r#" xmlns:meta="urn:oasis:names:tc:opendocument:xmlns:meta:1.0""#,
            r#" xmlns:dc="http://purl.org/dc/elements/1.1/" office:version="{}">"#
        ),
        ODF_VERSION
    )?;
    out.push_str("<office:meta>");
    util.append_tag(&mut out, "meta:generator", generator)?;
    write!(out, "<meta:creation-date>{date}</meta:creation-date>")?;
    write!(out, "<dc:date>{date}</dc:date>")?;
    out.push_str("<meta:document-statistic");
    util.append_attribute(&mut out, "meta:table-count", document.table_count())?;
    util.append_attribute(&mut out, "meta:cell-count", cell_count)?;
    out.push_str("/></office:meta></office:document-meta>");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_lists_parts() {
        let xml = manifest_xml().unwrap();
        assert!(xml.contains(r#"manifest:full-path="/" manifest:version="1.2" manifest:media-type="application/vnd.oasis.opendocument.spreadsheet""#));
        for part in ["content.xml", "styles.xml", "meta.xml", "settings.xml"] {
            assert!(xml.contains(&format!(r#"manifest:full-path="{part}""#)), "{part}");
        }
        assert!(!xml.contains("manifest.xml\""));
    }

    #[test]
    fn test_meta() {
        let mut doc = Document::new();
        let table = doc.add_table("t").unwrap();
        table.set_cell(0, 0, 1).unwrap();
        table.set_cell(3, 3, true).unwrap();
        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|d| d.and_hms_opt(3, 4, 5))
            .unwrap();
        let xml = meta_xml(&doc, "gen <1>", date, &mut XmlUtil::default()).unwrap();
        assert!(xml.contains("<meta:generator>gen &lt;1&gt;</meta:generator>"));
        assert!(xml.contains("<meta:creation-date>2024-01-02T03:04:05</meta:creation-date>"));
        assert!(xml.contains(r#"<meta:document-statistic meta:table-count="1" meta:cell-count="2"/>"#));
    }
}
