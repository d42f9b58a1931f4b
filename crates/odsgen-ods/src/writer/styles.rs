//! styles.xml

use std::fmt::Write;

use odsgen_core::XmlUtil;

use super::{DOCUMENT_NAMESPACES, ODF_VERSION, XML_HEADER};
use crate::document::Document;
use crate::error::OdsResult;
use crate::style::StyleDestination;

const PAGE_LAYOUT: &str = "pm1";
const MASTER_PAGE: &str = "Default";

pub(crate) fn styles_xml(document: &Document, util: &mut XmlUtil) -> OdsResult<String> {
    let styles = document.styles();
    let mut out = String::with_capacity(4 * 1024);
    out.push_str(XML_HEADER);
    write!(
        out,
        r#"<office:document-styles{DOCUMENT_NAMESPACES} office:version="{ODF_VERSION}">"#
    )?;

    out.push_str("<office:styles>");
    styles.append_styles(StyleDestination::StylesCommonStyles, util, &mut out)?;
    out.push_str("</office:styles>");

    out.push_str("<office:automatic-styles>");
    write!(out, r#"<style:page-layout style:name="{PAGE_LAYOUT}"/>"#)?;
    styles.append_styles(StyleDestination::StylesAutomaticStyles, util, &mut out)?;
    out.push_str("</office:automatic-styles>");

    write!(
        out,
        r#"<office:master-styles><style:master-page style:name="{MASTER_PAGE}" style:page-layout-name="{PAGE_LAYOUT}"/></office:master-styles>"#
    )?;
    out.push_str("</office:document-styles>");
    Ok(out)
}
