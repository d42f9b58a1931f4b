//! content.xml

use std::collections::BTreeMap;
use std::fmt::Write;

use odsgen_core::XmlUtil;

use super::{DOCUMENT_NAMESPACES, ODF_VERSION, XML_HEADER};
use crate::document::Document;
use crate::error::OdsResult;
use crate::style::StyleDestination;
use crate::table::{Cell, Table};
use crate::value::{CellValue, XsdDouble};

const EMPTY_CELL: &Cell = &Cell {
    value: CellValue::Empty,
    style_name: None,
};

pub(crate) fn content_xml(document: &Document, util: &mut XmlUtil) -> OdsResult<String> {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str(XML_HEADER);
    write!(
        out,
        r#"<office:document-content{DOCUMENT_NAMESPACES} office:version="{ODF_VERSION}">"#
    )?;
    out.push_str("<office:scripts/><office:automatic-styles>");
    document
        .styles()
        .append_styles(StyleDestination::ContentAutomaticStyles, util, &mut out)?;
    out.push_str("</office:automatic-styles><office:body><office:spreadsheet>");
    for table in document.tables() {
        write_table(table, util, &mut out)?;
    }
    out.push_str("</office:spreadsheet></office:body></office:document-content>");
    Ok(out)
}

fn write_table(table: &Table, util: &mut XmlUtil, out: &mut String) -> OdsResult<()> {
    out.push_str("<table:table");
    util.append_e_attribute(out, "table:name", table.name())?;
    if let Some(style) = table.style_name() {
        util.append_e_attribute(out, "table:style-name", style)?;
    }
    out.push('>');

    let columns = table.column_count().max(1);
    out.push_str("<table:table-column");
    if columns > 1 {
        util.append_attribute(out, "table:number-columns-repeated", columns)?;
    }
    out.push_str("/>");

    if table.row_count() == 0 {
        out.push_str("<table:table-row><table:table-cell/></table:table-row>");
    }
    let mut next_row = 0;
    for (row, cells) in table.rows() {
        if row > next_row {
            write_empty_rows(row - next_row, util, out)?;
        }
        write_row(cells, util, out)?;
        next_row = row + 1;
    }
    out.push_str("</table:table>");
    Ok(())
}

fn write_empty_rows(repeated: u32, util: &mut XmlUtil, out: &mut String) -> OdsResult<()> {
    out.push_str("<table:table-row");
    if repeated > 1 {
        util.append_attribute(out, "table:number-rows-repeated", repeated)?;
    }
    out.push_str("><table:table-cell/></table:table-row>");
    Ok(())
}

/// Write a row; gaps and runs of identical empty cells become one repeated cell
fn write_row(
    cells: &BTreeMap<u32, Cell>,
    util: &mut XmlUtil,
    out: &mut String,
) -> OdsResult<()> {
    out.push_str("<table:table-row>");
    if cells.is_empty() {
        out.push_str("<table:table-cell/>");
    }
    let mut run: Option<(&Cell, u32)> = None;
    let mut next_col = 0;
    for (&col, cell) in cells {
        if col > next_col {
            push_empty(&mut run, EMPTY_CELL, col - next_col, util, out)?;
        }
        if cell.value.is_empty() {
            push_empty(&mut run, cell, 1, util, out)?;
        } else {
            flush_empty(&mut run, util, out)?;
            write_cell(cell, 1, util, out)?;
        }
        next_col = col + 1;
    }
    flush_empty(&mut run, util, out)?;
    out.push_str("</table:table-row>");
    Ok(())
}

fn push_empty<'a>(
    run: &mut Option<(&'a Cell, u32)>,
    cell: &'a Cell,
    count: u32,
    util: &mut XmlUtil,
    out: &mut String,
) -> OdsResult<()> {
    if let Some((pending, repeated)) = run.as_mut() {
        if *pending == cell {
            *repeated += count;
            return Ok(());
        }
    }
    flush_empty(run, util, out)?;
    *run = Some((cell, count));
    Ok(())
}

fn flush_empty(
    run: &mut Option<(&Cell, u32)>,
    util: &mut XmlUtil,
    out: &mut String,
) -> OdsResult<()> {
    match run.take() {
        Some((cell, repeated)) => write_cell(cell, repeated, util, out),
        None => Ok(()),
    }
}

fn write_cell(cell: &Cell, repeated: u32, util: &mut XmlUtil, out: &mut String) -> OdsResult<()> {
    out.push_str("<table:table-cell");
    if let Some(style) = &cell.style_name {
        util.append_e_attribute(out, "table:style-name", style)?;
    }
    if repeated > 1 {
        util.append_attribute(out, "table:number-columns-repeated", repeated)?;
    }
    let Some(value_type) = cell.value.value_type() else {
        out.push_str("/>");
        return Ok(());
    };
    util.append_attribute(out, "office:value-type", value_type)?;
    match &cell.value {
        CellValue::Float(n) => util.append_attribute(out, "office:value", XsdDouble(*n))?,
        CellValue::Boolean(b) => util.append_attribute(out, "office:boolean-value", b)?,
        CellValue::String(_) | CellValue::Empty => {}
    }
    out.push_str("><text:p>");
    util.append_content(out, &cell.value.to_string())?;
    out.push_str("</text:p></table:table-cell>");
    Ok(())
}
