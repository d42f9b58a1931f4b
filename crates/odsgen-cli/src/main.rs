//! odsgen CLI - address and document tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use odsgen::prelude::*;
use odsgen::{column_to_letters, letters_to_column};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odsgen")]
#[command(author, version, about = "OpenDocument spreadsheet address and generation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a cell address and print its canonical form
    Cell {
        /// Address like `A1`, `$B$3` or `'Sheet 1'.C4`
        address: String,

        /// Print the parsed reference as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse a range address and print its canonical form
    Range {
        /// Address like `A1:C3` or `Sheet1.$A$1:B2`
        address: String,

        /// Print the parsed reference as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert between a column index (0-based) and its letters
    Column {
        /// Index like `27` or letters like `AB`
        value: String,
    },

    /// Check, sanitize and escape a table name
    Escape {
        /// Table name
        name: String,
    },

    /// Write a sample document
    Demo {
        /// Output .ods file
        output: PathBuf,

        /// Number of tables
        #[arg(short, long, default_value = "1")]
        tables: u32,

        /// Rows per table
        #[arg(short, long, default_value = "10")]
        rows: u32,

        /// Columns per table
        #[arg(short, long, default_value = "5")]
        cols: u32,
    },

    /// Print the default settings.xml
    Settings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cell { address, json } => show_cell(&address, json),
        Commands::Range { address, json } => show_range(&address, json),
        Commands::Column { value } => convert_column(&value),
        Commands::Escape { name } => escape_name(&name),
        Commands::Demo {
            output,
            tables,
            rows,
            cols,
        } => write_demo(&output, tables, rows, cols),
        Commands::Settings => print_settings(),
    }
}

fn show_cell(address: &str, json: bool) -> Result<()> {
    let cell_ref = PositionUtil::default()
        .new_cell_ref(address)
        .with_context(|| format!("Invalid cell address '{address}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cell_ref)?);
    } else {
        println!("{cell_ref}");
        println!("  row: {} (0-based)", cell_ref.row());
        println!("  column: {} ({})", cell_ref.column(), column_to_letters(cell_ref.column()));
        print_table(cell_ref.table_ref());
    }
    Ok(())
}

fn show_range(address: &str, json: bool) -> Result<()> {
    let range_ref = PositionUtil::default()
        .new_range_ref(address)
        .with_context(|| format!("Invalid range address '{address}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&range_ref)?);
    } else {
        println!("{range_ref}");
        println!(
            "  size: {} rows x {} columns",
            range_ref.to_row().abs_diff(range_ref.from_row()) + 1,
            range_ref.to_column().abs_diff(range_ref.from_column()) + 1
        );
        print_table(range_ref.table_ref());
    }
    Ok(())
}

fn print_table(table_ref: Option<&TableRef>) {
    let Some(table_ref) = table_ref else {
        return;
    };
    if let Some(file) = table_ref.file_name() {
        println!("  file: {file}");
    }
    if let Some(table) = table_ref.table_name() {
        let absolute = if table_ref.is_absolute() { " (absolute)" } else { "" };
        println!("  table: {table}{absolute}");
    }
}

fn convert_column(value: &str) -> Result<()> {
    if let Ok(index) = value.parse::<u32>() {
        println!("{}", column_to_letters(index));
    } else {
        let index = letters_to_column(&value.to_uppercase())
            .with_context(|| format!("Invalid column '{value}'"))?;
        println!("{index}");
    }
    Ok(())
}

fn escape_name(name: &str) -> Result<()> {
    let util = TableNameUtil::new();
    match util.check_table_name(name) {
        Ok(()) => println!("{}", util.escape_table_name(name)),
        Err(err) => {
            let sanitized = util.sanitize_table_name(name);
            eprintln!("{err}");
            eprintln!("Sanitized: {sanitized}");
            println!("{}", util.escape_table_name(&sanitized));
        }
    }
    Ok(())
}

fn write_demo(output: &Path, tables: u32, rows: u32, cols: u32) -> Result<()> {
    if tables == 0 {
        bail!("A document needs at least one table");
    }

    let mut document = Document::new();
    document
        .styles_mut()
        .add_common_style(
            Style::new("Header", StyleFamily::TableCell).property("fo:font-weight", "bold"),
            Mode::Create,
        )
        .context("Failed to register styles")?;

    let util = PositionUtil::default();
    for t in 0..tables {
        let name = format!("Sheet {}", t + 1);
        let table = document
            .add_table(name.as_str())
            .with_context(|| format!("Failed to add table '{name}'"))?;
        for c in 0..cols {
            table
                .set_cell(0, c, format!("Column {}", column_to_letters(c)))
                .and_then(|()| table.set_cell_style(0, c, "Header"))
                .with_context(|| format!("Failed to write the header of '{name}'"))?;
        }
        for r in 1..=rows {
            for c in 0..cols {
                table
                    .set_cell(r, c, f64::from(r) * f64::from(c + 1))
                    .with_context(|| format!("Failed to fill '{name}'"))?;
            }
        }
        if cols > 0 && rows > 0 {
            let range = util.to_table_range_address(&name, 1, 0, rows, cols - 1);
            document
                .set_cell_at(&util.to_table_cell_address(&name, rows + 2, 0), range)
                .context("Failed to write the data range")?;
        }
    }

    document
        .save(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    eprintln!(
        "Wrote {} table(s) of {} rows x {} columns to '{}'",
        tables,
        rows,
        cols,
        output.display()
    );
    Ok(())
}

fn print_settings() -> Result<()> {
    let mut util = odsgen::XmlUtil::default();
    let xml = OdsWriter::settings_xml(&Document::new(), &mut util)
        .context("Failed to render settings.xml")?;
    println!("{xml}");
    Ok(())
}
