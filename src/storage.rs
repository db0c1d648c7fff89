use crate::figure::Figure;
use crate::models::{IndexValue, Table};
use anyhow::{Context, Result, anyhow, bail};
use csv::ReaderBuilder;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

/// Cells read as gaps rather than rejected.
const MISSING: [&str; 5] = ["", "nan", "na", "n/a", "null"];

/// Load a table from a `.csv` or `.json` file.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => read_csv(path),
        "json" => read_json(path),
        other => bail!("unsupported input format: `{}` (expected csv or json)", other),
    }
}

/// Read a CSV file with a header row. The first column is the index; the
/// others must be numeric or empty.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_csv_from(file).with_context(|| format!("reading {}", path.display()))
}

/// Same as [`read_csv`] for any reader.
pub fn read_csv_from<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        bail!("CSV has no header row");
    }
    let names: Vec<String> = headers.iter().skip(1).map(|h| h.trim().to_string()).collect();

    let mut index = Vec::new();
    let mut rows = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let mut fields = record.iter();
        let key = fields
            .next()
            .ok_or_else(|| anyhow!("row {} is empty", line + 1))?;
        index.push(IndexValue::parse(key));
        let cells = fields
            .zip(&names)
            .map(|(cell, name)| parse_cell(cell).ok_or_else(|| {
                anyhow!("row {}: value `{}` in column `{}` is not numeric", line + 1, cell, name)
            }))
            .collect::<Result<Vec<_>>>()?;
        rows.push(cells);
    }

    let table = Table::from_rows(rows, &names)?.with_index(index)?;
    log::debug!(
        "read CSV table with {} columns and {} rows",
        table.columns().len(),
        table.len()
    );
    Ok(table)
}

fn parse_cell(cell: &str) -> Option<Option<f64>> {
    let cell = cell.trim();
    if MISSING.contains(&cell.to_ascii_lowercase().as_str()) {
        return Some(None);
    }
    cell.parse::<f64>().ok().map(Some)
}

/// Read a JSON file holding an object of columns or an array of records.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    Ok(Table::from_json(&value)?)
}

/// Save the Plotly figure JSON, pretty-printed.
pub fn save_figure_json<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(&figure.to_plotly_json())?;
    f.write_all(s.as_bytes())?;
    log::info!("wrote figure JSON to {}", path.display());
    Ok(())
}
