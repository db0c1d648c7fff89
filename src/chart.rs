use crate::models::{IndexValue, Mode, Table};
use serde::Serialize;

/// One plotted trace: a column's values against the shared index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub x: Vec<IndexValue>,
    pub y: Vec<Option<f64>>,
    pub mode: Mode,
}

/// One series per column, in column order. Values pass through untouched,
/// gaps included.
pub fn build_series(data: &Table, mode: Mode) -> Vec<Series> {
    log::debug!(
        "building {} series over {} rows ({})",
        data.columns().len(),
        data.len(),
        mode
    );
    data.columns()
        .iter()
        .map(|col| Series {
            name: col.name.clone(),
            x: data.index().to_vec(),
            y: col.values.clone(),
            mode,
        })
        .collect()
}
