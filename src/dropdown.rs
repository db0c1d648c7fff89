//! Dropdown menu that toggles which series are visible.
//!
//! The menu has one `All` entry followed by one entry per column, left to
//! right. Each entry carries a visibility mask with one flag per series:
//! `All` shows everything, a column entry shows only its own series.

use serde::{Deserialize, Serialize};

pub const ALL_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownButton {
    pub label: String,
    pub visible: Vec<bool>,
    /// Legend visibility applied when the entry is picked.
    pub show_legend: bool,
}

/// `columns.len() + 1` buttons: `All`, then one per column.
pub fn build_buttons<S: AsRef<str>>(columns: &[S]) -> Vec<DropdownButton> {
    let n = columns.len();
    log::debug!("building dropdown with {} entries", n + 1);

    let mut buttons = Vec::with_capacity(n + 1);
    buttons.push(DropdownButton {
        label: ALL_LABEL.to_string(),
        visible: vec![true; n],
        show_legend: false,
    });
    for (idx, col) in columns.iter().enumerate() {
        let mut visible = vec![false; n];
        visible[idx] = true;
        buttons.push(DropdownButton {
            label: col.as_ref().to_string(),
            visible,
            show_legend: false,
        });
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_columns_yields_only_all() {
        let buttons = build_buttons::<&str>(&[]);
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].label, ALL_LABEL);
        assert!(buttons[0].visible.is_empty());
    }
}
