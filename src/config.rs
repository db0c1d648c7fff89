//! The chart configuration object.
//!
//! [`ChartConfig`] owns a [`Table`] and six display settings. Settings only
//! change through checked setters, so a rejected value never replaces the
//! previous one.

use crate::chart::{self, Series};
use crate::dropdown::{self, DropdownButton};
use crate::error::ValidationError;
use crate::figure::Figure;
use crate::models::{Mode, Table};
use crate::render::Renderer;
use crate::validate::{validate_boolean, validate_mode, validate_string};
use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    data: Table,
    title: String,
    xlabel: String,
    ylabel: String,
    dropdown: bool,
    legend: bool,
    mode: Mode,
}

/// Raw, not yet validated settings as they appear in a JSON settings file.
///
/// Fields are kept as [`Value`] so that `"legend": 1` reaches the validator
/// and is rejected there instead of being silently converted. An explicit
/// `null` counts as present (and is rejected); only a missing key keeps the
/// default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default, deserialize_with = "de_present")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "de_present")]
    pub xlabel: Option<Value>,
    #[serde(default, deserialize_with = "de_present")]
    pub ylabel: Option<Value>,
    #[serde(default, deserialize_with = "de_present")]
    pub dropdown: Option<Value>,
    #[serde(default, deserialize_with = "de_present")]
    pub legend: Option<Value>,
    #[serde(default, deserialize_with = "de_present")]
    pub mode: Option<Value>,
}

/// Serde helper: keep `null` as `Some(Value::Null)` instead of `None`.
fn de_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ChartConfig {
    /// A config with default settings: empty title, axis labels `x`/`y`,
    /// no dropdown, legend shown, `lines` mode.
    pub fn new(data: impl Into<Table>) -> Self {
        Self {
            data: data.into(),
            title: String::new(),
            xlabel: "x".into(),
            ylabel: "y".into(),
            dropdown: false,
            legend: true,
            mode: Mode::Lines,
        }
    }

    pub fn builder(data: impl Into<Table>) -> ChartConfigBuilder {
        ChartConfigBuilder {
            data: data.into(),
            settings: Settings::default(),
        }
    }

    /// Apply settings in the fixed order title, xlabel, ylabel, dropdown,
    /// legend, mode. The first invalid value aborts construction.
    pub fn from_settings(
        data: impl Into<Table>,
        settings: &Settings,
    ) -> Result<Self, ValidationError> {
        let mut cfg = Self::new(data);
        cfg.apply(settings)?;
        Ok(cfg)
    }

    /// Apply every present field of `settings` through the checked setters.
    /// Fields assigned before a failing one keep their new value.
    pub fn apply(&mut self, settings: &Settings) -> Result<(), ValidationError> {
        if let Some(v) = &settings.title {
            self.set_title(v.clone())?;
        }
        if let Some(v) = &settings.xlabel {
            self.set_xlabel(v.clone())?;
        }
        if let Some(v) = &settings.ylabel {
            self.set_ylabel(v.clone())?;
        }
        if let Some(v) = &settings.dropdown {
            self.set_dropdown(v.clone())?;
        }
        if let Some(v) = &settings.legend {
            self.set_legend(v.clone())?;
        }
        if let Some(v) = &settings.mode {
            self.set_mode(v.clone())?;
        }
        Ok(())
    }

    /// Replace the dataset. Coercion happens in the [`Table`] adapters, so
    /// this cannot fail.
    pub fn set_data(&mut self, data: impl Into<Table>) {
        self.data = data.into();
    }

    pub fn set_title(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.title = validate_string(&value.into(), "title")?.to_string();
        Ok(())
    }

    pub fn set_xlabel(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.xlabel = validate_string(&value.into(), "xlabel")?.to_string();
        Ok(())
    }

    pub fn set_ylabel(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.ylabel = validate_string(&value.into(), "ylabel")?.to_string();
        Ok(())
    }

    pub fn set_dropdown(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.dropdown = validate_boolean(&value.into(), "dropdown")?;
        Ok(())
    }

    pub fn set_legend(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.legend = validate_boolean(&value.into(), "legend")?;
        Ok(())
    }

    pub fn set_mode(&mut self, value: impl Into<Value>) -> Result<(), ValidationError> {
        self.mode = validate_mode(&value.into())?;
        Ok(())
    }

    pub fn data(&self) -> &Table {
        &self.data
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    pub fn dropdown(&self) -> bool {
        self.dropdown
    }

    pub fn legend(&self) -> bool {
        self.legend
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// One series per column, derived fresh on every call.
    pub fn series(&self) -> Vec<Series> {
        chart::build_series(&self.data, self.mode)
    }

    /// Dropdown entries for the current columns, whether or not the menu is enabled.
    pub fn buttons(&self) -> Vec<DropdownButton> {
        dropdown::build_buttons(&self.data.column_names())
    }

    /// Assemble the declarative chart handed to a renderer.
    pub fn figure(&self) -> Figure {
        Figure::assemble(self)
    }

    /// Build the figure and pass it to `renderer`.
    pub fn show(&self, renderer: &dyn Renderer) -> Result<()> {
        renderer.render(&self.figure())
    }
}

/// Collects settings for [`ChartConfig::builder`]; nothing is checked until
/// [`ChartConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct ChartConfigBuilder {
    data: Table,
    settings: Settings,
}

impl ChartConfigBuilder {
    pub fn title(mut self, value: impl Into<Value>) -> Self {
        self.settings.title = Some(value.into());
        self
    }

    pub fn xlabel(mut self, value: impl Into<Value>) -> Self {
        self.settings.xlabel = Some(value.into());
        self
    }

    pub fn ylabel(mut self, value: impl Into<Value>) -> Self {
        self.settings.ylabel = Some(value.into());
        self
    }

    pub fn dropdown(mut self, value: impl Into<Value>) -> Self {
        self.settings.dropdown = Some(value.into());
        self
    }

    pub fn legend(mut self, value: impl Into<Value>) -> Self {
        self.settings.legend = Some(value.into());
        self
    }

    pub fn mode(mut self, value: impl Into<Value>) -> Self {
        self.settings.mode = Some(value.into());
        self
    }

    pub fn build(self) -> Result<ChartConfig, ValidationError> {
        ChartConfig::from_settings(self.data, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Expected;

    fn table() -> Table {
        Table::from_columns([("a", vec![Some(1.0)])]).unwrap()
    }

    #[test]
    fn apply_stops_at_first_failure_keeping_earlier_fields() {
        let mut cfg = ChartConfig::new(table());
        let settings = Settings {
            title: Some("T".into()),
            legend: Some(Value::from(0)),
            mode: Some("markers".into()),
            ..Settings::default()
        };
        let err = cfg.apply(&settings).unwrap_err();
        assert_eq!(err, ValidationError::new("legend", Expected::Bool));
        assert_eq!(cfg.title(), "T");
        assert!(cfg.legend());
        assert_eq!(cfg.mode(), Mode::Lines);
    }

    #[test]
    fn explicit_null_is_rejected() {
        let settings: Settings = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(settings.title, Some(Value::Null));
        let err = ChartConfig::from_settings(table(), &settings).unwrap_err();
        assert_eq!(err.field, "title");
    }
}
