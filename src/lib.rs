//! tscatter
//!
//! A small Rust library for turning tabular time series into Plotly scatter
//! charts. Pairs with the `tscatter` CLI.
//!
//! ### Features
//! - Checked chart settings (title, axis labels, legend, line mode, dropdown)
//! - Explicit adapters from columns, records or row arrays into a [`Table`]
//! - One series per column, with an optional dropdown showing one series at a time
//! - Output as Plotly JSON, a standalone HTML page, or a static SVG/PNG
//!
//! ### Example
//! ```no_run
//! use tscatter::{ChartConfig, Table};
//! use tscatter::render::HtmlFile;
//!
//! let data = Table::from_columns([
//!     ("Open", vec![Some(1.0), Some(2.0), Some(3.0)]),
//!     ("Close", vec![Some(1.5), None, Some(2.5)]),
//! ])?;
//! let mut chart = ChartConfig::builder(data)
//!     .title("Prices")
//!     .mode("lines+markers")
//!     .build()?;
//! chart.set_dropdown(true)?;
//! chart.show(&HtmlFile::new("prices.html"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod figure;
pub mod models;
pub mod render;
pub mod storage;
pub mod validate;

pub use chart::Series;
pub use config::{ChartConfig, Settings};
pub use dropdown::DropdownButton;
pub use error::{DataError, ValidationError};
pub use figure::Figure;
pub use models::{IndexValue, Mode, Table};
