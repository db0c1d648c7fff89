//! Static SVG/PNG output through plotters.
//!
//! The x-axis is the row position; tick labels show the matching index
//! entries, so dates, numbers and text indexes all render the same way.
//! Gaps split a line into separate runs.
//!
//! Text goes through plotters' `ab_glyph` path, which does not discover OS
//! fonts; a font file is registered once from `TSCATTER_FONT` or a few
//! well-known system locations.

use super::Renderer;
use crate::chart::Series;
use crate::figure::Figure;
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable naming a TTF/OTF file used for chart text.
pub const FONT_ENV: &str = "TSCATTER_FONT";

const FONT_CANDIDATES: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_READY: OnceLock<bool> = OnceLock::new();

fn ensure_font_registered() -> Result<()> {
    let ready = *FONT_READY.get_or_init(|| {
        let from_env = std::env::var_os(FONT_ENV).map(PathBuf::from);
        let candidates = from_env
            .into_iter()
            .chain(FONT_CANDIDATES.iter().map(PathBuf::from));
        for path in candidates {
            let Ok(bytes) = fs::read(&path) else {
                continue;
            };
            // registered fonts live for the rest of the process
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if plotters::style::register_font("sans-serif", FontStyle::Normal, bytes).is_ok() {
                log::debug!("registered chart font {}", path.display());
                return true;
            }
        }
        false
    });
    if ready {
        Ok(())
    } else {
        Err(anyhow!(
            "no usable font found; set {} to a .ttf file",
            FONT_ENV
        ))
    }
}

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

#[inline]
fn series_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

#[derive(Debug, Clone)]
pub struct StaticImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl StaticImage {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

impl Renderer for StaticImage {
    fn render(&self, figure: &Figure) -> Result<()> {
        if figure.series.is_empty() {
            return Err(anyhow!("no data to plot"));
        }
        let rows = figure.series.iter().map(|s| s.x.len()).max().unwrap_or(0);
        let values: Vec<f64> = figure
            .series
            .iter()
            .flat_map(|s| s.y.iter().flatten().copied())
            .filter(|v| v.is_finite())
            .collect();
        if values.is_empty() {
            return Err(anyhow!("no numeric values to plot"));
        }
        ensure_font_registered()?;
        if figure.layout.menu.is_some() {
            log::warn!("static output has no interactive dropdown; drawing all series");
        }

        let (mut min_x, mut max_x) = (0.0, rows.saturating_sub(1) as f64);
        if max_x <= min_x {
            min_x -= 1.0;
            max_x += 1.0;
        }
        let (mut min_y, mut max_y) = (
            values.iter().cloned().fold(f64::INFINITY, f64::min),
            values.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
        );
        if (max_y - min_y).abs() < f64::EPSILON {
            min_y -= 1.0;
            max_y += 1.0;
        }
        let bounds = Bounds {
            x: (min_x, max_x),
            y: (min_y, max_y),
        };

        let path_string = self.path.to_string_lossy().into_owned();
        if self.path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root =
                SVGBackend::new(path_string.as_str(), (self.width, self.height)).into_drawing_area();
            draw_chart(root, figure, bounds)?;
        } else {
            let root = BitMapBackend::new(path_string.as_str(), (self.width, self.height))
                .into_drawing_area();
            draw_chart(root, figure, bounds)?;
        }
        log::info!("wrote static chart to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    x: (f64, f64),
    y: (f64, f64),
}

/// Consecutive non-gap points of a series as `(row, value)` runs.
fn runs(series: &Series) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    for (row, value) in series.y.iter().enumerate() {
        match value {
            Some(v) if v.is_finite() => current.push((row as f64, *v)),
            _ => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, figure: &Figure, bounds: Bounds) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let layout = &figure.layout;
    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 44);
    if !layout.title.is_empty() {
        builder.caption(&layout.title, ("sans-serif", 24));
    }
    let mut chart = builder
        .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
        .map_err(|e| anyhow!("{:?}", e))?;

    // Tick labels come from the index of the first series; all share it.
    let index = &figure.series[0].x;
    let x_label_fmt = |x: &f64| {
        let pos = x.round();
        if (x - pos).abs() < 1e-6 && pos >= 0.0 && (pos as usize) < index.len() {
            index[pos as usize].to_string()
        } else {
            String::new()
        }
    };
    let x_label_count = index.len().clamp(2, 10);

    chart
        .configure_mesh()
        .x_desc(layout.xlabel.as_str())
        .y_desc(layout.ylabel.as_str())
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (idx, series) in figure.series.iter().enumerate() {
        let color = series_color(idx);
        let mut labelled = false;
        for run in runs(series) {
            let anno = if series.mode.draws_lines() {
                let style = ShapeStyle {
                    color,
                    filled: false,
                    stroke_width: 2,
                };
                if series.mode.draws_markers() {
                    chart
                        .draw_series(run.iter().map(|&p| Circle::new(p, 3, color.filled())))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
                chart
                    .draw_series(LineSeries::new(run, style))
                    .map_err(|e| anyhow!("{:?}", e))?
            } else {
                chart
                    .draw_series(run.into_iter().map(|p| Circle::new(p, 3, color.filled())))
                    .map_err(|e| anyhow!("{:?}", e))?
            };
            if !labelled {
                anno.label(series.name.as_str())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color));
                labelled = true;
            }
        }
    }

    if layout.show_legend {
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
