//! Renderers consume a finished [`Figure`].
//!
//! - [`JsonFile`]: Plotly figure JSON
//! - [`HtmlFile`]: standalone page driving plotly.js, dropdown included
//! - [`StaticImage`]: SVG or PNG via plotters (no interactive menu)

pub mod static_image;

pub use static_image::StaticImage;

use crate::figure::Figure;
use crate::storage;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// plotly.js bundle referenced by generated HTML pages.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub trait Renderer {
    fn render(&self, figure: &Figure) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonFile {
    pub path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for JsonFile {
    fn render(&self, figure: &Figure) -> Result<()> {
        storage::save_figure_json(figure, &self.path)
    }
}

#[derive(Debug, Clone)]
pub struct HtmlFile {
    pub path: PathBuf,
}

impl HtmlFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Renderer for HtmlFile {
    fn render(&self, figure: &Figure) -> Result<()> {
        let page = html_page(figure)?;
        fs::write(&self.path, page)
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::info!("wrote chart page to {}", self.path.display());
        Ok(())
    }
}

/// A self-contained HTML document that plots `figure` on load.
pub fn html_page(figure: &Figure) -> Result<String> {
    // "</" inside the inline script would close the <script> element early
    let spec = serde_json::to_string(&figure.to_plotly_json())?.replace("</", "<\\/");
    let title = if figure.layout.title.is_empty() {
        "chart".to_string()
    } else {
        escape_html(&figure.layout.title)
    };
    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
</head>
<body>
<div id="chart" style="width:100%;height:95vh;"></div>
<script>
const fig = {spec};
Plotly.newPlot("chart", fig.data, fig.layout);
</script>
</body>
</html>
"#,
        title = title,
        cdn = PLOTLY_CDN,
        spec = spec,
    ))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_titles() {
        assert_eq!(escape_html(r#"<b>"A&B"</b>"#), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }
}
