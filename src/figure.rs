//! The declarative chart handed to a renderer.

use crate::chart::Series;
use crate::config::ChartConfig;
use crate::dropdown::DropdownButton;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    /// Entry selected when the chart first opens.
    pub active: usize,
    pub buttons: Vec<DropdownButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    pub show_legend: bool,
    /// Present only when the dropdown is enabled.
    pub menu: Option<UpdateMenu>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub series: Vec<Series>,
    pub layout: Layout,
}

impl Figure {
    pub fn assemble(cfg: &ChartConfig) -> Self {
        let menu = cfg.dropdown().then(|| UpdateMenu {
            active: 0,
            buttons: cfg.buttons(),
        });
        Self {
            series: cfg.series(),
            layout: Layout {
                title: cfg.title().to_string(),
                xlabel: cfg.xlabel().to_string(),
                ylabel: cfg.ylabel().to_string(),
                show_legend: cfg.legend(),
                menu,
            },
        }
    }

    /// Plotly figure JSON (`{"data": [...], "layout": {...}}`).
    pub fn to_plotly_json(&self) -> Value {
        let data: Vec<Value> = self
            .series
            .iter()
            .map(|s| {
                json!({
                    "type": "scatter",
                    "name": s.name,
                    "x": s.x,
                    "y": s.y,
                    "mode": s.mode.as_str(),
                })
            })
            .collect();

        let mut layout = json!({
            "title": { "text": self.layout.title },
            "xaxis": { "title": { "text": self.layout.xlabel } },
            "yaxis": { "title": { "text": self.layout.ylabel } },
            "showlegend": self.layout.show_legend,
        });
        if let Some(menu) = &self.layout.menu {
            let buttons: Vec<Value> = menu
                .buttons
                .iter()
                .map(|b| {
                    json!({
                        "label": b.label,
                        "method": "update",
                        "args": [{ "visible": b.visible, "showlegend": b.show_legend }],
                    })
                })
                .collect();
            layout["updatemenus"] = json!([{ "active": menu.active, "buttons": buttons }]);
        }

        json!({ "data": data, "layout": layout })
    }
}
