use serde_json::json;
use tscatter::{ChartConfig, Table};

fn config(dropdown: bool) -> ChartConfig {
    let data = Table::from_columns([
        ("Open", vec![Some(1.0), None]),
        ("Close", vec![Some(2.0), Some(3.0)]),
    ])
    .unwrap();
    ChartConfig::builder(data)
        .title("Stock")
        .xlabel("Date")
        .ylabel("USD")
        .legend(false)
        .dropdown(dropdown)
        .build()
        .unwrap()
}

#[test]
fn layout_carries_titles_and_legend_flag() {
    let fig = config(false).figure();
    assert_eq!(fig.layout.title, "Stock");
    assert!(!fig.layout.show_legend);
    assert!(fig.layout.menu.is_none());

    let v = fig.to_plotly_json();
    assert_eq!(v["layout"]["title"]["text"], "Stock");
    assert_eq!(v["layout"]["xaxis"]["title"]["text"], "Date");
    assert_eq!(v["layout"]["yaxis"]["title"]["text"], "USD");
    assert_eq!(v["layout"]["showlegend"], false);
    assert!(v["layout"].get("updatemenus").is_none());
}

#[test]
fn traces_are_scatter_with_null_gaps() {
    let v = config(false).figure().to_plotly_json();
    let data = v["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(
        data[0],
        json!({
            "type": "scatter",
            "name": "Open",
            "x": [0, 1],
            "y": [1.0, null],
            "mode": "lines",
        })
    );
    assert_eq!(data[1]["name"], "Close");
}

#[test]
fn dropdown_adds_update_menu() {
    let fig = config(true).figure();
    let menu = fig.layout.menu.as_ref().unwrap();
    assert_eq!(menu.active, 0);
    assert_eq!(menu.buttons.len(), 3);

    let v = fig.to_plotly_json();
    let menus = v["layout"]["updatemenus"].as_array().unwrap();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0]["active"], 0);
    assert_eq!(
        menus[0]["buttons"][2],
        json!({
            "label": "Close",
            "method": "update",
            "args": [{ "visible": [false, true], "showlegend": false }],
        })
    );
}
