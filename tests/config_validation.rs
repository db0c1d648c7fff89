use serde_json::json;
use tscatter::error::Expected;
use tscatter::{ChartConfig, Mode, Settings, Table, ValidationError};

fn prices() -> Table {
    Table::from_columns([
        ("Open", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ("Close", vec![Some(1.5), Some(2.5), Some(3.5)]),
    ])
    .unwrap()
}

#[test]
fn defaults_match_documented_values() {
    let cfg = ChartConfig::new(prices());
    assert_eq!(cfg.title(), "");
    assert_eq!(cfg.xlabel(), "x");
    assert_eq!(cfg.ylabel(), "y");
    assert!(!cfg.dropdown());
    assert!(cfg.legend());
    assert_eq!(cfg.mode(), Mode::Lines);
}

#[test]
fn set_title_with_number_keeps_previous_title() {
    let mut cfg = ChartConfig::new(prices());
    cfg.set_title("Before").unwrap();

    let err = cfg.set_title(123).unwrap_err();
    assert_eq!(err.field, "title");
    assert!(err.to_string().contains("title"));
    assert_eq!(cfg.title(), "Before");
}

#[test]
fn label_setters_reject_non_strings() {
    let mut cfg = ChartConfig::new(prices());
    assert_eq!(
        cfg.set_xlabel(1.5).unwrap_err(),
        ValidationError::new("xlabel", Expected::Str)
    );
    assert_eq!(
        cfg.set_ylabel(false).unwrap_err(),
        ValidationError::new("ylabel", Expected::Str)
    );
    assert_eq!(cfg.xlabel(), "x");
    assert_eq!(cfg.ylabel(), "y");

    cfg.set_xlabel("Date").unwrap();
    cfg.set_ylabel("USD").unwrap();
    assert_eq!(cfg.xlabel(), "Date");
    assert_eq!(cfg.ylabel(), "USD");
}

#[test]
fn boolean_setters_reject_zero_and_one() {
    let mut cfg = ChartConfig::new(prices());
    assert!(cfg.set_dropdown(1).is_err());
    assert!(cfg.set_legend(0).is_err());
    assert!(cfg.set_legend("false").is_err());
    assert!(!cfg.dropdown());
    assert!(cfg.legend());

    cfg.set_dropdown(true).unwrap();
    cfg.set_legend(false).unwrap();
    assert!(cfg.dropdown());
    assert!(!cfg.legend());
}

#[test]
fn set_mode_accepts_enum_and_exact_strings() {
    let mut cfg = ChartConfig::new(prices());
    cfg.set_mode(Mode::Markers).unwrap();
    assert_eq!(cfg.mode(), Mode::Markers);

    let err = cfg.set_mode("Lines").unwrap_err();
    assert_eq!(err, ValidationError::new("mode", Expected::Mode));
    assert_eq!(cfg.mode(), Mode::Markers);

    cfg.set_mode("lines+markers").unwrap();
    assert_eq!(cfg.mode(), Mode::LinesMarkers);
}

#[test]
fn builder_accepts_lines_markers_and_rejects_uppercase() {
    let cfg = ChartConfig::builder(prices())
        .mode("lines+markers")
        .build()
        .unwrap();
    assert_eq!(cfg.mode(), Mode::LinesMarkers);

    let err = ChartConfig::builder(prices()).mode("LINES").build().unwrap_err();
    assert_eq!(err.field, "mode");
}

#[test]
fn builder_reports_first_invalid_field_in_order() {
    // xlabel is checked before legend and mode
    let err = ChartConfig::builder(prices())
        .title("ok")
        .mode("bad")
        .legend(1)
        .xlabel(7)
        .build()
        .unwrap_err();
    assert_eq!(err.field, "xlabel");

    let err = ChartConfig::builder(prices())
        .mode("bad")
        .dropdown("yes")
        .build()
        .unwrap_err();
    assert_eq!(err.field, "dropdown");
}

#[test]
fn builder_applies_all_settings() {
    let cfg = ChartConfig::builder(prices())
        .title("MSFT")
        .xlabel("Date")
        .ylabel("Price")
        .dropdown(true)
        .legend(false)
        .mode("markers")
        .build()
        .unwrap();
    assert_eq!(cfg.title(), "MSFT");
    assert_eq!(cfg.xlabel(), "Date");
    assert_eq!(cfg.ylabel(), "Price");
    assert!(cfg.dropdown());
    assert!(!cfg.legend());
    assert_eq!(cfg.mode(), Mode::Markers);
}

#[test]
fn settings_file_values_are_type_checked() {
    let settings: Settings =
        serde_json::from_value(json!({ "title": "From file", "dropdown": true })).unwrap();
    let cfg = ChartConfig::from_settings(prices(), &settings).unwrap();
    assert_eq!(cfg.title(), "From file");
    assert!(cfg.dropdown());
    assert_eq!(cfg.xlabel(), "x");

    let settings: Settings = serde_json::from_value(json!({ "legend": 1 })).unwrap();
    let err = ChartConfig::from_settings(prices(), &settings).unwrap_err();
    assert_eq!(err, ValidationError::new("legend", Expected::Bool));
}

#[test]
fn settings_file_rejects_unknown_keys() {
    let parsed: Result<Settings, _> = serde_json::from_value(json!({ "colour": "red" }));
    assert!(parsed.is_err());
}

#[test]
fn set_data_replaces_dataset() {
    let mut cfg = ChartConfig::new(prices());
    let other = Table::from_columns([("High", vec![Some(9.0)])]).unwrap();
    cfg.set_data(other.clone());
    assert_eq!(cfg.data(), &other);
    assert_eq!(cfg.data().column_names(), vec!["High"]);
}
