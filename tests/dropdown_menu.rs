use tscatter::dropdown::{ALL_LABEL, build_buttons};
use tscatter::{ChartConfig, DropdownButton, Table};

#[test]
fn open_close_scenario() {
    let data = Table::from_columns([
        ("Open", vec![Some(1.0), Some(2.0), Some(3.0)]),
        ("Close", vec![Some(1.1), Some(2.1), Some(3.1)]),
    ])
    .unwrap();
    let cfg = ChartConfig::new(data);

    let expected = vec![
        DropdownButton {
            label: "All".into(),
            visible: vec![true, true],
            show_legend: false,
        },
        DropdownButton {
            label: "Open".into(),
            visible: vec![true, false],
            show_legend: false,
        },
        DropdownButton {
            label: "Close".into(),
            visible: vec![false, true],
            show_legend: false,
        },
    ];
    assert_eq!(cfg.buttons(), expected);
}

#[test]
fn n_columns_give_n_plus_one_one_hot_masks() {
    for n in 1..=12 {
        let names: Vec<String> = (0..n).map(|i| format!("c{}", i)).collect();
        let buttons = build_buttons(&names);
        assert_eq!(buttons.len(), n + 1);

        assert_eq!(buttons[0].label, ALL_LABEL);
        assert!(buttons[0].visible.iter().all(|v| *v));
        assert_eq!(buttons[0].visible.len(), n);

        for (i, b) in buttons.iter().enumerate().skip(1) {
            assert_eq!(b.label, names[i - 1]);
            assert_eq!(b.visible.len(), n);
            assert_eq!(b.visible.iter().filter(|v| **v).count(), 1);
            assert!(b.visible[i - 1]);
        }
        assert!(buttons.iter().all(|b| !b.show_legend));
    }
}

#[test]
fn duplicate_column_names_keep_positional_masks() {
    let buttons = build_buttons(&["A", "A"]);
    assert_eq!(buttons[1].visible, vec![true, false]);
    assert_eq!(buttons[2].visible, vec![false, true]);
}
