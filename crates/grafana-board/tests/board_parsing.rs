//! Integration tests for decoding and re-encoding real dashboard documents.
//!
//! One fixture uses the legacy rows layout of Grafana 2.x, the other the flat
//! panel list of Grafana 7.x with row pseudo-panels and plugin panels.

use grafana_board::panel::{Axis, PanelKind};
use grafana_board::scalar::{BoolString, FloatString};
use grafana_board::templating::TEMPLATING_HIDE_VARIABLE;
use grafana_board::{Board, DatasourceRef, Panel};
use grafana_core::Error;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

fn load_board(name: &str) -> Board {
    let json_data = load_fixture(name);
    Board::from_slice(json_data.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to decode {name}: {e}"))
}

fn load_value(name: &str) -> Value {
    serde_json::from_str(&load_fixture(name)).unwrap()
}

const ROWS_FIXTURE: &str = "dashboard_rows_2x.json";
const FLAT_FIXTURE: &str = "dashboard_flat_7x.json";

/// A flat board whose first panel opens a chain of `depth` collapsed rows
/// ending in `leaf`. Row ids count up from 1.
fn nested_rows(depth: usize, leaf: Value) -> Value {
    let mut panel = leaf;
    for level in (1..=depth).rev() {
        panel = json!({"id": level, "type": "row", "collapsed": true, "panels": [panel]});
    }
    json!({"title": "Deep", "panels": [panel]})
}

#[test]
fn test_rows_board_layout() {
    let board = load_board(ROWS_FIXTURE);

    assert!(board.has_rows());
    assert!(board.panels.is_empty());
    assert_eq!(board.rows.len(), 2);
    assert_eq!(board.title, "Frontend (2.6)");
    assert_eq!(board.original_title.as_deref(), Some("Frontend"));
    assert!(board.shared_crosshair);
    assert_eq!(board.refresh.as_ref().and_then(BoolString::text), Some("5s"));
    assert!(board.extra.contains_key("nav"));

    let traffic = &board.rows[0];
    assert_eq!(traffic.title, "Traffic");
    assert!(traffic.show_title);
    let kinds: Vec<&str> = traffic.panels.iter().map(Panel::panel_type).collect();
    assert_eq!(kinds, vec!["graph", "singlestat"]);

    let notes = &board.rows[1];
    assert!(notes.collapse);
    let kinds: Vec<&str> = notes.panels.iter().map(Panel::panel_type).collect();
    assert_eq!(kinds, vec!["text", "table", "dashlist"]);
    assert_eq!(board.max_panel_id(), 5);
}

#[test]
fn test_rows_board_graph_panel() {
    let board = load_board(ROWS_FIXTURE);
    let panel = &board.rows[0].panels[0];

    assert!(panel.common.datasource.as_ref().is_some_and(DatasourceRef::is_mixed));
    assert_eq!(panel.common.span, Some(8.0));
    let PanelKind::Graph(graph) = &panel.kind else {
        panic!("expected a graph panel, got {:?}", panel.kind);
    };
    assert_eq!(graph.y_formats, vec!["short", "short"]);
    assert_eq!(graph.left_y_axis_label.as_deref(), Some("req/s"));
    assert!(graph.x_axis && graph.y_axis);
    assert_eq!(
        graph.series_overrides[0].stack,
        Some(BoolString::Text("A".to_string()))
    );
    assert_eq!(
        graph.series_overrides[1].stack,
        Some(BoolString::Flag(false))
    );
    assert_eq!(
        graph.series_overrides[1].extra.get("linewidth"),
        Some(&json!(3))
    );
    assert!(panel.extra.contains_key("grid"));

    let targets = panel.targets().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].target.as_deref(), Some("sumSeries(nginx.*.requests)"));
    assert_eq!(targets[1].datasource, Some(DatasourceRef::from("elastic")));
    let aggs = targets[1].extension("bucketAggs").unwrap();
    assert_eq!(aggs[0]["type"], json!("date_histogram"));
    assert_eq!(aggs[0]["settings"]["min_doc_count"], json!(0));
}

#[test]
fn test_rows_board_legacy_templating() {
    let board = load_board(ROWS_FIXTURE);
    let var = &board.templating.list[0];

    assert_eq!(var.name, "host");
    assert!(var.refresh.flag());
    assert_eq!(var.all_format.as_deref(), Some("glob"));
    assert_eq!(var.current.text.as_slice(), ["web01".to_string()]);
    assert!(var.extra.contains_key("refresh_on_load"));

    let annotation = &board.annotations.list[0];
    assert_eq!(annotation.icon_size, Some(13));
    assert_eq!(annotation.extra.get("target"), Some(&json!("events.deploy")));
}

#[test]
fn test_flat_board_layout() {
    let board = load_board(FLAT_FIXTURE);

    assert!(!board.has_rows());
    assert_eq!(board.uid.as_deref(), Some("http-overview"));
    assert_eq!(board.graph_tooltip, Some(1));
    assert_eq!(board.refresh, Some(BoolString::Flag(false)));
    assert_eq!(board.extra.get("gnetId"), Some(&Value::Null));

    let kinds: Vec<&str> = board.panels.iter().map(Panel::panel_type).collect();
    assert_eq!(kinds, vec!["row", "graph", "stat", "row"]);

    let PanelKind::Row(details) = &board.panels[3].kind else {
        panic!("expected a row pseudo-panel");
    };
    assert!(details.collapsed);
    let nested: Vec<&str> = details.panels.iter().map(Panel::panel_type).collect();
    assert_eq!(nested, vec!["table", "alertlist", "pluginlist", "text"]);
    assert_eq!(board.max_panel_id(), 11);
}

#[test]
fn test_flat_board_graph_axes() {
    let board = load_board(FLAT_FIXTURE);
    let panel = &board.panels[1];

    assert_eq!(
        panel.common.datasource.as_ref().and_then(DatasourceRef::uid),
        Some("P1809F7CD0C75ACF3")
    );
    let PanelKind::Graph(graph) = &panel.kind else {
        panic!("expected a graph panel");
    };
    assert_eq!(graph.yaxes.len(), 2);
    let (left, right): (&Axis, &Axis) = (&graph.yaxes[0], &graph.yaxes[1]);
    assert_eq!(left.min.as_ref().and_then(FloatString::value), Some(0.0));
    assert!(left.max.is_none());
    assert_eq!(right.max.as_ref().and_then(FloatString::value), Some(100.0));
    assert!(!right.show);
    assert_eq!(graph.xaxis.as_ref().map(|x| x.mode.as_str()), Some("time"));

    let targets = panel.targets().unwrap();
    assert_eq!(targets[0].legend_format.as_deref(), Some("{{job}}"));
    assert_eq!(targets[0].extension("exemplar"), Some(&json!(true)));
    assert_eq!(targets[1].hide, Some(true));
}

#[test]
fn test_flat_board_plugin_panel() {
    let raw = load_value(FLAT_FIXTURE);
    let board = load_board(FLAT_FIXTURE);
    let panel = &board.panels[2];

    assert!(panel.is_custom());
    assert_eq!(panel.panel_type(), "stat");
    assert_eq!(panel.common.id, 4);
    assert_eq!(panel.extension("fieldConfig"), raw["panels"][2].get("fieldConfig"));
    assert_eq!(panel.extension("targets"), raw["panels"][2].get("targets"));
}

#[test]
fn test_flat_board_templating() {
    let board = load_board(FLAT_FIXTURE);
    let job = &board.templating.list[0];

    assert_eq!(job.refresh.int(), Some(1));
    assert_eq!(job.current.text.as_slice(), ["api".to_string(), "web".to_string()]);
    assert_eq!(job.query["query"], json!("label_values(up, job)"));
    assert_eq!(job.datasource, Some(DatasourceRef::with_uid("prometheus", "P1809F7CD0C75ACF3")));

    let ds = &board.templating.list[1];
    assert_eq!(ds.hide, TEMPLATING_HIDE_VARIABLE);
    assert_eq!(ds.query, json!("prometheus"));
}

#[test]
fn test_round_trip_is_idempotent() {
    for name in [ROWS_FIXTURE, FLAT_FIXTURE] {
        let first = load_board(name);
        let encoded = first.to_vec().unwrap();
        let second = Board::from_slice(&encoded).unwrap();
        assert_eq!(first, second, "{name} changed after a round trip");
        assert_eq!(second.to_vec().unwrap(), encoded, "{name} encoding is not stable");
    }
}

#[test]
fn test_unknown_keys_survive_encoding() {
    let raw = load_value(FLAT_FIXTURE);
    let encoded = load_board(FLAT_FIXTURE).to_value().unwrap();

    assert_eq!(encoded["iteration"], raw["iteration"]);
    assert_eq!(encoded["panels"][1]["fieldConfig"], raw["panels"][1]["fieldConfig"]);
    assert_eq!(encoded["panels"][1]["yaxis"], raw["panels"][1]["yaxis"]);
    assert_eq!(encoded["panels"][2], raw["panels"][2]);
    assert_eq!(
        encoded["panels"][3]["panels"][0]["targets"][0]["bucketAggs"],
        raw["panels"][3]["panels"][0]["targets"][0]["bucketAggs"]
    );
    assert_eq!(encoded["templating"]["list"][0]["definition"], raw["templating"]["list"][0]["definition"]);

    let raw = load_value(ROWS_FIXTURE);
    let encoded = load_board(ROWS_FIXTURE).to_value().unwrap();
    assert_eq!(encoded["nav"], raw["nav"]);
    assert_eq!(encoded["rows"][0]["panels"][0]["grid"], raw["rows"][0]["panels"][0]["grid"]);
    assert_eq!(
        encoded["rows"][0]["panels"][0]["targets"][1]["bucketAggs"],
        raw["rows"][0]["panels"][0]["targets"][1]["bucketAggs"]
    );
}

#[test]
fn test_layouts_stay_exclusive() {
    let flat = load_board(FLAT_FIXTURE).to_value().unwrap();
    assert!(flat.get("panels").is_some());
    assert!(flat.get("rows").is_none());

    let rows = load_board(ROWS_FIXTURE).to_value().unwrap();
    assert!(rows.get("rows").is_some());
    assert!(rows.get("panels").is_none());
}

#[test]
fn test_adding_panels_continues_numbering() {
    let mut board = load_board(FLAT_FIXTURE);
    assert_eq!(board.add_panel(Panel::text("Added")), Ok(12));

    let mut board = load_board(ROWS_FIXTURE);
    let mut row = board.row_mut(1).unwrap();
    assert_eq!(row.add(Panel::graph("Added")), Ok(6));
}

#[test]
fn test_mismatch_names_nested_field() {
    let mut raw = load_value(FLAT_FIXTURE);
    raw["panels"][1]["targets"][1]["refId"] = json!(["B"]);
    let err = Board::from_value(&raw).unwrap_err();
    match err {
        Error::FieldTypeMismatch { path, .. } => assert_eq!(path, "panels.1.targets.1.refId"),
        other => panic!("unexpected error: {other:?}"),
    }

    let mut raw = load_value(FLAT_FIXTURE);
    raw["panels"][3]["panels"][0]["targets"][0]["refId"] = json!(7);
    let err = Board::from_value(&raw).unwrap_err();
    assert!(matches!(
        err,
        Error::FieldTypeMismatch { ref path, .. } if path == "panels.3.panels.0.targets.0.refId"
    ));

    let mut raw = load_value(ROWS_FIXTURE);
    raw["rows"][1]["panels"][1]["sort"]["desc"] = json!("yes");
    let err = Board::from_value(&raw).unwrap_err();
    assert!(matches!(
        err,
        Error::FieldTypeMismatch { ref path, .. } if path == "rows.1.panels.1.sort"
    ));
}

#[test]
fn test_malformed_document() {
    let json_data = load_fixture(FLAT_FIXTURE);
    let truncated = &json_data.as_bytes()[..json_data.len() / 2];
    assert!(matches!(
        Board::from_slice(truncated),
        Err(Error::MalformedDocument(_))
    ));
    assert!(matches!(
        Board::from_slice(b"not json"),
        Err(Error::MalformedDocument(_))
    ));
}

#[test]
fn test_deeply_nested_rows() {
    const DEPTH: usize = 80;
    let leaf = json!({"id": 1000, "type": "text", "title": "Bottom", "content": "deep"});
    let bytes = serde_json::to_vec(&nested_rows(DEPTH, leaf)).unwrap();

    let board = Board::from_slice(&bytes).unwrap_or_else(|e| panic!("Failed to decode: {e}"));
    assert_eq!(board.max_panel_id(), 1000);

    let mut panel = &board.panels[0];
    let mut levels = 0;
    while let PanelKind::Row(row) = &panel.kind {
        levels += 1;
        panel = &row.panels[0];
    }
    assert_eq!(levels, DEPTH);
    assert_eq!(panel.common.title, "Bottom");

    let again = Board::from_slice(&board.to_vec().unwrap()).unwrap();
    assert_eq!(again, board);
}

#[test]
fn test_mismatch_deep_in_nested_rows() {
    const DEPTH: usize = 32;
    let leaf = json!({"id": 99, "type": "graph", "targets": [{"refId": "A"}, {"refId": 7}]});
    let err = Board::from_value(&nested_rows(DEPTH, leaf)).unwrap_err();

    let expected = format!("{}targets.1.refId", "panels.0.".repeat(DEPTH + 1));
    match err {
        Error::FieldTypeMismatch { path, .. } => assert_eq!(path, expected),
        other => panic!("expected a field mismatch, got {other:?}"),
    }
}
