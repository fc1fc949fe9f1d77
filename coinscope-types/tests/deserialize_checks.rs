use coinscope_types::{AlignedTable, CorrelationMatrix, Series};

#[test]
fn series_from_json_is_sorted_by_timestamp() {
    let json = r#"{
        "asset": "bitcoin",
        "observations": [
            {"ts": "1970-01-01T00:02:00Z", "price": 3.0, "market_cap": null, "change_24h": null},
            {"ts": "1970-01-01T00:00:00Z", "price": 1.0, "market_cap": null, "change_24h": null},
            {"ts": "1970-01-01T00:01:00Z", "price": 2.0, "market_cap": null, "change_24h": null}
        ]
    }"#;
    let series: Series = serde_json::from_str(json).unwrap();
    assert_eq!(series.prices(), vec![1.0, 2.0, 3.0]);
    let secs: Vec<i64> = series.timestamps().iter().map(|t| t.timestamp()).collect();
    assert_eq!(secs, vec![0, 60, 120]);
}

#[test]
fn series_from_json_rejects_blank_asset() {
    let json = r#"{"asset": "  ", "observations": []}"#;
    assert!(serde_json::from_str::<Series>(json).is_err());
}

#[test]
fn matrix_from_json_checks_value_count() {
    let short = r#"{"assets": ["a", "b"], "values": []}"#;
    let err = serde_json::from_str::<CorrelationMatrix>(short).unwrap_err();
    assert!(err.to_string().contains("needs 4 values"), "{err}");

    let ok = r#"{"assets": ["a"], "values": ["Undefined"]}"#;
    let m: CorrelationMatrix = serde_json::from_str(ok).unwrap();
    assert!(m.get("a", "a").unwrap().is_undefined());
}

#[test]
fn table_from_json_rejects_ragged_rows() {
    let ragged = r#"{
        "step": {"secs": 60, "nanos": 0},
        "assets": ["a", "b"],
        "rows": [
            {"ts": "1970-01-01T00:00:00Z", "cells": [{"price": 1.0, "stale": false}, {"price": 2.0, "stale": false}]},
            {"ts": "1970-01-01T00:01:00Z", "cells": [{"price": 1.0, "stale": false}]}
        ]
    }"#;
    let err = serde_json::from_str::<AlignedTable>(ragged).unwrap_err();
    assert!(err.to_string().contains("expected 2"), "{err}");
}

#[test]
fn table_serde_keeps_valid_tables() {
    let json = r#"{
        "step": {"secs": 60, "nanos": 0},
        "assets": ["a", "b"],
        "rows": [
            {"ts": "1970-01-01T00:00:00Z", "cells": [{"price": 1.0, "stale": false}, {"price": 2.0, "stale": true}]}
        ]
    }"#;
    let table: AlignedTable = serde_json::from_str(json).unwrap();
    assert_eq!(table.prices("b").unwrap(), vec![2.0]);
    assert_eq!(table.stale_count("b").unwrap(), 1);
    let again: AlignedTable =
        serde_json::from_str(&serde_json::to_string(&table).unwrap()).unwrap();
    assert_eq!(again, table);
}
