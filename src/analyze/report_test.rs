use super::*;
use crate::analyze::analyze_content;
use std::path::PathBuf;

#[test]
fn labels_are_title_cased() {
    assert_eq!(label("loc"), "Loc");
    assert_eq!(label("unique_tables"), "Unique Tables");
    assert_eq!(label("updates_deletes"), "Updates Deletes");
}

#[test]
fn rows_follow_fixed_order() {
    let m = Metrics {
        loc: 1,
        joins: 2,
        unique_tables: 3,
        virtual_tables: 4,
        updates_deletes: 5,
    };
    let rows = metric_rows(&m);
    let names: Vec<&str> = rows.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        ["Loc", "Joins", "Unique Tables", "Virtual Tables", "Updates Deletes"]
    );
    assert_eq!(rows.map(|(_, v)| v), [1, 2, 3, 4, 5]);
}

#[test]
fn print_report_does_not_panic() {
    let analysis = analyze_content("SELECT * FROM a JOIN b ON a.id = b.id;");
    print_report(&PathBuf::from("query.sql"), &analysis);
}

#[test]
fn json_output_carries_all_metric_keys() {
    let analysis = analyze_content("UPDATE t SET x = 1;");
    let value = serde_json::to_value(&analysis).unwrap();

    assert!(value["complexity_score"].is_number());
    let metrics = value["metrics"].as_object().unwrap();
    for key in ["loc", "joins", "unique_tables", "virtual_tables", "updates_deletes"] {
        assert!(metrics.contains_key(key), "missing {key}");
    }
}

#[test]
fn print_json_works() {
    let analysis = analyze_content("");
    print_json(&analysis).unwrap();
}
