use super::*;
use crate::clusterer::{kmeans, KmeansConfig, Point};
use crate::init::InitStrategy;

fn scenario() -> (Vec<Point>, Report) {
    let data: Vec<Point> = vec![
        Point::new(vec![0.0, 0.0]),
        Point::new(vec![0.0, 1.0]),
        Point::new(vec![10.0, 10.0]),
        Point::new(vec![10.0, 11.0]),
    ];
    let initial = vec![data[0].clone(), data[2].clone()];
    let config = KmeansConfig::default();
    let result = kmeans(&data, initial, 2, &config).unwrap();
    let report = Report::new(&data, &result, 2, config, InitStrategy::First).unwrap();
    (data, report)
}

#[test]
fn test_text_output() {
    let (_, report) = scenario();
    let mut out = Vec::new();
    report.write(&mut out, OutputFormat::Text).unwrap();

    let text = String::from_utf8(out).unwrap();
    let expected = "# centroids\n\
                    0\t0\t0.5\n\
                    1\t10\t10.5\n\
                    # assignments\n\
                    0\t0\t0\n\
                    0\t1\t0\n\
                    10\t10\t1\n\
                    10\t11\t1\n";
    assert_eq!(text, expected);
}

#[test]
fn test_json_output() {
    let (_, report) = scenario();
    let report = report.with_source("blobs.tsv");
    let mut out = Vec::new();
    report.write(&mut out, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["source"], "blobs.tsv");
    assert_eq!(value["stats"]["point_count"], 4);
    assert_eq!(value["stats"]["iterations"], 2);
    assert_eq!(value["stats"]["termination"], "converged");
    assert_eq!(value["config"]["max_iterations"], 100);
    assert_eq!(value["centroids"][1][1], 10.5);
    assert_eq!(value["points"][3]["cluster"], 1);
    assert!(value["generator"].as_str().unwrap().starts_with("lloyd v"));
}

#[test]
fn test_stats() {
    let (data, report) = scenario();
    assert_eq!(report.stats.point_count, data.len());
    assert_eq!(report.stats.cluster_count, 2);
    assert!((report.stats.inertia - 1.0).abs() < 1e-12);
    assert!(report.source.is_none());
}
