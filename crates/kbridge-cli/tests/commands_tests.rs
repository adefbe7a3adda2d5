//! Command handler tests

use kbridge_cli::cli::Commands;
use kbridge_cli::commands::{build_analyzer, run, run_analyze, run_demo};
use kbridge_cli::config::CliConfig;
use kbridge_sdk::ReportFormat;
use std::path::PathBuf;

const DATASET: &str = r#"{
  "products": [
    {
      "product": "essence",
      "category": "skincare",
      "korea": [
        {"period": 1, "sales": 1000.0, "rank": 10},
        {"period": 2, "sales": 2000.0, "rank": 6},
        {"period": 3, "sales": 1500.0, "rank": 8},
        {"period": 4, "sales": 3000.0, "rank": 2}
      ],
      "japan": [
        {"period": 1, "sales": 500.0, "rank": 12},
        {"period": 2, "sales": 1000.0, "rank": 9},
        {"period": 3, "sales": 750.0, "rank": 10},
        {"period": 4, "sales": 1500.0, "rank": 4}
      ]
    }
  ]
}"#;

#[test]
fn test_analyze_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.json");
    std::fs::write(&path, DATASET).unwrap();

    let analyzer = build_analyzer(None).unwrap();
    let output = run_analyze(&analyzer, &path, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["reports"][0]["product"], "essence");
    assert_eq!(value["reports"][0]["time_series_analysis"]["optimal_lag"], 0);
    assert_eq!(value["summary"]["high"], 1);
}

#[test]
fn test_analyze_missing_file_names_path() {
    let analyzer = build_analyzer(None).unwrap();
    let err = run_analyze(&analyzer, &PathBuf::from("nope.yaml"), ReportFormat::Text).unwrap_err();
    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn test_demo_is_reproducible() {
    let analyzer = build_analyzer(None).unwrap();
    let a = run_demo(&analyzer, 3, 10, 9, ReportFormat::Yaml).unwrap();
    let b = run_demo(&analyzer, 3, 10, 9, ReportFormat::Yaml).unwrap();
    assert_eq!(a, b);

    let parsed: serde_yaml::Value = serde_yaml::from_str(&a).unwrap();
    assert_eq!(parsed["reports"].as_sequence().map(Vec::len), Some(3));
}

#[test]
fn test_score_command_uses_configured_weights() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer_config = dir.path().join("analyzer.yaml");
    std::fs::write(
        &analyzer_config,
        "weights:\n  rank: 0.0\n  time_series: 1.0\n  category: 0.0\n",
    )
    .unwrap();

    let command = Commands::Score {
        rank: 0.1,
        time: 0.65,
        category: 0.1,
        format: Some(ReportFormat::Json),
        config: Some(analyzer_config),
    };
    let output = run(&command, &CliConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!((value["score"].as_f64().unwrap() - 0.65).abs() < 1e-12);
    assert_eq!(value["confidenceTier"], "high");
    assert_eq!(value["recommendation"], "test market first");
}

#[test]
fn test_score_command_default_format() {
    let command = Commands::Score {
        rank: 0.2,
        time: 0.1,
        category: 0.5,
        format: None,
        config: None,
    };
    let output = run(&command, &CliConfig::default()).unwrap();
    assert!(output.contains("Hit score: 0.210"));
    assert!(output.contains("do not launch at this time"));
}

#[test]
fn test_score_command_rejects_non_finite_input() {
    let command = Commands::Score {
        rank: f64::NAN,
        time: 0.7,
        category: 0.9,
        format: Some(ReportFormat::Json),
        config: None,
    };
    let err = run(&command, &CliConfig::default()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("composite_score"));
    assert!(msg.contains("rank"));
    assert!(msg.contains("NaN"));
}

#[test]
fn test_score_command_rejects_out_of_range_category() {
    let command = Commands::Score {
        rank: 0.8,
        time: 0.7,
        category: 5.0,
        format: Some(ReportFormat::Json),
        config: None,
    };
    let err = run(&command, &CliConfig::default()).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("composite_score"));
    assert!(msg.contains("category"));
}
