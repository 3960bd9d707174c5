//! CLI contract tests: dataset files in, command output strings out.

use std::fs;
use sunburst::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn arcs_json_output_parses_and_covers_the_dataset() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(
        &dir,
        "visits.csv",
        "sequence,count\nhome-products,30\nhome-about,10\nsearch,20\n",
    );

    let ctx = CliContext::new(None, None).unwrap();
    let output = ctx
        .execute(&Commands::Arcs {
            input,
            focus: None,
            format: "json".to_string(),
        })
        .unwrap();

    let arcs: serde_json::Value = serde_json::from_str(&output).unwrap();
    let arcs = arcs.as_array().unwrap();
    // Header row dropped: root, home, products, about, search.
    assert_eq!(arcs.len(), 5);
    let root = &arcs[0];
    assert_eq!(root["name"], "root");
    assert_eq!(root["value"], 60.0);
    assert!(arcs.iter().any(|a| a["name"] == "products"));
}

#[test]
fn arcs_focus_path_magnifies_the_named_node() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "visits.csv", "a,1\nb,1\n");

    let ctx = CliContext::new(None, None).unwrap();
    let output = ctx
        .execute(&Commands::Arcs {
            input,
            focus: Some("a".to_string()),
            format: "json".to_string(),
        })
        .unwrap();

    let arcs: serde_json::Value = serde_json::from_str(&output).unwrap();
    let seg = arcs
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "a")
        .unwrap()
        .clone();
    let span = seg["angle_span"].as_f64().unwrap();
    let full = std::f64::consts::TAU;
    assert!((span / full - 0.8).abs() < 1e-9);
    let prev = seg["prev_angle_span"].as_f64().unwrap();
    assert!((prev / full - 0.5).abs() < 1e-9);
}

#[test]
fn arcs_unknown_focus_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "visits.csv", "a,1\n");

    let ctx = CliContext::new(None, None).unwrap();
    let err = ctx
        .execute(&Commands::Arcs {
            input,
            focus: Some("nope".to_string()),
            format: "json".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn arcs_table_output_lists_segments() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "visits.csv", "a,3\nb,1\n");

    let ctx = CliContext::new(None, None).unwrap();
    let output = ctx
        .execute(&Commands::Arcs {
            input,
            focus: None,
            format: "table".to_string(),
        })
        .unwrap();
    assert!(output.contains("name"));
    assert!(output.contains("75.0%"));
}

#[test]
fn info_reports_counts_and_total() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "visits.csv", "a-b,3\na-c,4\nheader,bad\n");

    let ctx = CliContext::new(None, None).unwrap();
    let output = ctx
        .execute(&Commands::Info {
            input: input.clone(),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("nodes:"));
    assert!(output.contains("7"));

    let output = ctx
        .execute(&Commands::Info {
            input,
            format: "json".to_string(),
        })
        .unwrap();
    let info: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(info["nodes"], 4);
    assert_eq!(info["leaves"], 2);
    assert_eq!(info["max_depth"], 2);
    assert_eq!(info["total"], 7.0);
}

#[test]
fn json_dataset_loads_the_pre_shaped_tree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("usage.json");
    fs::write(
        &path,
        r#"{"name":"/","children":[
            {"name":"usr","children":[{"name":"bin","size":30.0}]},
            {"name":"tmp","size":10.0}
        ]}"#,
    )
    .unwrap();

    let ctx = CliContext::new(None, None).unwrap();
    let output = ctx
        .execute(&Commands::Info {
            input: path,
            format: "json".to_string(),
        })
        .unwrap();
    let info: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(info["nodes"], 4);
    assert_eq!(info["total"], 40.0);
}

#[test]
fn config_file_sets_the_separator() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("sunburst.toml");
    fs::write(&config_path, "[dataset]\nseparator = \"/\"\n").unwrap();
    let input = write_csv(&dir, "visits.csv", "usr/bin,5\nusr/lib,3\n");

    let ctx = CliContext::new(Some(config_path), None).unwrap();
    let output = ctx
        .execute(&Commands::Info {
            input,
            format: "json".to_string(),
        })
        .unwrap();
    let info: serde_json::Value = serde_json::from_str(&output).unwrap();
    // usr is shared: root, usr, bin, lib.
    assert_eq!(info["nodes"], 4);
}

#[test]
fn separator_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "visits.csv", "usr/bin,5\nusr/lib,3\n");

    let ctx = CliContext::new(None, Some("/".to_string())).unwrap();
    assert_eq!(ctx.config().dataset.separator, "/");
    let output = ctx
        .execute(&Commands::Info {
            input,
            format: "json".to_string(),
        })
        .unwrap();
    let info: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(info["nodes"], 4);
}

#[test]
fn invalid_output_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_csv(&dir, "visits.csv", "a,1\n");

    let ctx = CliContext::new(None, None).unwrap();
    let err = ctx
        .execute(&Commands::Arcs {
            input,
            focus: None,
            format: "yaml".to_string(),
        })
        .unwrap_err();
    assert!(err.to_string().contains("Invalid output format"));
}
