mod common;

use clap::Parser;
use common::{count_files, count_lines, jpeg, MockImagery};
use std::collections::HashMap;
use std::io::Write;
use svi_collector::cli::{run, Cli};
use svi_collector::CollectorError;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("points.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn cli_args(endpoint: &str, csv: &std::path::Path, base: &std::path::Path, extra: &[&str]) -> Cli {
    let mut args = vec![
        "svi-collector".to_string(),
        "-k".to_string(),
        "KEY".to_string(),
        "--csv".to_string(),
        csv.display().to_string(),
        "-p".to_string(),
        "NYC".to_string(),
        "-b".to_string(),
        base.display().to_string(),
        "--endpoint".to_string(),
        endpoint.to_string(),
        "--quiet".to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Cli::try_parse_from(args).unwrap()
}

#[tokio::test]
async fn test_cli_run_over_csv() {
    let server = MockImagery::start(HashMap::from([(90, jpeg(20, 10, [50, 50, 50]))])).await;
    let input_dir = TempDir::new().unwrap();
    let csv = write_csv(
        &input_dir,
        "Name,Latitude,Longitude\nA,40.7128,-74.006\nB,34.0522,-118.2437\nC,41.8781,-87.6298\n",
    );
    let base = TempDir::new().unwrap();

    let cli = cli_args(&server.endpoint, &csv, base.path(), &["-s", "1", "-e", "2"]);
    run(cli).await.unwrap();

    let concate = base.path().join("street_view_concate");
    assert!(concate.join("p1_concate_34.0522_-118.2437.jpg").exists());
    assert!(concate.join("p2_concate_41.8781_-87.6298.jpg").exists());
    assert_eq!(count_files(&concate), 2);
    assert_eq!(count_lines(&base.path().join("download_log_add.csv")), 2);
    assert_eq!(count_lines(&base.path().join("download_log_fail.csv")), 6);
}

#[tokio::test]
async fn test_missing_column_aborts_before_any_output() {
    let server = MockImagery::start(HashMap::new()).await;
    let input_dir = TempDir::new().unwrap();
    let csv = write_csv(&input_dir, "lat,Longitude\n40.0,-73.0\n");
    let base = TempDir::new().unwrap();
    let output = base.path().join("out");

    let cli = cli_args(&server.endpoint, &csv, &output, &[]);
    let err = run(cli).await.unwrap_err();

    assert!(matches!(err, CollectorError::MissingColumn { ref column } if column == "Latitude"));
    assert!(!output.exists());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_custom_column_names() {
    let server = MockImagery::start(HashMap::from([(0, jpeg(8, 8, [1, 1, 1]))])).await;
    let input_dir = TempDir::new().unwrap();
    let csv = write_csv(&input_dir, "y,x\n40.0,-73.0\n");
    let base = TempDir::new().unwrap();

    let cli = cli_args(
        &server.endpoint,
        &csv,
        base.path(),
        &["--lat-column", "y", "--lon-column", "x"],
    );
    run(cli).await.unwrap();

    assert!(base
        .path()
        .join("street_view_images/p0_front_40.0_-73.0.jpg")
        .exists());
}

#[tokio::test]
async fn test_start_row_past_input_is_not_an_error() {
    let server = MockImagery::start(HashMap::new()).await;
    let input_dir = TempDir::new().unwrap();
    let csv = write_csv(&input_dir, "Latitude,Longitude\n40.0,-73.0\n");
    let base = TempDir::new().unwrap();

    let cli = cli_args(&server.endpoint, &csv, base.path(), &["-s", "10", "-e", "20"]);
    run(cli).await.unwrap();

    assert!(server.requests().is_empty());
    assert_eq!(count_lines(&base.path().join("download_log_fail.csv")), 0);
}
