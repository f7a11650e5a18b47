//! End-to-end tests for the merge pipeline.

use std::fs;
use std::path::Path;

use billmerge_cli::error::SelectionError;
use billmerge_cli::pipeline::{MergeRequest, run_pipeline};
use billmerge_ingest::IngestError;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

fn exports() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "a_accounts.csv",
        "CustomerNumber,LocationNumber,CustomerFriendlyName,Addr1,BillingAddress2,\
         LocationStreetNumber,LocationStreetName,LocationStreetDesignation,BillingCity\n\
         C1,L1,Acme,1 Elm St,,100,Main,St,Springfield\n\
         C2,L2,,2 Oak Ave,PO Box 5,100,Main,St,Shelbyville\n",
    );
    write(
        dir.path(),
        "b_accounts.csv",
        "\u{feff}customernumber,locationnumber,customerfriendlyname,Addr1\n\
         C1,L1,,9 Pine Rd\n",
    );
    dir
}

#[test]
fn merges_exports_into_fixed_layout() {
    let input = exports();
    let out = TempDir::new().expect("temp dir");
    let output = out.path().join("merged.csv");

    let request = MergeRequest::select(Some(input.path()), Some(output.as_path()), false)
        .expect("paths selected");
    let result = run_pipeline(&request).expect("merge runs");

    assert_eq!(result.files.len(), 2);
    assert_eq!(result.stats.input_records, 3);
    assert_eq!(result.stats.secondary_filled, 1);
    assert_eq!(result.stats.duplicates_emitted, 1);
    assert_eq!(result.stats.names_backfilled, 1);
    assert_eq!(result.stats.output_records, 4);

    let written = fs::read_to_string(&output).expect("read output");
    insta::assert_snapshot!(written.trim_end(), @r"
    CUSTOMERNUMBER,CUSTOMERFRIENDLYNAME,BILLINGADDRESS1,BILLINGADDRESS2,BILLINGCITY,BILLINGSTATE,BILLINGZIP,LOCATIONNUMBER,CUSTOMERON,PREVIOUSLOCATION,CUSTOMERPREVIOUSOFF,CUSTOMERIDINFO,CUSTOMERIDOWNER,CUSTOMERREFUSEEXEMPT
    C1,Acme,1 Elm St,100 Main St,Springfield,,,L1,,,,,,
    C2,,2 Oak Ave,PO Box 5,Shelbyville,,,L2,,,,,,
    C1,Acme,9 Pine Rd,,,,,L1,,,,,,
    C2,,2 Oak Ave,100 Main St,Shelbyville,,,L2,,,,,,
    ");
}

#[test]
fn missing_value_spellings_are_filled_not_duplicated() {
    let input = TempDir::new().expect("temp dir");
    write(
        input.path(),
        "a.csv",
        "CUSTOMERNUMBER,CUSTOMERFRIENDLYNAME,BILLINGADDRESS2,LOCATIONSTREETNUMBER,LOCATIONSTREETNAME\n\
         C1,N/A,NA,100,Main\n",
    );
    let out = TempDir::new().expect("temp dir");
    let output = out.path().join("merged.csv");

    let request = MergeRequest::select(Some(input.path()), Some(output.as_path()), false)
        .expect("paths selected");
    let result = run_pipeline(&request).expect("merge runs");

    assert_eq!(result.stats.secondary_filled, 1);
    assert_eq!(result.stats.duplicates_emitted, 0);
    assert_eq!(result.stats.output_records, 1);

    let written = fs::read_to_string(&output).expect("read output");
    let row = written.lines().nth(1).expect("data row");
    assert!(row.starts_with("C1,,,100 Main,"), "unexpected row {row}");
}

#[test]
fn dry_run_writes_nothing_but_the_report() {
    let input = exports();
    let out = TempDir::new().expect("temp dir");
    let report = out.path().join("report.json");

    let request = MergeRequest::select(Some(input.path()), None, true)
        .expect("paths selected")
        .with_report(Some(report.clone()));
    let result = run_pipeline(&request).expect("merge runs");

    assert!(result.is_dry_run());
    let entries: Vec<_> = fs::read_dir(out.path())
        .expect("list dir")
        .map(|entry| entry.expect("entry").file_name())
        .collect();
    assert_eq!(entries, vec!["report.json"]);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report"))
            .expect("parse report");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["output"], serde_json::Value::Null);
    assert_eq!(json["stats"]["output_records"], 4);
    assert_eq!(json["files"].as_array().map(Vec::len), Some(2));
    assert!(json["started_at"].is_string());
    let resolutions = json["resolutions"].as_array().expect("resolutions");
    assert_eq!(resolutions.len(), 10);
    assert_eq!(resolutions[0]["field"], "BILLINGADDRESS1");
    assert_eq!(resolutions[0]["mode"], "match_all");
    assert_eq!(resolutions[0]["columns"][0], "ADDR1");
}

#[test]
fn missing_paths_are_rejected_before_processing() {
    let err = MergeRequest::select(None, Some(Path::new("out.csv")), false)
        .expect_err("no input");
    assert_eq!(err, SelectionError::NoInputSelected);

    let err = MergeRequest::select(Some(Path::new("exports")), None, false)
        .expect_err("no output");
    assert_eq!(err, SelectionError::NoOutputSelected);

    let request = MergeRequest::select(Some(Path::new("exports")), None, true)
        .expect("dry run needs no output");
    assert!(request.output.is_none());
}

#[test]
fn empty_directory_fails_without_output() {
    let input = TempDir::new().expect("temp dir");
    let out = TempDir::new().expect("temp dir");
    let output = out.path().join("merged.csv");

    let request = MergeRequest::select(Some(input.path()), Some(output.as_path()), false)
        .expect("paths selected");
    let err = run_pipeline(&request).expect_err("empty input");

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::EmptyInputSet { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn malformed_row_fails_without_output() {
    let input = TempDir::new().expect("temp dir");
    write(input.path(), "a.csv", "CUSTOMERNUMBER,ADDR1\nC1\n");
    let out = TempDir::new().expect("temp dir");
    let output = out.path().join("merged.csv");

    let request = MergeRequest::select(Some(input.path()), Some(output.as_path()), false)
        .expect("paths selected");
    let err = run_pipeline(&request).expect_err("malformed row");

    assert!(matches!(
        err.downcast_ref::<IngestError>(),
        Some(IngestError::MalformedRow { found: 1, .. })
    ));
    assert!(!output.exists());
}
