//! Tests for loading a whole export directory.

use std::fs;
use std::path::Path;

use billmerge_ingest::{IngestError, load_directory};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn loads_and_concatenates_all_csv_files() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "a_export.csv",
        "CustomerNumber,Addr1\nC1,1 Elm St\nC2,2 Oak Ave\n",
    );
    write(
        dir.path(),
        "b_export.csv",
        "customernumber , LocationStreetNumber\nC3,100\n",
    );
    write(dir.path(), "readme.txt", "not a csv");

    let table = load_directory(dir.path()).expect("load directory");

    assert_eq!(table.sources.len(), 2);
    assert_eq!(
        table.columns,
        vec!["CUSTOMERNUMBER", "ADDR1", "LOCATIONSTREETNUMBER"]
    );
    assert_eq!(table.len(), 3);
    assert_eq!(table.records[2].get("CUSTOMERNUMBER"), "C3");
    assert_eq!(table.records[2].get("ADDR1"), "");
    assert_eq!(table.records[0].get("LOCATIONSTREETNUMBER"), "");
}

#[test]
fn empty_files_are_skipped() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.csv", "");
    write(dir.path(), "b.csv", "CUSTOMERNUMBER\nC1\n");

    let table = load_directory(dir.path()).expect("load directory");
    assert_eq!(table.sources.len(), 1);
    assert_eq!(table.len(), 1);
}

#[test]
fn directory_without_csv_is_empty_input() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "notes.txt", "hello");

    let err = load_directory(dir.path()).expect_err("no csv files");
    assert!(matches!(
        err,
        IngestError::EmptyInputSet {
            reason: "no CSV files found",
            ..
        }
    ));
}

#[test]
fn files_without_rows_are_empty_input() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.csv", "");
    write(dir.path(), "b.csv", "CUSTOMERNUMBER,ADDR1\n");

    let err = load_directory(dir.path()).expect_err("no rows");
    assert!(matches!(
        err,
        IngestError::EmptyInputSet {
            reason: "all CSV files are empty",
            ..
        }
    ));
}

#[test]
fn malformed_row_aborts_the_load() {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "a.csv", "CUSTOMERNUMBER,ADDR1\nC1,1 Elm St\n");
    write(dir.path(), "b.csv", "CUSTOMERNUMBER,ADDR1\nC2,2 Oak,extra\n");

    let err = load_directory(dir.path()).expect_err("malformed row");
    match err {
        IngestError::MalformedRow {
            path,
            line,
            expected,
            found,
        } => {
            assert!(path.ends_with("b.csv"));
            assert_eq!(line, 2);
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn missing_value_spellings_load_as_blank_cells() {
    let dir = TempDir::new().expect("temp dir");
    write(
        dir.path(),
        "a.csv",
        "CUSTOMERNUMBER,CUSTOMERFRIENDLYNAME,BILLINGADDRESS2,BILLINGCITY\n\
         C1,N/A,NA,NULL\n\
         C2,nan,None,Nashville\n",
    );

    let table = load_directory(dir.path()).expect("load directory");

    for record in &table.records {
        assert_eq!(record.get("CUSTOMERFRIENDLYNAME"), "");
        assert_eq!(record.get("BILLINGADDRESS2"), "");
    }
    assert_eq!(table.records[0].get("BILLINGCITY"), "");
    assert_eq!(table.records[1].get("BILLINGCITY"), "Nashville");
}
