//! Workbook store reading real .xlsx and .csv files

use rust_xlsxwriter::Workbook;
use sheet_autofill::store::{RecordStore, WorkbookStore};
use sheet_autofill::{ColumnRef, ErrorKind, FieldMapper, LookupError, RecordLoader};
use std::path::Path;

fn write_xlsx(path: &Path) {
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("הערות").unwrap();
    notes.write_string(0, 0, "nothing here").unwrap();

    let sheet = workbook.add_worksheet();
    sheet.set_name("ראשי").unwrap();
    let headers = ["מס זהות", "שם משפחה", "שם פרטי", "טלפון נייד"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    sheet.write_string(1, 0, "123456789").unwrap();
    sheet.write_string(1, 1, "כהן").unwrap();
    sheet.write_string(1, 2, "דנה").unwrap();
    sheet.write_string(1, 3, "050-1234567").unwrap();
    // Numeric ID cell
    sheet.write_number(2, 0, 987654321.0).unwrap();
    sheet.write_string(2, 1, "לוי").unwrap();

    workbook.save(path).unwrap();
}

#[tokio::test]
async fn test_xlsx_named_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.xlsx");
    write_xlsx(&path);

    let store = WorkbookStore::new(&path, Some("ראשי".to_string()), ColumnRef::default());
    let record = store.fetch("123456789").await.unwrap();
    assert_eq!(record.get("שם משפחה"), Some("כהן"));
    assert_eq!(record.get("טלפון נייד"), Some("050-1234567"));

    let numeric = store.fetch("987654321").await.unwrap();
    assert_eq!(numeric.get("שם משפחה"), Some("לוי"));
    assert_eq!(numeric.get("שם פרטי"), Some(""));
}

#[tokio::test]
async fn test_xlsx_missing_sheet_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.xlsx");
    write_xlsx(&path);

    let store = WorkbookStore::new(&path, Some("Sheet9".to_string()), ColumnRef::default());
    let err = store.fetch("1").await.unwrap_err();
    assert!(matches!(err, LookupError::Config(ref msg) if msg.contains("Sheet9")));
}

#[tokio::test]
async fn test_csv_with_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.csv");
    std::fs::write(
        &path,
        "שם פרטי,ת.ז.,עיר\nדנה,111,חיפה\nיוסי,222\n",
    )
    .unwrap();

    let store = WorkbookStore::new(&path, None, "B".parse().unwrap());
    let loader = RecordLoader::new(Box::new(store), FieldMapper::default());

    let record = loader.load("222").await.unwrap();
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"firstName":"יוסי","id":"222","city":""}"#
    );

    let err = loader.load("333").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_header_only_csv_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "ID,Name\n").unwrap();

    let store = WorkbookStore::new(&path, None, ColumnRef::default());
    let err = store.fetch("ID").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_missing_file() {
    let store = WorkbookStore::new("/nonexistent/members.xlsx", None, ColumnRef::default());
    let err = store.fetch("1").await.unwrap_err();
    assert!(matches!(err, LookupError::Config(_)));
}

/// Column letters count from A even when the used range starts further in
#[tokio::test]
async fn test_xlsx_blank_leading_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 1, "ID").unwrap();
    sheet.write_string(0, 2, "Name").unwrap();
    sheet.write_string(1, 1, "42").unwrap();
    sheet.write_string(1, 2, "Alice").unwrap();
    workbook.save(&path).unwrap();

    let store = WorkbookStore::new(&path, None, "B".parse().unwrap());
    let record = store.fetch("42").await.unwrap();
    assert_eq!(record.get("ID"), Some("42"));
    assert_eq!(record.get("Name"), Some("Alice"));

    let column_a = WorkbookStore::new(&path, None, ColumnRef::default());
    let err = column_a.fetch("42").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
