// tests/export_e2e.rs
//
// Saved page → extract → format → export file on disk.

use std::fs;
use std::path::Path;

use quote_scrape::config::options::{ExportFormat, ExportOptions};
use quote_scrape::file::{self, ExportOutcome};
use quote_scrape::format::format_records;
use quote_scrape::record::{headers, Field, FormattedRecord, RawRecord};
use quote_scrape::specs::quotes;
use quote_scrape::Error;

fn fixture_records() -> Vec<FormattedRecord> {
    let ex = quotes::extract(include_str!("fixtures/day_gainers.html")).unwrap();
    format_records(&ex.records)
}

fn numbered(n: usize) -> Vec<FormattedRecord> {
    (0..n)
        .map(|i| {
            let mut raw = RawRecord::new();
            raw.set(Field::Symbol, format!("S{i:03}"));
            raw.set(Field::Price, format!("{}", 100 + i));
            raw
        })
        .map(|raw| quote_scrape::format::format_record(&raw))
        .collect()
}

fn opts_at(path: &Path) -> ExportOptions {
    let mut opts = ExportOptions::default();
    opts.set_path(path.to_str().unwrap());
    opts
}

fn read_rows(path: &Path, delim: u8, has_headers: bool) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(has_headers)
        .from_path(path)
        .unwrap();
    let hdr = if has_headers {
        rdr.headers().unwrap().iter().map(String::from).collect()
    } else {
        Vec::new()
    };
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (hdr, rows)
}

#[test]
fn fixture_page_exports_formatted_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("out").join("stock_data.csv");
    let opts = opts_at(&target);

    let outcome = file::export(&opts, &fixture_records()).unwrap();
    assert_eq!(outcome, ExportOutcome::Written { path: target.clone(), rows: 4 });

    let (hdr, rows) = read_rows(&target, b',', true);
    assert_eq!(hdr, headers());
    assert_eq!(rows.len(), 4);

    let aapl = &rows[0];
    assert_eq!(aapl[Field::Symbol.index()], "AAPL");
    assert_eq!(aapl[Field::Volume.index()], "52,164,500");
    assert_eq!(aapl[Field::ChangePercent.index()], "+2.28%");
    assert_eq!(aapl[Field::MarketCap.index()], "$2.950T");

    let msft = &rows[1];
    assert_eq!(msft[Field::Name.index()], "Microsoft Corporation");
    assert_eq!(msft[Field::PeRatio.index()], "");
    assert_eq!(msft[Field::MarketCap.index()], "$500.000M");
    assert_eq!(msft[Field::WeekRange52.index()], "");

    let gme = &rows[3];
    assert_eq!(gme[Field::Price.index()], "1,234.56");
    assert_eq!(gme[Field::ChangePercent.index()], "+0.00%");
    assert_eq!(gme[Field::MarketCap.index()], "$999");
}

#[test]
fn export_caps_rows_in_order() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("capped.csv");
    let opts = opts_at(&target);
    assert_eq!(opts.max_rows, 50);

    let outcome = file::export(&opts, &numbered(80)).unwrap();
    assert_eq!(outcome, ExportOutcome::Written { path: target.clone(), rows: 50 });

    let (_, rows) = read_rows(&target, b',', true);
    assert_eq!(rows.len(), 50);
    assert_eq!(rows[0][0], "S000");
    assert_eq!(rows[49][0], "S049");
}

#[test]
fn nothing_to_export_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("sub").join("empty.csv");
    let opts = opts_at(&target);

    let outcome = file::export(&opts, &[]).unwrap();
    assert_eq!(outcome, ExportOutcome::NothingToExport);
    assert!(!target.exists());
    assert!(!tmp.path().join("sub").exists());
}

#[test]
fn zero_row_cap_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("capped").join("none.csv");
    let mut opts = opts_at(&target);
    opts.max_rows = 0;

    let outcome = file::export(&opts, &numbered(1)).unwrap();
    assert_eq!(outcome, ExportOutcome::NothingToExport);
    assert!(!target.exists());
    assert!(!tmp.path().join("capped").exists());
}

#[test]
fn unwritable_target_reports_path_and_keeps_records() {
    let tmp = tempfile::tempdir().unwrap();
    // a plain file where the directory should be
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "not a dir").unwrap();
    let target = blocker.join("stock_data.csv");
    let opts = opts_at(&target);

    let records = numbered(3);
    let err = file::export(&opts, &records).unwrap_err();
    match err {
        Error::ExportTarget { path, .. } => assert_eq!(path, target),
        other => panic!("unexpected error: {other:?}"),
    }

    // retry elsewhere with the same records
    let retry = opts_at(&tmp.path().join("retry.csv"));
    assert!(matches!(file::export(&retry, &records), Ok(ExportOutcome::Written { rows: 3, .. })));
}

#[test]
fn tsv_without_headers() {
    let tmp = tempfile::tempdir().unwrap();
    let mut opts = opts_at(&tmp.path().join("plain"));
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;

    let ExportOutcome::Written { path, rows } = file::export(&opts, &numbered(2)).unwrap() else {
        panic!("expected a written file");
    };
    assert_eq!(rows, 2);
    assert_eq!(path.extension().unwrap(), "tsv");

    let text = fs::read_to_string(&path).unwrap();
    let first = text.lines().next().unwrap();
    assert!(first.starts_with("S000\t\t100\t"), "first line: {first:?}");
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn clipboard_text_matches_file() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("same.csv");
    let opts = opts_at(&target);
    let records = fixture_records();

    file::export(&opts, &records).unwrap();
    let copied = file::to_export_string(&opts, &records).unwrap();
    assert_eq!(copied, fs::read_to_string(&target).unwrap());
}
