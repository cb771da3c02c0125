// tests/extract_quotes.rs
//
// Extraction against a saved screener page (tests/fixtures/day_gainers.html).

use quote_scrape::record::Field;
use quote_scrape::specs::quotes::{self, Extraction};
use quote_scrape::Error;

fn fixture() -> Extraction {
    let html = include_str!("fixtures/day_gainers.html");
    quotes::extract(html).unwrap()
}

fn symbols(ex: &Extraction) -> Vec<Option<&str>> {
    ex.records.iter().map(|r| r.get(Field::Symbol)).collect()
}

#[test]
fn only_marker_rows_become_records() {
    let ex = fixture();

    // header row, footer row (ZZZ) never count; the nested row counts on its own
    assert_eq!(ex.rows_seen, 7);
    assert_eq!(ex.empty_rows, 2);
    assert_eq!(ex.warnings.len(), 1);
    assert_eq!(ex.records.len(), 4);
    assert_eq!(symbols(&ex), vec![Some("AAPL"), Some("MSFT"), None, Some("GME")]);
}

#[test]
fn complete_row_has_every_field() {
    let ex = fixture();
    let aapl = &ex.records[0];

    assert_eq!(aapl.len(), Field::COUNT);
    assert_eq!(aapl.get(Field::Name), Some("Apple Inc."));
    assert_eq!(aapl.get(Field::Price), Some("189.84"));
    assert_eq!(aapl.get(Field::Volume), Some("52164500"));
    assert_eq!(aapl.get(Field::AvgVol3M), Some("58.421M"));
    assert_eq!(aapl.get(Field::MarketCap), Some("2950000000000"));
    assert_eq!(aapl.get(Field::PeRatio), Some("29.51"));
    assert_eq!(aapl.get(Field::WeekChange52), Some("15.5"));
    assert_eq!(aapl.get(Field::WeekRange52), Some("164.08 - 199.62"));
}

#[test]
fn raw_value_attribute_wins_over_text() {
    let ex = fixture();
    let aapl = &ex.records[0];

    // text says "+4.23" / "+2.28%"
    assert_eq!(aapl.get(Field::Change), Some("4.23"));
    assert_eq!(aapl.get(Field::ChangePercent), Some("2.278"));
}

#[test]
fn streamer_without_raw_value_falls_back_to_text() {
    let ex = fixture();
    assert_eq!(ex.records[1].get(Field::Price), Some("415.20"));
    assert_eq!(ex.records[3].get(Field::Price), Some("1,234.56"));
}

#[test]
fn no_data_pe_is_null_not_placeholder() {
    let ex = fixture();
    let msft = &ex.records[1];

    assert!(msft.contains(Field::PeRatio));
    assert!(msft.is_null(Field::PeRatio));
    assert_eq!(msft.get(Field::PeRatio), None);
}

#[test]
fn missing_cells_only_drop_their_field() {
    let ex = fixture();
    let msft = &ex.records[1];

    assert!(!msft.contains(Field::AvgVol3M));
    assert!(!msft.contains(Field::WeekChange52));
    assert_eq!(msft.get(Field::Change), Some("-1.5"));
    assert_eq!(msft.get(Field::MarketCap), Some("500000000"));
}

#[test]
fn range_needs_two_labels() {
    let ex = fixture();
    assert!(!ex.records[1].contains(Field::WeekRange52));
}

#[test]
fn missing_nested_symbol_keeps_rest_of_row() {
    let ex = fixture();
    let tsla = &ex.records[2];

    assert!(!tsla.contains(Field::Symbol));
    assert_eq!(tsla.get(Field::Name), Some("Tesla, Inc."));
    assert_eq!(tsla.get(Field::Price), Some("250"));
    assert_eq!(tsla.get(Field::PeRatio), Some("61.2"));
}

#[test]
fn row_wrapping_another_row_is_skipped_with_warning() {
    let ex = fixture();
    let w = &ex.warnings[0];

    assert_eq!(w.row_index, 4);
    assert!(w.message.contains("data row"), "message: {}", w.message);
    assert!(ex.records.iter().all(|r| r.get(Field::Name) != Some("Nested Holdings")));
}

#[test]
fn duplicate_cell_keeps_first_value_and_row() {
    let html = r#"<table><tr data-testid="data-table-v2-row">
        <td data-testid-cell="companyshortname.raw"><div class="companyName">Dup Corp</div></td>
        <td data-testid-cell="avgdailyvol3m">1M</td>
        <td data-testid-cell="avgdailyvol3m">2M</td>
    </tr></table>"#;
    let ex = quotes::extract(html).unwrap();

    assert!(ex.warnings.is_empty());
    assert_eq!(ex.records.len(), 1);
    assert_eq!(ex.records[0].get(Field::Name), Some("Dup Corp"));
    assert_eq!(ex.records[0].get(Field::AvgVol3M), Some("1M"));
}

#[test]
fn symbol_comes_from_first_ticker_link_only() {
    let html = r#"<table><tr data-testid="data-table-v2-row">
        <td data-testid-cell="ticker">
            <a data-testid="table-cell-ticker" href="/quote/XYZ/">XYZ</a>
            <a data-testid="table-cell-ticker"><span class="symbol">OTHER</span></a>
        </td>
        <td data-testid-cell="companyshortname.raw"><div class="companyName">Xyz Ltd</div></td>
    </tr></table>"#;
    let ex = quotes::extract(html).unwrap();

    assert_eq!(ex.records.len(), 1);
    assert!(!ex.records[0].contains(Field::Symbol));
}

#[test]
fn inner_whitespace_of_text_values_is_kept() {
    let html = "<table><tr data-testid=\"data-table-v2-row\">
        <td data-testid-cell=\"companyshortname.raw\"><div class=\"companyName\">Foo  &amp;\n  Bar</div></td>
        <td data-testid-cell=\"peratio.lasttwelvemonths\"> 1 234 </td>
    </tr></table>";
    let ex = quotes::extract(html).unwrap();
    let rec = &ex.records[0];

    assert_eq!(rec.get(Field::Name), Some("Foo  &\n  Bar"));
    assert_eq!(rec.get(Field::PeRatio), Some("1 234"));
}

#[test]
fn page_without_marker_rows_is_ok_and_empty() {
    let html = r#"<html><body><table><tr><td data-testid-cell="ticker">X</td></tr></table></body></html>"#;
    let ex = quotes::extract(html).unwrap();

    assert!(ex.is_empty());
    assert_eq!(ex.rows_seen, 0);
}

#[test]
fn present_but_empty_cell_counts_as_found() {
    let html = r#"<table><tr data-testid="data-table-v2-row">
        <td data-testid-cell="avgdailyvol3m">   </td>
    </tr></table>"#;
    let ex = quotes::extract(html).unwrap();

    assert_eq!(ex.records.len(), 1);
    assert_eq!(ex.records[0].get(Field::AvgVol3M), Some(""));
}

#[test]
fn rejects_input_that_is_not_markup() {
    assert!(matches!(quotes::extract(""), Err(Error::NotMarkup)));
    assert!(matches!(quotes::extract("   \n"), Err(Error::NotMarkup)));
    assert!(matches!(quotes::extract("AAPL 189.84 +4.23"), Err(Error::NotMarkup)));
}
