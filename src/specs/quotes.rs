// src/specs/quotes.rs
//
// Screener quote table → RawRecord per data row.
//
// Row:   <tr data-testid="data-table-v2-row"> … </tr>
// Cell:  <td data-testid-cell="<cell key>"> … </td>
// Value: depends on the field's probe (see FIELD_SPECS).

use std::fmt;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{
    CELL_KEY_ATTR, NO_DATA, RAW_VALUE_ATTR, ROW_MARKER, ROW_MARKER_ATTR, STREAMER_TAG, STREAM_KEY_ATTR,
};
use crate::core::html::{attr_eq, parse_document, selector, stripped_text};
use crate::error::Result;
use crate::record::{Field, RawRecord};

/// How a field's value is read once its cell is found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// Text of the element reached by taking the first match of each CSS
    /// step in turn, starting from the cell.
    Nested(&'static [&'static str]),
    /// `<fin-streamer data-field=…>`: `data-value` if the attribute exists, else its text.
    Streamer(&'static str),
    /// Text of the whole cell.
    CellText,
    /// Text of the whole cell; the "no data" placeholder becomes an explicit null.
    CellTextOrNull,
    /// First two `span`s under `div.labels`, joined as "low - high".
    RangeLabels,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub field: Field,
    pub cell_key: &'static str,
    pub probe: Probe,
}

const fn spec(field: Field, cell_key: &'static str, probe: Probe) -> FieldSpec {
    FieldSpec { field, cell_key, probe }
}

pub const FIELD_SPECS: [FieldSpec; Field::COUNT] = [
    spec(Field::Symbol,        "ticker",                   Probe::Nested(&[r#"a[data-testid="table-cell-ticker"]"#, "span.symbol"])),
    spec(Field::Name,          "companyshortname.raw",     Probe::Nested(&["div.companyName"])),
    spec(Field::Price,         "intradayprice",            Probe::Streamer("regularMarketPrice")),
    spec(Field::Change,        "intradaypricechange",      Probe::Streamer("regularMarketChange")),
    spec(Field::ChangePercent, "percentchange",            Probe::Streamer("regularMarketChangePercent")),
    spec(Field::Volume,        "dayvolume",                Probe::Streamer("regularMarketVolume")),
    spec(Field::AvgVol3M,      "avgdailyvol3m",            Probe::CellText),
    spec(Field::MarketCap,     "intradaymarketcap",        Probe::Streamer("marketCap")),
    spec(Field::PeRatio,       "peratio.lasttwelvemonths", Probe::CellTextOrNull),
    spec(Field::WeekChange52,  "fiftytwowkpercentchange",  Probe::Streamer("fiftyTwoWeekChangePercent")),
    spec(Field::WeekRange52,   "fiftyTwoWeekRange",        Probe::RangeLabels),
];

/* ---------------- Outcomes ---------------- */

/// A data row that could not be read. Non-fatal: the row is skipped.
///
/// The one structural fault detected is a marker row that contains another
/// marker row; its cells can't be told apart from the inner row's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowWarning {
    /// Zero-based position among the marker rows
    pub row_index: usize,
    pub message: String,
}

impl fmt::Display for RowWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row_index + 1, self.message)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    Record(RawRecord),
    /// Marker row with none of the fields present
    Empty,
    Skipped(RowWarning),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Document order, uncapped
    pub records: Vec<RawRecord>,
    pub warnings: Vec<RowWarning>,
    /// Marker rows encountered
    pub rows_seen: usize,
    pub empty_rows: usize,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/* ---------------- Selectors ---------------- */

struct CompiledField {
    spec: FieldSpec,
    cell: Selector,
    /// Walked from the cell, first match at each step; empty means the cell itself
    steps: Vec<Selector>,
}

/// Everything the row walk needs, compiled once per document.
struct Selectors {
    row: Selector,
    span: Selector,
    fields: Vec<CompiledField>,
}

impl Selectors {
    fn compile() -> Result<Self> {
        let row = selector(&attr_eq("tr", ROW_MARKER_ATTR, ROW_MARKER))?;
        let span = selector("span")?;

        let mut fields = Vec::with_capacity(FIELD_SPECS.len());
        for spec in FIELD_SPECS {
            let cell = selector(&attr_eq("td", CELL_KEY_ATTR, spec.cell_key))?;
            let steps = match spec.probe {
                Probe::Nested(path) => path.iter().map(|css| selector(css)).collect::<Result<Vec<_>>>()?,
                Probe::Streamer(key) => vec![selector(&attr_eq(STREAMER_TAG, STREAM_KEY_ATTR, key))?],
                Probe::RangeLabels => vec![selector("div.labels")?],
                Probe::CellText | Probe::CellTextOrNull => Vec::new(),
            };
            fields.push(CompiledField { spec, cell, steps });
        }
        Ok(Self { row, span, fields })
    }
}

/* ---------------- Extraction ---------------- */

/// Parse `html` and pull one record out of every marker row.
///
/// Missing fields are left out of their record; rows with no fields at all are
/// counted in `empty_rows` and dropped; unreadable rows end up in `warnings`.
/// Zero records is still `Ok`.
pub fn extract(html: &str) -> Result<Extraction> {
    let doc = parse_document(html)?;
    extract_document(&doc)
}

pub fn extract_document(doc: &Html) -> Result<Extraction> {
    let sel = Selectors::compile()?;
    let mut out = Extraction::default();

    for (row_index, row) in doc.select(&sel.row).enumerate() {
        out.rows_seen += 1;
        match extract_row(row_index, row, &sel) {
            RowOutcome::Record(rec) => out.records.push(rec),
            RowOutcome::Empty => out.empty_rows += 1,
            RowOutcome::Skipped(w) => {
                logw!("Quotes: skipping {w}");
                out.warnings.push(w);
            }
        }
    }

    logd!(
        "Quotes: {} marker rows, {} records, {} empty, {} skipped",
        out.rows_seen,
        out.records.len(),
        out.empty_rows,
        out.warnings.len()
    );
    Ok(out)
}

/// Value found by a probe inside one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Probed {
    Missing,
    Null,
    Value(String),
}

fn extract_row(row_index: usize, row: ElementRef<'_>, sel: &Selectors) -> RowOutcome {
    if row.select(&sel.row).next().is_some() {
        return RowOutcome::Skipped(RowWarning {
            row_index,
            message: s!("contains another data row"),
        });
    }

    let mut rec = RawRecord::new();
    for cf in &sel.fields {
        match probe_field(row_index, row, cf, sel) {
            Probed::Value(v) => rec.set(cf.spec.field, v),
            Probed::Null => rec.set_null(cf.spec.field),
            Probed::Missing => {}
        }
    }

    if rec.is_empty() { RowOutcome::Empty } else { RowOutcome::Record(rec) }
}

/// First matching cell wins. A later same-key cell that reads differently
/// is only logged.
fn probe_field(row_index: usize, row: ElementRef<'_>, cf: &CompiledField, sel: &Selectors) -> Probed {
    let mut cells = row.select(&cf.cell);
    let Some(first) = cells.next() else {
        return Probed::Missing;
    };
    let value = probe_cell(first, cf, sel);

    for other in cells {
        let again = probe_cell(other, cf, sel);
        if again != Probed::Missing && again != value {
            logw!(
                "Quotes: row {}: extra `{}` cell ignored ({:?} kept, {:?} dropped)",
                row_index + 1,
                cf.spec.cell_key,
                value,
                again
            );
        }
    }
    value
}

fn probe_cell(cell: ElementRef<'_>, cf: &CompiledField, sel: &Selectors) -> Probed {
    let found = cf.steps.iter().try_fold(cell, |el, css| el.select(css).next());
    let Some(el) = found else { return Probed::Missing };

    match cf.spec.probe {
        Probe::Nested(_) | Probe::CellText => Probed::Value(stripped_text(el)),
        Probe::Streamer(_) => match el.value().attr(RAW_VALUE_ATTR) {
            Some(raw) => Probed::Value(s!(raw)),
            None => Probed::Value(stripped_text(el)),
        },
        Probe::RangeLabels => {
            let mut spans = el.select(&sel.span).map(stripped_text);
            match (spans.next(), spans.next()) {
                (Some(low), Some(high)) => Probed::Value(format!("{low} - {high}")),
                _ => Probed::Missing,
            }
        }
        Probe::CellTextOrNull => {
            let text = stripped_text(el);
            if text == NO_DATA { Probed::Null } else { Probed::Value(text) }
        }
    }
}
