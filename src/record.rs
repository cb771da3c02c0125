// src/record.rs
//
// Row shapes on both sides of the formatter.
//
// - RawRecord: what the extractor found in one table row. Fields that were not
//   found are simply missing; P/E can be present-but-null ("--" on the page).
// - FormattedRecord: eleven display strings in fixed column order, "" for gaps.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

/// The fixed column set, in export order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
    AvgVol3M,
    MarketCap,
    PeRatio,
    WeekChange52,
    WeekRange52,
}

impl Field {
    pub const COUNT: usize = 11;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Symbol,
        Field::Name,
        Field::Price,
        Field::Change,
        Field::ChangePercent,
        Field::Volume,
        Field::AvgVol3M,
        Field::MarketCap,
        Field::PeRatio,
        Field::WeekChange52,
        Field::WeekRange52,
    ];

    /// Column header as written to the export file.
    pub fn header(self) -> &'static str {
        match self {
            Field::Symbol        => "Symbol",
            Field::Name          => "Name",
            Field::Price         => "Price",
            Field::Change        => "Change",
            Field::ChangePercent => "Change %",
            Field::Volume        => "Volume",
            Field::AvgVol3M      => "Avg Vol (3M)",
            Field::MarketCap     => "Market Cap",
            Field::PeRatio       => "P/E Ratio (TTM)",
            Field::WeekChange52  => "52 Wk Change %",
            Field::WeekRange52   => "52 Wk Range",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Columns that hold numbers once formatted (GUI alignment).
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Symbol | Field::Name | Field::WeekRange52)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

pub fn headers() -> Vec<String> {
    Field::ALL.iter().map(|f| s!(f.header())).collect()
}

/* ---------------- RawRecord ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    // missing key = not found; Some(None) = found but explicitly null
    values: BTreeMap<Field, Option<String>>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, Some(value.into()));
    }

    pub fn set_null(&mut self, field: Field) {
        self.values.insert(field, None);
    }

    /// The value, if the field was found and is not null.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    /// Found at all (null included).
    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn is_null(&self, field: Field) -> bool {
        matches!(self.values.get(&field), Some(None))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> {
        self.values.iter().map(|(f, v)| (*f, v.as_deref()))
    }
}

/* ---------------- FormattedRecord ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedRecord([String; Field::COUNT]);

impl FormattedRecord {
    pub fn new(cells: [String; Field::COUNT]) -> Self {
        Self(cells)
    }

    pub fn get(&self, field: Field) -> &str {
        &self.0[field.index()]
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn into_cells(self) -> Vec<String> {
        self.0.into()
    }
}

impl Index<Field> for FormattedRecord {
    type Output = str;
    fn index(&self, field: Field) -> &str {
        self.get(field)
    }
}
