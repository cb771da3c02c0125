// src/format.rs
//
// RawRecord → FormattedRecord. Pure and stateless: same input, same strings.
// Every formatter turns an absent/null value into "" and passes through
// anything it can't parse.

use crate::record::{Field, FormattedRecord, RawRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Style {
    Text,
    Number,
    Percent,
    MarketCap,
}

fn style_of(field: Field) -> Style {
    match field {
        Field::Price | Field::Change | Field::Volume => Style::Number,
        Field::ChangePercent | Field::WeekChange52 => Style::Percent,
        Field::MarketCap => Style::MarketCap,
        Field::Symbol | Field::Name | Field::AvgVol3M | Field::PeRatio | Field::WeekRange52 => Style::Text,
    }
}

pub fn format_record(raw: &RawRecord) -> FormattedRecord {
    FormattedRecord::new(Field::ALL.map(|field| {
        let value = raw.get(field);
        match style_of(field) {
            Style::Text => value.map(String::from).unwrap_or_default(),
            Style::Number => format_number(value),
            Style::Percent => format_percent(value),
            Style::MarketCap => format_market_cap(value),
        }
    }))
}

pub fn format_records(raws: &[RawRecord]) -> Vec<FormattedRecord> {
    raws.iter().map(format_record).collect()
}

/// First `max_rows` records, order kept.
pub fn truncate<T>(records: &[T], max_rows: usize) -> &[T] {
    &records[..records.len().min(max_rows)]
}

/* ---------------- Field formatters ---------------- */

/// "1234" → "1,234", "1234.5" → "1,234.50".
///
/// Only inputs made of ASCII digits once every '.' and '-' is removed are
/// treated as numbers; "1,234" or "12.3K" pass through untouched.
pub fn format_number(value: Option<&str>) -> String {
    let Some(v) = non_empty(value) else { return s!() };

    let digits_only = {
        let mut rest = v.chars().filter(|c| *c != '.' && *c != '-').peekable();
        rest.peek().is_some() && rest.all(|c| c.is_ascii_digit())
    };
    if !digits_only {
        return s!(v);
    }

    // "1.2.3" or "1-2" pass the digit check but aren't numbers
    let Ok(num) = v.parse::<f64>() else { return s!(v) };

    if num.fract() == 0.0 {
        // "-0" counts as plain zero
        let num = if num == 0.0 { 0.0 } else { num };
        group_thousands(&format!("{num:.0}"))
    } else {
        group_thousands(&format!("{num:.2}"))
    }
}

/// "2.5" → "+2.50%", "-3.1" → "-3.10%", "0" → "+0.00%".
pub fn format_percent(value: Option<&str>) -> String {
    let Some(v) = non_empty(value) else { return s!() };
    let Some(num) = parse_float(v) else { return s!(v) };
    if num.is_nan() {
        return s!("nan%");
    }

    let sign = if num >= 0.0 { "+" } else { "" };
    format!("{sign}{num:.2}%")
}

/// Scaled to T/B/M with three decimals above a million, plain dollars below.
/// "2500000000000" → "$2.500T", "999" → "$999".
pub fn format_market_cap(value: Option<&str>) -> String {
    let Some(v) = non_empty(value) else { return s!() };
    let Some(num) = parse_float(v) else { return s!(v) };
    if num.is_nan() {
        return s!("$nan");
    }

    if num >= 1e12 {
        format!("${:.3}T", num / 1e12)
    } else if num >= 1e9 {
        format!("${:.3}B", num / 1e9)
    } else if num >= 1e6 {
        format!("${:.3}M", num / 1e6)
    } else {
        format!("${}", group_thousands(&format!("{num:.0}")))
    }
}

/* ---------------- helpers ---------------- */

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Lenient float parse: surrounding whitespace is ignored.
fn parse_float(v: &str) -> Option<f64> {
    v.trim().parse::<f64>().ok()
}

/// Insert ',' every three digits of the integer part.
/// "-1234567.50" → "-1,234,567.50"; non-numeric text ("NaN", "inf") is left alone.
fn group_thousands(num: &str) -> String {
    let (sign, rest) = match num.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", num),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return s!(num);
    }

    let mut grouped = String::with_capacity(num.len() + int_part.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(frac_part);
    grouped
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_integer_part_only() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("-1234567.50"), "-1,234,567.50");
        assert_eq!(group_thousands("NaN"), "NaN");
    }
}
