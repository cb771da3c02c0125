// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quote_scrape::{format, specs::quotes};

const ROWS: usize = 200;

/// A screener-shaped page with `n` complete data rows.
fn synth_page(n: usize) -> String {
    let mut html = String::from("<html><body><table><thead><tr><th>Symbol</th></tr></thead><tbody>");
    for i in 0..n {
        let price = 10.0 + i as f64 * 1.37;
        html.push_str(&format!(
            r#"<tr data-testid="data-table-v2-row">
<td data-testid-cell="ticker"><a data-testid="table-cell-ticker"><span class="symbol">T{i:03}</span></a></td>
<td data-testid-cell="companyshortname.raw"><div class="companyName">Company {i} Holdings</div></td>
<td data-testid-cell="intradayprice"><fin-streamer data-field="regularMarketPrice" data-value="{price:.2}">{price:.2}</fin-streamer></td>
<td data-testid-cell="intradaypricechange"><fin-streamer data-field="regularMarketChange" data-value="0.{i}">+0.{i}</fin-streamer></td>
<td data-testid-cell="percentchange"><fin-streamer data-field="regularMarketChangePercent" data-value="1.{i}">+1.{i}%</fin-streamer></td>
<td data-testid-cell="dayvolume"><fin-streamer data-field="regularMarketVolume" data-value="{vol}">x</fin-streamer></td>
<td data-testid-cell="avgdailyvol3m">1.2M</td>
<td data-testid-cell="intradaymarketcap"><fin-streamer data-field="marketCap" data-value="{cap}">x</fin-streamer></td>
<td data-testid-cell="peratio.lasttwelvemonths">{pe}</td>
<td data-testid-cell="fiftytwowkpercentchange"><fin-streamer data-field="fiftyTwoWeekChangePercent" data-value="-{i}.5">x</fin-streamer></td>
<td data-testid-cell="fiftyTwoWeekRange"><div class="labels"><span>1.00</span><span>{price:.2}</span></div></td>
</tr>"#,
            vol = 1_000_000 + i * 7919,
            cap = 5_000_000u64 * (i as u64 + 1) * 1000,
            pe = if i % 5 == 0 { String::from("--") } else { format!("{}.{}", 10 + i % 30, i % 10) },
        ));
    }
    html.push_str("</tbody></table></body></html>");
    html
}

fn bench_extract(c: &mut Criterion) {
    let doc = synth_page(ROWS);

    c.bench_function("extract_200_rows", |b| {
        b.iter(|| {
            let ex = quotes::extract(black_box(&doc)).unwrap();
            black_box(ex.records.len())
        })
    });

    let raws = quotes::extract(&doc).unwrap().records;
    c.bench_function("format_200_records", |b| {
        b.iter(|| {
            let out = format::format_records(black_box(&raws));
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
