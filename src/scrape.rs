// src/scrape.rs
use crate::{
    config::options::{FetchMethod, Source, SourceOptions},
    core::{browser, net},
    error::{Error, Result},
    file,
    progress::Progress,
    record::{Field, FormattedRecord},
    specs::quotes::{self, Extraction},
};

/// Where the HTML that produced an extraction actually came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    File,
    Http,
    Browser,
}

impl Origin {
    pub fn label(self) -> &'static str {
        match self {
            Origin::File => "file",
            Origin::Http => "HTTP",
            Origin::Browser => "browser",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrapeOutcome {
    pub extraction: Extraction,
    pub origin: Origin,
    pub source: Source,
}

/// Top-level: resolve the source, fetch, extract. No formatting, no export.
///
/// With `FetchMethod::Auto` a URL is tried over plain HTTP first and handed to
/// the headless browser when that fails or finds no rows.
pub fn run(
    opts: &SourceOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeOutcome> {
    let source = opts.source.clone().ok_or(Error::NoSource)?;

    let result = match &source {
        Source::File(path) => {
            if let Some(p) = progress.as_deref_mut() {
                p.begin(1);
                p.log(&format!("Reading {}…", path.display()));
            }
            file::read_page(path)
                .and_then(|html| quotes::extract(&html))
                .map(|ex| (ex, Origin::File))
        }
        Source::Url(url) => fetch_url(url, opts.method, reborrow(&mut progress)),
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let (extraction, origin) = result?;
    logf!(
        "Scrape: {} records from {} ({})",
        extraction.records.len(),
        source,
        origin.label()
    );
    Ok(ScrapeOutcome { extraction, origin, source })
}

fn fetch_url(
    url: &str,
    method: FetchMethod,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(Extraction, Origin)> {
    match method {
        FetchMethod::Http => {
            if let Some(p) = progress.as_deref_mut() { p.begin(1); }
            attempt(url, FetchMethod::Http, progress).map(|ex| (ex, Origin::Http))
        }
        FetchMethod::Browser => {
            if let Some(p) = progress.as_deref_mut() { p.begin(1); }
            attempt(url, FetchMethod::Browser, progress).map(|ex| (ex, Origin::Browser))
        }
        FetchMethod::Auto => {
            if let Some(p) = progress.as_deref_mut() { p.begin(2); }

            let http = match attempt(url, FetchMethod::Http, reborrow(&mut progress)) {
                Ok(ex) if !ex.is_empty() => return Ok((ex, Origin::Http)),
                Ok(ex) => {
                    logw!("Scrape: no rows over HTTP; page is probably rendered client-side");
                    Ok(ex)
                }
                Err(e) => {
                    logw!("Scrape: HTTP attempt failed: {e}");
                    Err(e)
                }
            };

            if let Some(p) = progress.as_deref_mut() {
                p.log("Falling back to headless browser…");
            }
            match attempt(url, FetchMethod::Browser, progress) {
                Ok(ex) => Ok((ex, Origin::Browser)),
                // Nothing better to offer than what HTTP gave us
                Err(Error::BrowserUnavailable) => http.map(|ex| (ex, Origin::Http)),
                Err(e) => {
                    loge!("Scrape: browser attempt failed: {e}");
                    Err(e)
                }
            }
        }
    }
}

/// One fetch + extract with the given method.
fn attempt(url: &str, method: FetchMethod, mut progress: Option<&mut dyn Progress>) -> Result<Extraction> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching via {}…", method.label()));
    }

    let html = match method {
        FetchMethod::Browser => browser::render(url),
        FetchMethod::Http | FetchMethod::Auto => net::http_get(url),
    };
    let result = html.and_then(|h| quotes::extract(&h));

    if let Some(p) = progress.as_deref_mut() {
        p.attempt_done(method);
    }
    result
}

/// Short-lived `Option<&mut dyn Progress>` that leaves `progress` usable afterwards.
fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

/* ---------------- Console preview ---------------- */

/// Human-readable summary of the first `n` records, one block per record,
/// followed by "... and N more" when the list is longer.
pub fn preview_lines(records: &[FormattedRecord], n: usize) -> Vec<String> {
    let or_na = |v: &str| if v.is_empty() { s!("N/A") } else { s!(v) };

    let mut lines = Vec::new();
    for (i, rec) in records.iter().take(n).enumerate() {
        lines.push(format!("{}. {} - {}", i + 1, or_na(&rec[Field::Symbol]), or_na(&rec[Field::Name])));
        lines.push(format!("   Price:      ${}", or_na(&rec[Field::Price])));
        lines.push(format!(
            "   Change:     {} ({})",
            or_na(&rec[Field::Change]),
            or_na(&rec[Field::ChangePercent])
        ));
        lines.push(format!("   Volume:     {}", or_na(&rec[Field::Volume])));
        lines.push(format!("   Market Cap: {}", or_na(&rec[Field::MarketCap])));
    }
    if records.len() > n {
        lines.push(format!("... and {} more", records.len() - n));
    }
    lines
}
