// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    config::{
        consts::{DEFAULT_MAX_ROWS, PREVIEW_ROWS},
        options::{AppOptions, ExportFormat, FetchMethod, Source},
    },
    file::{self, ExportOutcome},
    format,
    log::{self, LogOptions},
    progress::Progress,
    scrape,
};

#[derive(Parser, Debug)]
#[command(name = "quote_scrape")]
#[command(about = "Extract the quote table from a screener page and export it as CSV/TSV")]
#[command(version)]
pub struct Cli {
    /// Saved HTML file or http(s) URL (defaults to the day-gainers screener)
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    /// How to fetch a URL: plain HTTP, headless browser, or HTTP then browser
    #[arg(short, long, value_enum, default_value_t = MethodArg::Auto)]
    pub method: MethodArg,

    /// Output file (extension follows --format unless given)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Keep at most this many rows in the export
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,

    /// Leave the header row out of the export
    #[arg(long)]
    pub no_headers: bool,

    /// Records to print after exporting (0 = none)
    #[arg(long, value_name = "N", default_value_t = PREVIEW_ROWS)]
    pub preview: usize,

    /// Verbose logging to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Auto,
    Http,
    Browser,
}

impl From<MethodArg> for FetchMethod {
    fn from(m: MethodArg) -> Self {
        match m {
            MethodArg::Auto => FetchMethod::Auto,
            MethodArg::Http => FetchMethod::Http,
            MethodArg::Browser => FetchMethod::Browser,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Cli {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        if let Some(text) = &self.source {
            opts.source.source = Source::parse(text);
        }
        opts.source.method = self.method.into();

        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        opts.export.max_rows = self.max_rows;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Status lines to stderr so stdout stays clean for the preview.
struct StderrProgress;

impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<()> {
    let args = Cli::parse();
    log::init(&LogOptions::from_verbosity(args.verbose));
    let opts = args.to_options();

    let outcome = scrape::run(&opts.source, Some(&mut StderrProgress))
        .wrap_err("could not fetch or read the page")?;
    let extraction = outcome.extraction;

    for w in &extraction.warnings {
        eprintln!("warning: {w}");
    }

    if extraction.is_empty() {
        print_no_records(&outcome.source, extraction.rows_seen);
        return Ok(());
    }

    println!(
        "Extracted {} records from {} ({}).",
        extraction.records.len(),
        outcome.source,
        outcome.origin.label()
    );

    let formatted = format::format_records(&extraction.records);
    match file::export(&opts.export, &formatted).wrap_err("export failed")? {
        ExportOutcome::Written { path, rows } => println!("Wrote {rows} rows to {}", path.display()),
        ExportOutcome::NothingToExport => println!("Nothing to export."),
    }

    if args.preview > 0 {
        let shown = format::truncate(&formatted, opts.export.max_rows);
        println!();
        for line in scrape::preview_lines(shown, args.preview) {
            println!("{line}");
        }
    }
    Ok(())
}

fn print_no_records(source: &Source, rows_seen: usize) {
    println!("No records extracted from {source} ({rows_seen} data rows found).");
    println!();
    println!("Likely causes:");
    println!("  1. Network problem or the request was blocked");
    println!("  2. The page layout changed (row/cell markers no longer match)");
    println!("  3. The table is filled in by JavaScript; try --method browser");
    if !crate::core::browser::available() {
        println!("     (this build has no browser support; rebuild with --features browser)");
    }
}
