// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. A spec encodes *where the ground truth
//! lives in the HTML* for one kind of page and *how to pull it out tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing**: a spec takes the document as `&str` and returns values.
//!   It never fetches, never writes, and never formats for display.
//! - **Selector choice**: the row marker, the per-field cell keys and the probe
//!   used inside each cell (nested element text, live-streamer value, plain cell
//!   text, the two 52-week range labels).
//! - **Tolerant extraction**: a field that can't be found is left out of its record
//!   rather than failing the row; a row that can't be read is skipped with a
//!   warning rather than failing the page.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`, `core::browser`, orchestrated by `scrape`).
//! - **Display formatting, truncation and export** (`format`, `file`).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::run → core::net / core::browser → specs::quotes::extract
//!                        ↘ format::format_records → file::export
//! ```
//!
//! ## Conventions & invariants
//! - The attribute scheme (`data-testid`, `data-testid-cell`, `data-field`,
//!   `data-value`) is a fixed external format; the literals live in `config::consts`.
//! - Records come back in document order, uncapped.
//! - Selectors are compiled once per document, never per row.
//!
//! ## Current specs
//! - `quotes` – the screener quote table (one record per data row, eleven fields).
//!
//! ## Testing notes
//! Specs are tested offline against saved pages (`tests/fixtures/`).
pub mod quotes;
