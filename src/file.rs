// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{Error, Result};
use crate::format::truncate;
use crate::record::{headers, FormattedRecord};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Zero records: no file was created or touched.
    NothingToExport,
}

/// Write the records to `export.out_path()` as CSV or TSV.
///
/// At most `export.max_rows` records are written, in order; when that leaves
/// nothing (no records, or a cap of 0) no file is touched. Failure to create
/// the directory or the file comes back as `Error::ExportTarget`; the caller's
/// records are untouched, so the export can be retried with another path.
pub fn export(export: &ExportOptions, records: &[FormattedRecord]) -> Result<ExportOutcome> {
    let rows = truncate(records, export.max_rows);
    if rows.is_empty() {
        logf!("Export: nothing to export");
        return Ok(ExportOutcome::NothingToExport);
    }

    let path = export.out_path();
    let target = |source: io::Error| Error::ExportTarget { path: path.clone(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(target)?;
        }
    }

    let file = File::create(&path).map_err(target)?;
    write_records(BufWriter::new(file), export, rows).map_err(|e| target(e.into()))?;

    logf!("Export: {} rows → {}", rows.len(), path.display());
    Ok(ExportOutcome::Written { path, rows: rows.len() })
}

/// Same bytes the export would write, as a string (clipboard copy).
pub fn to_export_string(export: &ExportOptions, records: &[FormattedRecord]) -> Result<String> {
    let rows = truncate(records, export.max_rows);
    let mut buf = Vec::new();
    write_records(&mut buf, export, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_records<W: Write>(w: W, export: &ExportOptions, rows: &[FormattedRecord]) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(export.format.delim())
        .from_writer(w);

    if export.include_headers {
        wtr.write_record(headers())?;
    }
    for row in rows {
        wtr.write_record(row.cells())?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Read a saved page. Invalid UTF-8 is replaced rather than rejected.
pub fn read_page(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    logd!("File: read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
