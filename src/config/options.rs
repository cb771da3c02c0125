// src/config/options.rs
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
}

/* ---------------- Source ---------------- */

/// Where the HTML comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// "http(s)://…" → Url, anything else non-empty → File.
    pub fn parse(text: &str) -> Option<Source> {
        let t = text.trim();
        if t.is_empty() {
            return None;
        }
        let lc = t.to_ascii_lowercase();
        if lc.starts_with("http://") || lc.starts_with("https://") {
            Some(Source::Url(s!(t)))
        } else {
            Some(Source::File(PathBuf::from(t)))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(p) => write!(f, "{}", p.display()),
            Source::Url(u) => f.write_str(u),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMethod {
    /// Plain HTTP first, headless browser if that yields nothing
    #[default]
    Auto,
    Http,
    Browser,
}

impl FetchMethod {
    pub fn label(self) -> &'static str {
        match self {
            FetchMethod::Auto => "Auto",
            FetchMethod::Http => "HTTP",
            FetchMethod::Browser => "Browser",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub source: Option<Source>,
    pub method: FetchMethod,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            source: Some(Source::Url(s!(DEFAULT_URL))),
            method: FetchMethod::Auto,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Hard cap applied once, right before writing
    pub max_rows: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl ExportOptions {
    /// dir / stem . ext, where ext is the user's own extension if they typed one,
    /// otherwise the format's.
    pub fn out_path(&self) -> PathBuf {
        let ext = self
            .out_path
            .ext
            .clone()
            .unwrap_or_else(|| OsString::from(self.format.ext()));
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        name.push(ext);
        Self::join_dir_and_filename(&self.out_path.dir, name)
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(OsStr::to_os_string);
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// True when the user never touched the path.
    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }

    pub fn join_dir_and_filename(dir: &Path, file_name: impl AsRef<Path>) -> PathBuf {
        if dir.as_os_str().is_empty() {
            file_name.as_ref().to_path_buf()
        } else {
            dir.join(file_name)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,      // without extension
    ext: Option<OsString>,    // only when typed by the user
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
