// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://finance.yahoo.com/screener/predefined/day_gainers";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// Browser fetch
pub const BROWSER_WAIT_SECS: u64 = 30;     // max wait for the first data row
pub const BROWSER_SETTLE_MS: u64 = 3_000;  // let live fields finish rendering
pub const BROWSER_WINDOW: (u32, u32) = (1920, 1080);

// Markup wire format (dictated by the site)
pub const ROW_MARKER_ATTR: &str = "data-testid";
pub const ROW_MARKER: &str = "data-table-v2-row";
pub const CELL_KEY_ATTR: &str = "data-testid-cell";
pub const STREAM_KEY_ATTR: &str = "data-field";
pub const RAW_VALUE_ATTR: &str = "data-value";
pub const STREAMER_TAG: &str = "fin-streamer";
pub const NO_DATA: &str = "--";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "stock_data";
pub const DEFAULT_MAX_ROWS: usize = 50;
pub const PREVIEW_ROWS: usize = 5;

// Logging
pub const LOG_DIR: &str = ".quote_scrape";
pub const LOG_FILE: &str = "debug.log";
