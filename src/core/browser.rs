// src/core/browser.rs
//
// Headless Chrome fetch for pages whose table is filled in by JavaScript.
// Compiled only with the `browser` feature; without it `render` reports
// BrowserUnavailable so callers can surface a useful message.

use crate::error::Result;

#[cfg(feature = "browser")]
pub fn render(url: &str) -> Result<String> {
    use std::{ffi::OsStr, path::PathBuf, thread, time::Duration};

    use headless_chrome::{Browser, LaunchOptions};

    use crate::config::consts::{
        BROWSER_SETTLE_MS, BROWSER_WAIT_SECS, BROWSER_WINDOW, ROW_MARKER, ROW_MARKER_ATTR, USER_AGENT,
    };
    use crate::core::html::attr_eq;
    use crate::error::Error;

    let err = |what: &str, e: &dyn std::fmt::Display| Error::Browser(format!("{what}: {e}"));

    // Containers usually can't run Chrome's sandbox
    let in_container = std::path::Path::new("/.dockerenv").exists();

    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(!in_container)
        .window_size(Some(BROWSER_WINDOW))
        .path(std::env::var_os("CHROME_PATH").map(PathBuf::from))
        .args(vec![OsStr::new("--disable-gpu"), OsStr::new("--disable-dev-shm-usage")])
        .build()
        .map_err(|e| err("launch options", &e))?;

    logf!("Browser: launching headless Chrome for {url}");
    let browser = Browser::new(options).map_err(|e| err("launch", &e))?;
    let tab = browser.new_tab().map_err(|e| err("new tab", &e))?;

    tab.set_user_agent(USER_AGENT, None, None)
        .map_err(|e| err("user agent", &e))?;
    tab.navigate_to(url).map_err(|e| err("navigate", &e))?;
    tab.wait_until_navigated().map_err(|e| err("page load", &e))?;

    let rows = attr_eq("tr", ROW_MARKER_ATTR, ROW_MARKER);
    tab.wait_for_element_with_custom_timeout(&rows, Duration::from_secs(BROWSER_WAIT_SECS))
        .map_err(|e| err("waiting for table rows", &e))?;

    // Live fields keep updating for a moment after the rows appear
    thread::sleep(Duration::from_millis(BROWSER_SETTLE_MS));

    let html = tab.get_content().map_err(|e| err("page content", &e))?;
    logf!("Browser: rendered {} bytes", html.len());
    Ok(html)
}

#[cfg(not(feature = "browser"))]
pub fn render(url: &str) -> Result<String> {
    logw!("Browser: requested for {url}, but the `browser` feature is off");
    Err(crate::error::Error::BrowserUnavailable)
}

pub fn available() -> bool {
    cfg!(feature = "browser")
}
