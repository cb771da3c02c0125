// src/core/net.rs

// Plain HTTP GET. Pages rendered client-side come back without rows;
// see core/browser.rs for those.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    logd!("HTTP: GET {url}");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    logd!("HTTP: {} bytes from {url}", body.len());
    Ok(body)
}
