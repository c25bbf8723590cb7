// src/core/net.rs

// Sequential HTTPS GET. The stat sites reject plain HTTP, so the fetch is
// backed by a blocking reqwest client; the surface stays a single function.
// No retries: a failed fetch aborts the run.

use std::{error::Error, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
