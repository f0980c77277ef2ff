use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .user_agent(concat!("hwibot/", env!("CARGO_PKG_VERSION")))
        .build()
}
