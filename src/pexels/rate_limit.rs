use std::str::FromStr;

use reqwest::header::HeaderMap;
use serde::Serialize;

const LIMIT_HEADER: &str = "X-Ratelimit-Limit";
const REMAINING_HEADER: &str = "X-Ratelimit-Remaining";
const RESET_HEADER: &str = "X-Ratelimit-Reset";

/// Last known request quota, as reported by the most recent response.
///
/// Best-effort telemetry only. Concurrent requests update it in completion
/// order, so it must not be used to gate new requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RateLimit {
    limit: Option<u32>,
    remaining: Option<u32>,
    reset: Option<u64>,
}

impl RateLimit {
    /// Requests allowed in the current window.
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Requests left in the current window.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// UNIX timestamp at which the window resets.
    pub fn reset(&self) -> Option<u64> {
        self.reset
    }

    /// Overwrites each counter whose header is present and numeric.
    /// Missing or malformed headers leave the previous value in place.
    pub(crate) fn update(&mut self, headers: &HeaderMap) {
        if let Some(limit) = parse_header(headers, LIMIT_HEADER) {
            self.limit = Some(limit);
        }

        if let Some(remaining) = parse_header(headers, REMAINING_HEADER) {
            self.remaining = Some(remaining);
        }

        if let Some(reset) = parse_header(headers, RESET_HEADER) {
            self.reset = Some(reset);
        }
    }
}

fn parse_header<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    let value = headers.get(name)?;

    let parsed = value
        .to_str()
        .ok()
        .and_then(|value| value.trim().parse().ok());

    if parsed.is_none() {
        tracing::warn!(header = name, ?value, "ignoring malformed rate limit header");
    }

    parsed
}
