//! Rate-limit header extraction
//!
//! Providers report quota through response headers. Extraction never fails:
//! a missing or unparseable header leaves the corresponding field unset.

use crate::domain::RateLimitInfo;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim)
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    header_str(headers, name).and_then(|v| v.parse().ok())
}

/// OpenAI-style `x-ratelimit-*` headers.
pub fn openai_rate_limit(headers: &HeaderMap) -> RateLimitInfo {
    RateLimitInfo {
        requests_limit: header_u64(headers, "x-ratelimit-limit-requests"),
        requests_remaining: header_u64(headers, "x-ratelimit-remaining-requests"),
        tokens_limit: header_u64(headers, "x-ratelimit-limit-tokens"),
        tokens_remaining: header_u64(headers, "x-ratelimit-remaining-tokens"),
        reset_after: header_str(headers, "x-ratelimit-reset-requests").and_then(parse_duration_secs),
    }
}

/// Anthropic `anthropic-ratelimit-*` headers. Reset is an RFC 3339 instant.
pub fn anthropic_rate_limit(headers: &HeaderMap, now: DateTime<Utc>) -> RateLimitInfo {
    RateLimitInfo {
        requests_limit: header_u64(headers, "anthropic-ratelimit-requests-limit"),
        requests_remaining: header_u64(headers, "anthropic-ratelimit-requests-remaining"),
        tokens_limit: header_u64(headers, "anthropic-ratelimit-tokens-limit"),
        tokens_remaining: header_u64(headers, "anthropic-ratelimit-tokens-remaining"),
        reset_after: header_str(headers, "anthropic-ratelimit-requests-reset")
            .and_then(|v| seconds_until(v, now)),
    }
}

/// Parses Go-style durations such as `1s`, `6m0s`, `1h2m3.5s` or `20ms`,
/// rounding up to whole seconds.
pub fn parse_duration_secs(value: &str) -> Option<u64> {
    let mut total_ms = 0f64;
    let mut rest = value.trim();
    if rest.is_empty() {
        return None;
    }

    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if split == 0 {
            return None;
        }
        let amount: f64 = rest[..split].parse().ok()?;
        rest = &rest[split..];

        let (factor, unit_len) = if rest.starts_with("ms") {
            (1.0, 2)
        } else if rest.starts_with('h') {
            (3_600_000.0, 1)
        } else if rest.starts_with('m') {
            (60_000.0, 1)
        } else if rest.starts_with('s') {
            (1_000.0, 1)
        } else {
            return None;
        };
        total_ms += amount * factor;
        rest = &rest[unit_len..];
    }

    Some((total_ms / 1000.0).ceil() as u64)
}

/// Whole seconds from `now` until the RFC 3339 instant, floored at zero.
pub fn seconds_until(value: &str, now: DateTime<Utc>) -> Option<u64> {
    let reset = DateTime::parse_from_rfc3339(value).ok()?;
    let delta = reset.with_timezone(&Utc) - now;
    Some(delta.num_seconds().max(0) as u64)
}
