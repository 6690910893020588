//! Console output.
//!
//! Formatting lives in small pure functions returning `String`s so tests can
//! check them; the `print_*` wrappers just write them to stdout.  Output is
//! meant for people, not for parsing, and its order follows result arrival.

use crate::fetch::ApiResult;
use crate::summary::Summary;

pub fn start_banner(summary: &Summary, targets: usize) -> String {
    format!(
        "Fetching {targets} endpoint(s) concurrently (started {})...",
        summary.started_at().format("%Y-%m-%d %H:%M:%S")
    )
}

/// Header line naming where a result came from and how long it took.
pub fn result_header(result: &ApiResult) -> String {
    format!("Result from: {} (took {:?})", result.url(), result.latency())
}

/// Either the error or the payload, with its size.
pub fn result_detail(result: &ApiResult) -> String {
    match result.outcome() {
        Ok(body) => format!(
            "Received {} bytes: {}",
            body.len(),
            String::from_utf8_lossy(body)
        ),
        Err(error) => format!("Error: {error}"),
    }
}

pub fn closed_line(workers: usize) -> String {
    format!("All {workers} worker(s) finished, closing result channel.")
}

pub fn finish_banner(summary: &Summary) -> String {
    format!(
        "Processed {} result(s): {} ok, {} failed, {:?} total.",
        summary.total(),
        summary.succeeded(),
        summary.failed(),
        summary.elapsed()
    )
}

pub fn print_start(summary: &Summary, targets: usize) {
    println!("{}", start_banner(summary, targets));
    println!("Waiting for results...");
}

pub fn print_result(result: &ApiResult) {
    println!();
    println!("{}", result_header(result));
    println!("{}", result_detail(result));
}

pub fn print_closed(workers: usize) {
    println!("{}", closed_line(workers));
}

pub fn print_finish(summary: &Summary) {
    println!();
    println!("{}", finish_banner(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bytes::Bytes;

    use crate::fetch::{FetchError, FetchTarget};

    fn target() -> FetchTarget {
        FetchTarget::new("http://example.com/get")
    }

    #[test]
    fn header_names_url_and_latency() {
        let result = ApiResult::success(&target(), Bytes::new(), Duration::from_millis(250));
        assert_eq!(
            result_header(&result),
            "Result from: http://example.com/get (took 250ms)"
        );
    }

    #[test]
    fn detail_shows_size_and_content_on_success() {
        let result = ApiResult::success(&target(), Bytes::from_static(b"hello"), Duration::ZERO);
        assert_eq!(result_detail(&result), "Received 5 bytes: hello");
    }

    #[test]
    fn detail_shows_error_on_failure() {
        let result = ApiResult::failure(&target(), FetchError::UnexpectedStatus(500), Duration::ZERO);
        assert_eq!(result_detail(&result), "Error: unexpected status code: 500");
    }

    #[test]
    fn detail_tolerates_binary_payloads() {
        let result = ApiResult::success(&target(), Bytes::from_static(&[0xff, b'a']), Duration::ZERO);
        assert!(result_detail(&result).starts_with("Received 2 bytes: "));
    }

    #[test]
    fn finish_banner_reports_counts() {
        let mut summary = Summary::start();
        summary.record(&ApiResult::success(&target(), Bytes::new(), Duration::ZERO));
        summary.record(&ApiResult::failure(&target(), FetchError::UnexpectedStatus(502), Duration::ZERO));

        let banner = finish_banner(&summary);
        assert!(banner.starts_with("Processed 2 result(s): 1 ok, 1 failed, "));
    }

    #[test]
    fn start_banner_counts_targets() {
        let banner = start_banner(&Summary::start(), 2);
        assert!(banner.starts_with("Fetching 2 endpoint(s) concurrently (started "));
    }
}
