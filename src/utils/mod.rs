//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::{AppError, Result};

/// Join path segments onto a base URL.
///
/// Directory URLs get a trailing slash, which the feed's listing server
/// requires to avoid a redirect per request.
pub fn join_segments(base: &str, segments: &[&str], directory: bool) -> Result<String> {
    let mut url = Url::parse(base)?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| AppError::config(format!("base URL cannot have segments: {base}")))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
        if directory {
            path.push("");
        }
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_directory_url() {
        let url = join_segments(
            "https://dd.weather.gc.ca/alerts/cap",
            &["20240115", "CWVR", "05"],
            true,
        )
        .unwrap();
        assert_eq!(url, "https://dd.weather.gc.ca/alerts/cap/20240115/CWVR/05/");
    }

    #[test]
    fn test_join_file_url() {
        let url = join_segments(
            "https://dd.weather.gc.ca/alerts/cap/",
            &["20240115", "CWVR", "05", "bulletin.cap"],
            false,
        )
        .unwrap();
        assert_eq!(
            url,
            "https://dd.weather.gc.ca/alerts/cap/20240115/CWVR/05/bulletin.cap"
        );
    }

    #[test]
    fn test_join_rejects_invalid_base() {
        assert!(join_segments("not a url", &["x"], true).is_err());
    }
}
