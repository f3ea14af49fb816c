use super::{FileUtils, StringUtils, UrlUtils};
use crate::error::ApiError;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn validate_url_defaults_to_https() {
    let url = UrlUtils::validate_url("api.example.com").expect("valid url");
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api.example.com"));
}

#[test]
fn validate_url_keeps_explicit_http() {
    let url = UrlUtils::validate_url("http://127.0.0.1:5000").expect("valid url");
    assert_eq!(url.scheme(), "http");
    assert_eq!(url.port(), Some(5000));
}

#[test]
fn validate_url_rejects_invalid_input() {
    let err = UrlUtils::validate_url("http://").expect_err("invalid url");
    assert!(matches!(err, ApiError::InvalidUrl(_)));

    let err = UrlUtils::validate_url("ftp://example.com").expect_err("bad scheme");
    assert!(matches!(err, ApiError::InvalidUrl(_)));
}

#[test]
fn join_endpoint_handles_slashes() {
    assert_eq!(
        UrlUtils::join_endpoint("https://api.example.com", "/api/stream-links"),
        "https://api.example.com/api/stream-links"
    );
    assert_eq!(
        UrlUtils::join_endpoint("https://api.example.com/", "api/stream-links"),
        "https://api.example.com/api/stream-links"
    );
    assert_eq!(
        UrlUtils::join_endpoint("https://api.example.com//", "/health"),
        "https://api.example.com/health"
    );
}

#[test]
fn expand_path_expands_home() {
    let home = dirs::home_dir().expect("home dir");
    let path = FileUtils::expand_path("~/cookies.txt").expect("expanded");
    assert_eq!(path, home.join("cookies.txt"));

    let bare = FileUtils::expand_path("~").expect("expanded");
    assert_eq!(bare, home);
}

#[test]
fn expand_path_leaves_non_tilde_unchanged() {
    let path = FileUtils::expand_path("/tmp/cookies.txt").expect("expanded");
    assert_eq!(path, PathBuf::from("/tmp/cookies.txt"));
}

#[test]
fn check_file_readable_validates_paths() {
    let temp = tempdir().expect("tempdir");
    let file_path = temp.path().join("file.txt");
    fs::write(&file_path, "data").expect("write file");
    FileUtils::check_file_readable(&file_path).expect("readable file");

    let err =
        FileUtils::check_file_readable(&temp.path().join("missing")).expect_err("missing file");
    assert!(matches!(err, ApiError::FileNotFound(_)));

    let err = FileUtils::check_file_readable(temp.path()).expect_err("dir path");
    assert!(matches!(err, ApiError::Config(_)));
}

#[test]
fn parse_timeout_parses_suffixes() {
    assert_eq!(
        StringUtils::parse_timeout("10").expect("seconds"),
        Duration::from_secs(10)
    );
    assert_eq!(
        StringUtils::parse_timeout("2m").expect("minutes"),
        Duration::from_secs(120)
    );
    assert_eq!(
        StringUtils::parse_timeout("1h").expect("hours"),
        Duration::from_secs(3600)
    );

    let err = StringUtils::parse_timeout("5x").expect_err("invalid suffix");
    assert!(matches!(err, ApiError::Config(_)));

    let err = StringUtils::parse_timeout("xs").expect_err("invalid number");
    assert!(matches!(err, ApiError::Config(_)));
}

#[test]
fn parse_timeout_rejects_overflowing_values() {
    let err = StringUtils::parse_timeout("5124095576030432h").expect_err("overflow");
    assert!(matches!(err, ApiError::Config(_)));

    let err = StringUtils::parse_timeout(&format!("{}m", u64::MAX)).expect_err("overflow");
    assert!(matches!(err, ApiError::Config(_)));
}

#[test]
fn parse_timeout_rejects_zero() {
    for input in ["0", "0s", "0m", "0h"] {
        let err = StringUtils::parse_timeout(input).expect_err("zero timeout");
        assert!(matches!(err, ApiError::Config(_)), "{input} should be rejected");
    }
}
