use dns_unlocker_domain::{DnsServerAddress, ProbeOutcome, ProbeResult, StatusLine, UnreachableCause};

#[test]
fn test_status_line_parse_ok() {
    let status = StatusLine::parse("200 OK").unwrap();
    assert_eq!(status.code, 200);
    assert_eq!(status.text, "OK");
    assert!(status.is_ok());
    assert!(status.is_success());
}

#[test]
fn test_status_line_keeps_multi_word_reason() {
    let status = StatusLine::parse("404 Not Found").unwrap();
    assert_eq!(status.code, 404);
    assert_eq!(status.text, "Not Found");
    assert!(!status.is_success());
}

#[test]
fn test_status_line_rejects_missing_separator() {
    assert!(StatusLine::parse("200").is_none());
    assert!(StatusLine::parse("").is_none());
}

#[test]
fn test_status_line_rejects_non_numeric_code() {
    assert!(StatusLine::parse("OK 200").is_none());
}

#[test]
fn test_status_line_partial_content_is_success_not_ok() {
    let status = StatusLine::parse("206 Partial Content").unwrap();
    assert!(status.is_success());
    assert!(!status.is_ok());
}

#[test]
fn test_classify_200_is_reachable() {
    let outcome = ProbeOutcome::classify("200 OK");
    assert_eq!(
        outcome,
        ProbeOutcome::Reachable {
            status_code: 200,
            status_text: "OK".to_string()
        }
    );
    assert_eq!(outcome.label(), "OK");
}

#[test]
fn test_classify_403_is_unreachable() {
    let outcome = ProbeOutcome::classify("403 Forbidden");
    assert!(!outcome.is_reachable());
    assert_eq!(
        outcome,
        ProbeOutcome::Unreachable(UnreachableCause::UnexpectedStatus {
            code: 403,
            text: "Forbidden".to_string()
        })
    );
    assert_eq!(outcome.label(), "Forbidden");
}

#[test]
fn test_classify_redirect_is_unreachable() {
    assert!(!ProbeOutcome::classify("301 Moved Permanently").is_reachable());
}

#[test]
fn test_classify_garbage_is_invalid() {
    let outcome = ProbeOutcome::classify("garbage");
    assert!(matches!(
        outcome,
        ProbeOutcome::Unreachable(UnreachableCause::InvalidStatusLine(_))
    ));
    assert_eq!(outcome.label(), "Invalid");
}

#[test]
fn test_request_failed_label() {
    let outcome = ProbeOutcome::request_failed("connection refused");
    assert!(!outcome.is_reachable());
    assert_eq!(outcome.label(), "Error");
}

#[test]
fn test_probe_result_reachability_follows_outcome() {
    let result = ProbeResult::new(
        DnsServerAddress::new("1.1.1.1"),
        ProbeOutcome::classify("200 OK"),
    );
    assert!(result.is_reachable());
    assert_eq!(result.server.as_str(), "1.1.1.1");
}
