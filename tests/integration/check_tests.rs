use crate::common::{
    checker, checker_with, closed_address, hardened_page, redirect_chain, serve,
    PAGE_WITHOUT_DESCRIPTION,
};
use site_audit::config::FetcherConfig;
use site_audit::ReportStatus;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FETCH_FAILED_PREFIX: &str = "Failed to fetch website: ";

#[tokio::test]
async fn test_check_plain_http_page() {
    let mock_server = serve("/", hardened_page(PAGE_WITHOUT_DESCRIPTION)).await;
    let url = mock_server.uri();

    let report = checker().check(&url).await;

    assert_eq!(report.url, url);
    assert_eq!(report.status_code, Some(200));
    assert!(report.response_time.is_some());
    assert_eq!(
        report.issues,
        vec!["Missing meta description", "Website is not using HTTPS"]
    );
    assert!(report
        .recommendations
        .contains(&"Enable HTTPS to protect data in transit".to_string()));
    assert_eq!(report.seo_score, Some(85));
    assert_eq!(report.security_score, Some(70));
    assert_eq!(report.performance_score, Some(100));
    assert_eq!(report.status, ReportStatus::Warning);
}

#[tokio::test]
async fn test_missing_headers_become_recommendations() {
    let template = ResponseTemplate::new(200).set_body_string(PAGE_WITHOUT_DESCRIPTION);
    let mock_server = serve("/", template).await;

    let report = checker().check(&mock_server.uri()).await;

    assert_eq!(report.security_score, Some(30));
    for header in [
        "Strict-Transport-Security",
        "X-Frame-Options",
        "X-Content-Type-Options",
        "Content-Security-Policy",
    ] {
        let expected = format!("Consider adding {} header", header);
        assert!(
            report.recommendations.contains(&expected),
            "missing recommendation: {}",
            expected
        );
    }
    assert_eq!(report.status, ReportStatus::Warning);
}

#[tokio::test]
async fn test_server_error_page() {
    let template = ResponseTemplate::new(500).set_body_string("<html><body>oops</body></html>");
    let mock_server = serve("/", template).await;

    let report = checker().check(&mock_server.uri()).await;

    assert_eq!(report.status_code, Some(500));
    assert_eq!(report.issues.first().map(String::as_str), Some("Server error (500)"));
    assert_eq!(report.status, ReportStatus::Error);
    assert!(report.seo_score.is_some());
}

#[tokio::test]
async fn test_not_found_page_is_analyzed() {
    let mock_server = MockServer::start().await;
    let report = checker()
        .check(&format!("{}/missing", mock_server.uri()))
        .await;

    assert_eq!(report.status_code, Some(404));
    assert_eq!(report.issues.first().map(String::as_str), Some("Client error (404)"));
    assert!(report.performance_score.is_some());
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(hardened_page(PAGE_WITHOUT_DESCRIPTION))
        .mount(&mock_server)
        .await;

    let url = format!("{}/old", mock_server.uri());
    let report = checker().check(&url).await;

    assert_eq!(report.url, url);
    assert_eq!(report.status_code, Some(200));
    assert!(!report.issues.iter().any(|i| i.starts_with("Redirect detected")));
}

#[tokio::test]
async fn test_redirect_loop_is_a_fetch_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
        .mount(&mock_server)
        .await;

    let report = checker()
        .check(&format!("{}/loop", mock_server.uri()))
        .await;

    assert_eq!(report.status, ReportStatus::Error);
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].starts_with(FETCH_FAILED_PREFIX));
    assert_eq!(report.status_code, None);
}

#[tokio::test]
async fn test_redirect_chain_at_cap_is_followed() {
    let max_redirects = FetcherConfig::default().max_redirects;
    let mock_server = redirect_chain(max_redirects).await;

    let report = checker()
        .check(&format!("{}/r0", mock_server.uri()))
        .await;

    assert!(!report.is_fetch_failure(), "issues: {:?}", report.issues);
    assert_eq!(report.status_code, Some(200));
    assert_eq!(report.seo_score, Some(85));
}

#[tokio::test]
async fn test_redirect_chain_over_cap_is_a_fetch_failure() {
    let max_redirects = FetcherConfig::default().max_redirects;
    let mock_server = redirect_chain(max_redirects + 1).await;

    let report = checker()
        .check(&format!("{}/r0", mock_server.uri()))
        .await;

    assert!(report.is_fetch_failure());
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].starts_with(FETCH_FAILED_PREFIX));
    assert!(report.issues[0].contains("too many redirects"));
    assert_eq!(report.status_code, None);
}

#[tokio::test]
async fn test_zero_redirect_cap_follows_nothing() {
    let mock_server = redirect_chain(1).await;

    let checker = checker_with(FetcherConfig {
        max_redirects: 0,
        ..FetcherConfig::default()
    });
    let report = checker.check(&format!("{}/r0", mock_server.uri())).await;

    assert!(report.is_fetch_failure());
    assert_eq!(report.status_code, None);
}

#[tokio::test]
async fn test_connection_refused_is_a_fetch_failure() {
    let url = format!("http://{}", closed_address());

    let report = checker().check(&url).await;

    assert_eq!(report.url, url);
    assert_eq!(report.status, ReportStatus::Error);
    assert_eq!(report.issues.len(), 1);
    assert!(report.issues[0].starts_with(FETCH_FAILED_PREFIX));
    assert_eq!(
        report.recommendations,
        vec!["Ensure the website is accessible and not blocking requests"]
    );
    assert_eq!(report.status_code, None);
    assert_eq!(report.response_time, None);
    assert_eq!(report.seo_score, None);
    assert_eq!(report.performance_score, None);
    assert_eq!(report.security_score, None);
}

#[tokio::test]
async fn test_timeout_is_a_fetch_failure() {
    let template = hardened_page(PAGE_WITHOUT_DESCRIPTION).set_delay(Duration::from_secs(3));
    let mock_server = serve("/", template).await;

    let checker = checker_with(FetcherConfig {
        timeout_secs: 1,
        ..FetcherConfig::default()
    });
    let report = checker.check(&mock_server.uri()).await;

    assert_eq!(
        report.issues,
        vec!["Failed to fetch website: Request timed out after 1s"]
    );
    assert_eq!(report.status, ReportStatus::Error);
}

#[tokio::test]
async fn test_schemeless_target_is_fetched_over_https() {
    let mock_server = serve("/", hardened_page(PAGE_WITHOUT_DESCRIPTION)).await;
    let host = mock_server
        .uri()
        .trim_start_matches("http://")
        .to_string();

    let report = checker().check(&host).await;

    // The mock only speaks plain HTTP, so the TLS handshake fails
    assert_eq!(report.url, format!("https://{}", host));
    assert!(report.is_fetch_failure());
}

#[tokio::test]
async fn test_repeated_checks_agree() {
    let mock_server = serve("/", hardened_page(PAGE_WITHOUT_DESCRIPTION)).await;
    let checker = checker();

    let first = checker.check(&mock_server.uri()).await;
    let second = checker.check(&mock_server.uri()).await;

    assert_eq!(first.issues, second.issues);
    assert_eq!(first.seo_score, second.seo_score);
    assert_eq!(first.performance_score, second.performance_score);
    assert_eq!(first.security_score, second.security_score);
}
