//! Full engine path against a live mock server: real clients, real pool.

use std::sync::Arc;
use std::time::Duration;

use dirprobe_core::MatchCodeSet;
use dirprobe_engine::{NullProgress, ScanConfig, Scanner};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn scan_collects_exactly_the_interesting_paths() {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let server = runtime.block_on(MockServer::start());

    runtime.block_on(async {
        Mock::given(method("GET"))
            .and(path("/admin"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>admin</html>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/secret"))
            .respond_with(ResponseTemplate::new(403).set_body_string("no"))
            .mount(&server)
            .await;
        // Everything else falls through to wiremock's default 404.
    });

    let words = vec![
        "admin".to_owned(),
        "/secret".to_owned(),
        "missing".to_owned(),
        "also-missing".to_owned(),
    ];

    let scanner = Scanner::new(ScanConfig {
        base_url: server.uri(),
        worker_count: 4,
        timeout: Duration::from_secs(5),
        match_codes: MatchCodeSet::default(),
    });

    let report = scanner.run(words, Arc::new(NullProgress)).unwrap();

    assert_eq!(report.probes_completed, 4);

    let mut matches = report.matches;
    matches.sort();
    assert_eq!(matches.len(), 2);
    assert!(matches[0].starts_with("/admin "));
    assert!(matches[0].contains("[ Status: 200  Length: 18 ]"));
    assert!(matches[1].starts_with("/secret "));
    assert!(matches[1].contains("[ Status: 403  Length: 2 ]"));
}
