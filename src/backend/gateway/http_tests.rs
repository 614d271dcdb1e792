//! Tests for the HTTP backend gateway.

type FixtureResult<T> = Result<T, Box<dyn std::error::Error>>;

use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::HttpBackendGateway;
use crate::backend::error::DashboardError;
use crate::backend::gateway::{BackendGateway, BackendStatus};

struct GatewayFixture {
    runtime: Runtime,
    server: MockServer,
    gateway: HttpBackendGateway,
}

impl GatewayFixture {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

#[fixture]
fn gateway_fixture() -> FixtureResult<GatewayFixture> {
    let runtime = Runtime::new()?;
    let server = runtime.block_on(MockServer::start());
    let gateway = HttpBackendGateway::from_base_url(&server.uri())?;
    Ok(GatewayFixture {
        runtime,
        server,
        gateway,
    })
}

#[rstest]
fn list_repositories_returns_repositories(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!([
        { "id": 1, "full_name": "octocat/hello-world" },
        { "id": 2, "full_name": "octocat/spoon-knife" }
    ]));

    fixture.block_on(
        Mock::given(method("GET"))
            .and(path("/api/repos"))
            .and(header("cache-control", "no-cache"))
            .respond_with(response)
            .mount(&fixture.server),
    );

    let result = fixture
        .block_on(fixture.gateway.list_repositories())
        .expect("request should succeed");

    assert_eq!(result.len(), 2, "expected two repositories");
    let first = result.first().expect("should have first repository");
    assert_eq!(first.id, 1);
    assert_eq!(first.full_name, "octocat/hello-world");
}

#[rstest]
fn list_repositories_maps_server_errors(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.block_on(
        Mock::given(method("GET"))
            .and(path("/api/repos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&fixture.server),
    );

    let error = fixture
        .block_on(fixture.gateway.list_repositories())
        .expect_err("request should fail");

    assert_eq!(
        error,
        DashboardError::Api {
            status: 500,
            status_text: "Internal Server Error".to_owned(),
        }
    );
    assert_eq!(error.to_string(), "API error: 500 Internal Server Error");
}

#[rstest]
fn list_pull_requests_scopes_to_repository(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!([
        {
            "id": 10,
            "pr_number": 5,
            "title": "Fix login bug",
            "state": "open",
            "head_sha": "abc1234def5678",
            "last_reviewed_at": null
        }
    ]));

    fixture.block_on(
        Mock::given(method("GET"))
            .and(path("/api/repos/3/prs"))
            .respond_with(response)
            .mount(&fixture.server),
    );

    let result = fixture
        .block_on(fixture.gateway.list_pull_requests(3))
        .expect("request should succeed");

    assert_eq!(result.len(), 1);
    let pull_request = result.first().expect("should have one pull request");
    assert_eq!(pull_request.pr_number, 5);
    assert_eq!(pull_request.title.as_deref(), Some("Fix login bug"));
    assert!(pull_request.last_reviewed_at.is_none());
}

#[rstest]
fn list_issues_returns_empty_list(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.block_on(
        Mock::given(method("GET"))
            .and(path("/api/prs/42/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&fixture.server),
    );

    let result = fixture
        .block_on(fixture.gateway.list_issues(42))
        .expect("request should succeed");

    assert!(result.is_empty(), "expected empty list");
}

#[rstest]
fn trigger_review_reports_discovered_issue_count(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.block_on(
        Mock::given(method("POST"))
            .and(path("/api/prs/42/trigger-review"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "issues": 3 })))
            .mount(&fixture.server),
    );

    let outcome = fixture
        .block_on(fixture.gateway.trigger_review(42))
        .expect("request should succeed");

    assert_eq!(outcome.issues, 3);
}

#[rstest]
fn trigger_review_surfaces_backend_detail(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    let response = ResponseTemplate::new(409).set_body_json(serde_json::json!({
        "detail": "review already in progress"
    }));

    fixture.block_on(
        Mock::given(method("POST"))
            .and(path("/api/prs/42/trigger-review"))
            .respond_with(response)
            .mount(&fixture.server),
    );

    let error = fixture
        .block_on(fixture.gateway.trigger_review(42))
        .expect_err("request should fail");

    assert_eq!(
        error,
        DashboardError::Review {
            message: "review already in progress".to_owned(),
        }
    );
}

#[rstest]
fn trigger_review_falls_back_to_http_status(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.block_on(
        Mock::given(method("POST"))
            .and(path("/api/prs/42/trigger-review"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&fixture.server),
    );

    let error = fixture
        .block_on(fixture.gateway.trigger_review(42))
        .expect_err("request should fail");

    match error {
        DashboardError::Review { message } => {
            assert_eq!(message, "HTTP 502");
        }
        other => panic!("expected Review error, got {other:?}"),
    }
}

#[rstest]
fn health_reports_online_for_success(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.block_on(
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })))
            .mount(&fixture.server),
    );

    let status = fixture.block_on(fixture.gateway.health());
    assert_eq!(status, BackendStatus::Online);
}

#[rstest]
fn health_reports_offline_for_server_error(gateway_fixture: FixtureResult<GatewayFixture>) {
    let fixture = gateway_fixture.expect("fixture should succeed");

    fixture.block_on(
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&fixture.server),
    );

    let status = fixture.block_on(fixture.gateway.health());
    assert_eq!(status, BackendStatus::Offline);
}

#[test]
fn health_reports_offline_when_unreachable() {
    let runtime = Runtime::new().expect("runtime should start");
    // Port reserved for discard-style testing; nothing listens there.
    let gateway = HttpBackendGateway::from_base_url("http://127.0.0.1:9")
        .expect("gateway should build");

    let status = runtime.block_on(gateway.health());
    assert_eq!(status, BackendStatus::Offline);
}

#[test]
fn from_base_url_rejects_invalid_urls() {
    let error = HttpBackendGateway::from_base_url("not a url").expect_err("parse should fail");
    assert!(matches!(error, DashboardError::InvalidUrl(_)));
}
