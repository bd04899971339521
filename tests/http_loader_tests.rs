use std::sync::Arc;

use vista::router::{
    HttpLoader, LoadError, NavigationTarget, Route, RouteTable, Router, ViewLoader,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// JSON body for the shared chunk holding both default pages.
fn dev_tools_chunk() -> serde_json::Value {
    serde_json::json!({
        "views": {
            "page1": { "id": "page1", "title": "Remote Page 1", "body": "one" },
            "page2": { "id": "page2", "title": "Remote Page 2", "body": "two" }
        }
    })
}

fn router_for(server: &MockServer) -> Router {
    Router::new(
        RouteTable::default(),
        Arc::new(HttpLoader::new(format!("{}/chunks", server.uri()))),
    )
}

fn route(router: &Router, location: &str) -> Route {
    router
        .resolve(&NavigationTarget::Path(location.to_string()))
        .cloned()
        .expect("route should exist")
}

// ============================================================================
// HttpLoader Tests
// ============================================================================

#[tokio::test]
async fn test_http_loader_fetches_chunk() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dev_tools_chunk()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let loader = HttpLoader::new(format!("{}/chunks", mock_server.uri()));
    let chunk = loader.load_chunk("dev-tools").await.unwrap();

    assert_eq!(chunk.views.len(), 2);
    assert_eq!(chunk.view("page2").map(|v| v.body.as_str()), Some("two"));
}

#[tokio::test]
async fn test_http_loader_reports_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/missing.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let loader = HttpLoader::new(format!("{}/chunks", mock_server.uri()));
    let err = loader.load_chunk("missing").await.unwrap_err();

    assert_eq!(
        err,
        LoadError::Status {
            status: 404,
            chunk: "missing".to_string(),
        }
    );
}

#[tokio::test]
async fn test_http_loader_reports_bad_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let loader = HttpLoader::new(format!("{}/chunks", mock_server.uri()));
    let err = loader.load_chunk("dev-tools").await.unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn test_http_loader_reports_wrong_shape() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "views": 3 })))
        .mount(&mock_server)
        .await;

    let loader = HttpLoader::new(format!("{}/chunks", mock_server.uri()));
    let err = loader.load_chunk("dev-tools").await.unwrap_err();

    assert!(matches!(err, LoadError::Parse(_)));
}

#[tokio::test]
async fn test_http_loader_network_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let loader = HttpLoader::new("http://127.0.0.1:9/chunks");
    let err = loader.load_chunk("dev-tools").await.unwrap_err();

    assert!(matches!(err, LoadError::Network(_)));
}

// ============================================================================
// Router over HTTP
// ============================================================================

#[tokio::test]
async fn test_shared_chunk_is_requested_once() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dev_tools_chunk()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let router = router_for(&mock_server);
    let page1 = tokio_test::assert_ok!(router.load(&route(&router, "/page1")).await);
    let page2 = tokio_test::assert_ok!(router.load(&route(&router, "/page2")).await);

    assert_eq!(page1.title, "Remote Page 1");
    assert_eq!(page2.title, "Remote Page 2");
    // `expect(1)` is verified when the server drops.
}

#[tokio::test]
async fn test_failed_chunk_is_fetched_again_on_next_navigation() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dev_tools_chunk()))
        .mount(&mock_server)
        .await;

    let router = router_for(&mock_server);
    let page1 = route(&router, "/page1");

    let err = router.load(&page1).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 503, .. }));

    let view = tokio_test::assert_ok!(router.load(&page1).await);
    assert_eq!(view.id, "page1");
}

#[tokio::test]
async fn test_chunk_without_requested_view() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chunks/dev-tools.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "views": { "page1": { "id": "page1", "title": "Only One" } }
        })))
        .mount(&mock_server)
        .await;

    let router = router_for(&mock_server);
    let err = router.load(&route(&router, "/page2")).await.unwrap_err();

    assert_eq!(
        err,
        LoadError::MissingView {
            chunk: "dev-tools".to_string(),
            view: "page2".to_string(),
        }
    );
}
