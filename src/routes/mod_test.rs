use super::*;
use crate::state::test_helpers;
use reqwest::StatusCode as HttpStatus;
use tokio::net::TcpListener;

/// Serve the router on an ephemeral port and return its base URL.
pub(crate) async fn spawn_app(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    tokio::spawn(async move {
        axum::serve(listener, app(state))
            .await
            .expect("test server failed");
    });
    format!("http://{addr}")
}

/// HTTP client that reports redirects instead of following them.
pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client should build")
}

#[tokio::test]
async fn root_redirects_to_home() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let res = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), HttpStatus::TEMPORARY_REDIRECT);
    assert_eq!(res.headers()["location"], "/home");
}

#[tokio::test]
async fn unknown_path_renders_not_found_page() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let res = client().get(format!("{base}/nowhere")).send().await.unwrap();
    assert_eq!(res.status(), HttpStatus::NOT_FOUND);
    let body = res.text().await.unwrap();
    assert!(body.contains("Page not found."));
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let res = client().get(format!("{base}{STYLESHEET_PATH}")).send().await.unwrap();
    assert_eq!(res.status(), HttpStatus::OK);
    assert!(res.headers()["content-type"].to_str().unwrap().starts_with("text/css"));
    assert_eq!(res.text().await.unwrap(), STYLESHEET);
}

#[tokio::test]
async fn healthz_ok() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let res = client().get(format!("{base}/healthz")).send().await.unwrap();
    assert_eq!(res.status(), HttpStatus::OK);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let base = spawn_app(test_helpers::test_app_state()).await;
    let res = client().get(format!("{base}/users/1/toggle")).send().await.unwrap();
    assert_eq!(res.status(), HttpStatus::METHOD_NOT_ALLOWED);
}
