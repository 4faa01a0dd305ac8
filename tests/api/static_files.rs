use reqwest::{Method, StatusCode};

use crate::helpers::{TestApp, INDEX_HTML};

#[tokio::test]
async fn root_serves_index_html() {
    let app = TestApp::spawn().await;

    let res = app
        .request(Method::GET, "")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    assert_eq!(INDEX_HTML, res.text().await.unwrap());
}

#[tokio::test]
async fn static_files_get_inferred_content_type() {
    let app = TestApp::spawn().await;
    std::fs::write(app.static_dir.join("styles.css"), "body { margin: 0; }").unwrap();

    let res = app
        .request(Method::GET, "styles.css")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::OK, res.status());
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/css"));
    assert_eq!("body { margin: 0; }", res.text().await.unwrap());
}

#[tokio::test]
async fn unmapped_path_returns_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .request(Method::GET, "no-existe.html")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());
}
