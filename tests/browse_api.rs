// tests/browse_api.rs


use std::fs;

use axum::http::StatusCode;
use tempfile::TempDir;
use tower::ServiceExt;

use test_helpers::{body_json, create_test_app, get};

/// Scratch directory with a representative mix of children.
fn fixture_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("banana.txt"), b"fruit").unwrap();
    fs::write(tmp.path().join("Apple.png"), b"png bytes").unwrap();
    fs::write(tmp.path().join("photo.JPG"), b"jpg bytes").unwrap();
    fs::write(tmp.path().join(".hidden"), b"secret").unwrap();
    fs::create_dir(tmp.path().join("cherry")).unwrap();
    tmp
}

#[tokio::test]
async fn test_browse_listing() {
    let dir = fixture_dir();
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(std::path::Path::new("/"), static_dir.path()).await;

    let response = app
        .oneshot(get(&format!("/api/browse?path={}", dir.path().display())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["current_path"], dir.path().to_str().unwrap());
    assert_eq!(
        body["parent_path"],
        dir.path().parent().unwrap().to_str().unwrap()
    );

    // Sorted ascending, hidden entries excluded.
    let names: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple.png", "banana.txt", "cherry", "photo.JPG"]);

    let cherry = &body["items"][2];
    assert_eq!(cherry["is_directory"], true);
    assert_eq!(cherry["size"], 0);

    let banana = &body["items"][1];
    assert_eq!(banana["is_directory"], false);
    assert_eq!(banana["size"], 5);
    assert!(banana["modified"].as_i64().unwrap() > 0);

    // Images are exactly the image-extension subset, case-insensitive.
    let image_names: Vec<&str> = body["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(image_names, vec!["Apple.png", "photo.JPG"]);
    for image in body["images"].as_array().unwrap() {
        assert!(
            image["thumbnail"]
                .as_str()
                .unwrap()
                .starts_with("data:image/png;base64,")
        );
    }
}

#[tokio::test]
async fn test_browse_missing_path() {
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(std::path::Path::new("/"), static_dir.path()).await;

    let response = app
        .oneshot(get("/api/browse?path=/no/such/directory/anywhere"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Path does not exist");
}

#[tokio::test]
async fn test_browse_file_path() {
    let dir = fixture_dir();
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(std::path::Path::new("/"), static_dir.path()).await;

    let file = dir.path().join("banana.txt");
    let response = app
        .oneshot(get(&format!("/api/browse?path={}", file.display())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Path is not a directory");
}

#[tokio::test]
async fn test_browse_relative_path() {
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(std::path::Path::new("/"), static_dir.path()).await;

    let response = app
        .oneshot(get("/api/browse?path=relative/dir"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Path must be absolute");
}

#[tokio::test]
async fn test_browse_traversal_denied() {
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(std::path::Path::new("/"), static_dir.path()).await;

    let response = app
        .oneshot(get("/api/browse?path=/tmp/../etc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_browse_outside_configured_root() {
    let confined = fixture_dir();
    let other = TempDir::new().unwrap();
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(confined.path(), static_dir.path()).await;

    // Inside the root: fine.
    let response = app
        .clone()
        .oneshot(get(&format!("/api/browse?path={}", confined.path().display())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Outside: refused.
    let response = app
        .oneshot(get(&format!("/api/browse?path={}", other.path().display())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_concurrent_browse_agrees() {
    let dir = fixture_dir();
    let static_dir = TempDir::new().unwrap();
    let app = create_test_app(std::path::Path::new("/"), static_dir.path()).await;

    let uri = format!("/api/browse?path={}", dir.path().display());
    let (a, b) = tokio::join!(
        app.clone().oneshot(get(&uri)),
        app.clone().oneshot(get(&uri)),
    );

    let body_a = body_json(a.unwrap()).await;
    let body_b = body_json(b.unwrap()).await;
    assert_eq!(body_a["items"], body_b["items"]);
    assert_eq!(body_a["images"], body_b["images"]);
}
