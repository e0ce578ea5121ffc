//! Integration test: local HTTP server scripted with status codes, image
//! uploads driven through the retry executor.

mod common;

use colemearchy_core::retry::{RetryError, RetryPolicy};
use colemearchy_core::upload::{upload_image, UploadError, UploadRequest};
use common::upload_server::{self, Reply};
use std::io::Write;
use std::time::Duration;

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(max_attempts, Duration::from_millis(10))
}

async fn png_request(url: &str) -> (tempfile::NamedTempFile, UploadRequest) {
    let mut f = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    f.write_all(b"\x89PNG\r\n\x1a\nnot really a png").unwrap();
    f.flush().unwrap();
    let req = UploadRequest::from_path(url, f.path(), Some("post-42".into()), Duration::from_secs(10))
        .await
        .unwrap();
    (f, req)
}

#[tokio::test]
async fn upload_succeeds_and_reads_image_url() {
    let server = upload_server::start(vec![Reply::new(
        200,
        r#"{"imageUrl": "https://cdn.example.com/covers/a.png"}"#,
    )]);
    let (_f, req) = png_request(&server.url).await;

    let resp = upload_image(&req, &fast_policy(3)).await.expect("upload");
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.image_url.as_deref(),
        Some("https://cdn.example.com/covers/a.png")
    );
    assert_eq!(server.hits(), 1);

    let body = String::from_utf8_lossy(&server.bodies()[0]).into_owned();
    assert!(body.contains("name=\"image\""), "multipart body: {body}");
    assert!(body.contains("name=\"postId\""), "multipart body: {body}");
    assert!(body.contains("post-42"));
    assert!(body.contains(&req.file_name));
}

#[tokio::test]
async fn server_errors_are_retried_until_success() {
    let server = upload_server::start(vec![
        Reply::new(500, r#"{"error": "busy"}"#),
        Reply::new(503, r#"{"error": "busy"}"#),
        Reply::new(200, r#"{"imageUrl": "https://cdn.example.com/b.png"}"#),
    ]);
    let (_f, req) = png_request(&server.url).await;

    let resp = upload_image(&req, &fast_policy(3)).await.expect("upload");
    assert_eq!(resp.status, 200);
    assert_eq!(server.hits(), 3);
}

#[tokio::test]
async fn client_error_stops_after_one_attempt() {
    let server = upload_server::start(vec![
        Reply::new(404, r#"{"error": "post not found"}"#),
        Reply::new(200, "{}"),
    ]);
    let (_f, req) = png_request(&server.url).await;

    let err = upload_image(&req, &fast_policy(3)).await.unwrap_err();
    match err {
        RetryError::Operation(UploadError::Http { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("post not found"));
        }
        other => panic!("expected HTTP 404, got {other:?}"),
    }
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn persistent_server_error_surfaces_last_error() {
    let server = upload_server::start(vec![Reply::new(500, "down")]);
    let (_f, req) = png_request(&server.url).await;

    let err = upload_image(&req, &fast_policy(2)).await.unwrap_err();
    assert!(matches!(
        err,
        RetryError::Operation(UploadError::Http { status: 500, .. })
    ));
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn connection_refused_is_transient_and_retried() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{}/upload", port);
    let (_f, req) = png_request(&url).await;

    let err = upload_image(&req, &fast_policy(2)).await.unwrap_err();
    assert!(matches!(err, RetryError::Operation(UploadError::Curl(_))));
}
