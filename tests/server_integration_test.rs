//! Server integration tests that exercise a real TCP listener.
//!
//! These tests start an actual server and verify end-to-end behavior over a
//! network connection rather than through the router alone.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use zonetime::server::{build_router, create_app_state};

/// Start a test server on an available port and return the port number.
async fn start_test_server() -> u16 {
    let state = create_app_state();
    let app = build_router(state);

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

async fn raw_request(port: u16, target: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to connect");

    let request = format!("GET {target} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .await
        .expect("Failed to read response");

    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_lookup_over_real_connection() {
    let port = start_test_server().await;

    // GMT's first zone has no DST, so the value is stable across the call.
    let response = raw_request(port, "/getTime?zones=GMT").await;

    assert!(
        response.starts_with("HTTP/1.1 200 OK"),
        "unexpected response: {response}"
    );
    assert!(response.contains("\"GMT\":"), "unexpected body: {response}");
}

#[tokio::test]
async fn test_unknown_code_over_real_connection() {
    let port = start_test_server().await;

    let response = raw_request(port, "/getTime?zones=XYZ").await;

    assert!(
        response.starts_with("HTTP/1.1 200 OK"),
        "unexpected response: {response}"
    );
    assert!(
        response.ends_with("{\"Message\":\"Can't find timezone: XYZ\"}\n"),
        "unexpected body: {response}"
    );
}
