//! `GET testcase` against a one-shot in-process HTTP server.

use std::time::Duration;

use testlist_admin::{AdminConfig, ApiError, TestCaseClient, TestSource};
use testlist_view::LoadError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_test::{assert_err, assert_ok};

/// Serve one canned response; yields the request head once read.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    let (head_tx, head_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let _ = head_tx.send(String::from_utf8_lossy(&request).into_owned());

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    (endpoint, head_rx)
}

fn client_for(endpoint: String) -> TestCaseClient {
    let config = AdminConfig {
        endpoint,
        ..AdminConfig::default()
    };
    TestCaseClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_tests_parses_collection() {
    let (endpoint, head) = serve_once(
        "200 OK",
        r#"[{"name":"FooTest","packageName":""},{"name":"BarTest","packageName":"com.consol.citrus","type":"XML"}]"#,
    )
    .await;
    let client = client_for(endpoint);

    let tests = assert_ok!(client.get_tests().await);

    assert_eq!(tests.len(), 2);
    assert_eq!(tests[0].name, "FooTest");
    assert_eq!(tests[0].package_name, "");
    assert_eq!(tests[1].package_name, "com.consol.citrus");
    assert_eq!(tests[1].extra["type"], "XML");

    let head = head.await.unwrap();
    assert!(head.starts_with("GET /testcase HTTP/1.1"), "request was: {head}");
}

#[tokio::test]
async fn test_empty_collection() {
    let (endpoint, _head) = serve_once("200 OK", "[]").await;
    let tests = assert_ok!(client_for(endpoint).get_tests().await);
    assert!(tests.is_empty());
}

#[tokio::test]
async fn test_non_success_status() {
    let (endpoint, _head) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let err = assert_err!(client_for(endpoint).get_tests().await);

    assert!(matches!(err, ApiError::Status(status) if status.as_u16() == 500));
    assert_eq!(LoadError::from(err), LoadError::Status { code: 500 });
}

#[tokio::test]
async fn test_malformed_body() {
    let (endpoint, _head) = serve_once("200 OK", r#"{"tests": []}"#).await;

    let err = assert_err!(client_for(endpoint).get_tests().await);

    assert!(matches!(err, ApiError::Parse(_)));
    assert!(matches!(LoadError::from(err), LoadError::Malformed(_)));
}

#[tokio::test]
async fn test_descriptor_without_name_is_malformed() {
    let (endpoint, _head) = serve_once("200 OK", r#"[{"packageName":"auth"}]"#).await;
    let err = assert_err!(client_for(endpoint).get_tests().await);
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = assert_err!(client_for(endpoint).get_tests().await);

    assert!(matches!(err, ApiError::Connection(_)));
    assert!(matches!(LoadError::from(err), LoadError::Transport(_)));
}

#[tokio::test]
async fn test_hung_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let config = AdminConfig {
        endpoint,
        request_timeout: Duration::from_secs(1),
        ..AdminConfig::default()
    };
    let source = TestSource::from_config(&config).unwrap();

    let err = assert_err!(source.fetch().await);
    assert_eq!(err, LoadError::Transport("request timed out".into()));
}
