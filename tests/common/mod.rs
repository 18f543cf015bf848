//! Shared mock endpoints for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use endpoint_poller::EndpointCaller;

/// Bind an ephemeral local port.
async fn bind_local() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").await.unwrap()
}

/// Consume the request head so the client does not see a reset.
async fn read_request(socket: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let _ = socket.read(&mut buf).await;
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    }
}

/// Start a mock endpoint that returns a fixed 200 response.
#[allow(dead_code)]
pub async fn start_mock_endpoint(response: &'static str) -> SocketAddr {
    start_programmable_endpoint(move || async move { (200, response.to_string()) }).await
}

/// Start a programmable mock endpoint with async support.
#[allow(dead_code)]
pub async fn start_programmable_endpoint<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = bind_local().await;
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                read_request(&mut socket).await;
                let (status, body) = f().await;
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// Start an endpoint that promises more body bytes than it sends.
#[allow(dead_code)]
pub async fn start_truncating_endpoint() -> SocketAddr {
    let listener = bind_local().await;
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                read_request(&mut socket).await;
                let response =
                    "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort";
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = bind_local().await;
    listener.local_addr().unwrap()
}

/// Start an endpoint that answers 200 after `delay`.
#[allow(dead_code)]
pub async fn start_slow_endpoint(delay: Duration) -> SocketAddr {
    start_programmable_endpoint(move || async move {
        tokio::time::sleep(delay).await;
        (200, "slow".to_string())
    })
    .await
}

/// Caller that ignores proxy environment variables.
#[allow(dead_code)]
pub fn direct_caller() -> EndpointCaller {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    EndpointCaller::with_client(client)
}
