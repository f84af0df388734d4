//! Local responder answering a single request with a canned JSON reply.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub struct Responder {
    pub base_url: String,
    handle: JoinHandle<String>,
}

impl Responder {
    /// Request line and headers of the request that was answered.
    pub async fn request_head(self) -> String {
        self.handle.await.expect("responder task panicked")
    }
}

/// Accept one connection, read its request head and reply with `status`.
/// Only body-less requests are expected.
pub async fn respond_once(status: u16, body: &str) -> Responder {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_owned();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut chunk = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            head.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();

        String::from_utf8_lossy(&head).into_owned()
    });

    Responder {
        base_url: format!("http://{addr}"),
        handle,
    }
}
