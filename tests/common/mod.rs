//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use faq_service::config::FaqConfig;
use faq_service::http::HttpServer;
use faq_service::lifecycle::Shutdown;
use faq_service::translation::{languages, TranslateError, TranslateResult, Translator};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Translator that reverses text, or fails when asked to.
#[derive(Default)]
pub struct MockTranslator {
    pub calls: AtomicUsize,
    pub fail_with: Option<String>,
}

#[async_trait]
impl Translator for MockTranslator {
    fn is_supported_language(&self, code: &str) -> bool {
        languages::is_supported(code)
    }

    async fn translate(&self, text: &str, target: &str) -> TranslateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(msg) => Err(TranslateError::Failed(msg.clone())),
            None => Ok(format!("[{target}] {}", text.chars().rev().collect::<String>())),
        }
    }
}

/// A running service bound to an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub translator: Arc<MockTranslator>,
    pub upload_dir: tempfile::TempDir,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub async fn start_server() -> TestServer {
    start_server_with(MockTranslator::default()).await
}

pub async fn start_server_with(translator: MockTranslator) -> TestServer {
    let upload_dir = tempfile::tempdir().unwrap();
    let mut config = FaqConfig::default();
    config.uploads.directory = upload_dir.path().to_string_lossy().into_owned();

    let translator = Arc::new(translator);
    let server = HttpServer::with_translator(config, translator.clone()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        translator,
        upload_dir,
        shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Start a programmable HTTP backend on an ephemeral port; `f` receives the
/// raw request head and returns `(status, body)`.

pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]).into_owned();

                let (status, body) = f(head).await;
                let status_text = match status {
                    200 => "200 OK",
                    503 => "503 Service Unavailable",
                    _ => "500 Internal Server Error",
                };

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    addr
}
