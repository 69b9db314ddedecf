//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rdy::report::{Level, Reporter};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A running mock backend.
#[allow(dead_code)]
pub struct MockBackend {
    pub addr: SocketAddr,
    hits: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}/health", self.addr)
    }

    /// Requests answered so far.
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` decides the status and body of every response.
pub async fn start_programmable_backend<F, Fut>(f: F) -> MockBackend
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicU32::new(0));
    let f = Arc::new(f);

    let counter = hits.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let f = f.clone();
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        serve(socket, || {
                            counter.fetch_add(1, Ordering::SeqCst);
                            f()
                        })
                        .await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockBackend { addr, hits }
}

/// Backend answering 503 until `ready_after` has elapsed, then 200.
#[allow(dead_code)]
pub async fn start_delayed_backend(ready_after: Duration) -> MockBackend {
    let started = std::time::Instant::now();
    start_programmable_backend(move || async move {
        if started.elapsed() < ready_after {
            (503, "warming up".to_string())
        } else {
            (200, "ok".to_string())
        }
    })
    .await
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn serve<F, Fut>(mut socket: TcpStream, respond: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = (u16, String)>,
{
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let (status, body) = respond().await;
    let status_text = match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        _ => "200 OK",
    };

    let response_str = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_text,
        body.len(),
        body
    );
    let _ = socket.write_all(response_str.as_bytes()).await;
    let _ = socket.shutdown().await;
}

/// Reporter that records every event.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<(Level, String)>>,
    l2_disabled: bool,
}

#[allow(dead_code)]
impl RecordingReporter {
    pub fn without_l2() -> Self {
        Self {
            l2_disabled: true,
            ..Self::default()
        }
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.events().iter().filter(|(l, _)| *l == level).count()
    }
}

impl Reporter for RecordingReporter {
    fn l1(&self, args: std::fmt::Arguments<'_>) {
        self.events.lock().unwrap().push((Level::L1, args.to_string()));
    }

    fn l2(&self, args: std::fmt::Arguments<'_>) {
        self.events.lock().unwrap().push((Level::L2, args.to_string()));
    }

    fn enabled(&self, level: Level) -> bool {
        !(level == Level::L2 && self.l2_disabled)
    }
}

/// Client that ignores proxy environment variables.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
