//! Shared utilities for integration testing against a mock endpoint.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request as seen by the mock endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decoded query pairs of the request target.
    pub fn query(&self) -> Vec<(String, String)> {
        let url = url::Url::parse(&format!("http://mock{}", self.target)).unwrap();
        url.query_pairs().into_owned().collect()
    }

    /// Decoded form pairs of the request body.
    pub fn form(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_bytes()).into_owned().collect()
    }
}

/// What the mock endpoint does with a request.
pub enum Reply {
    /// Respond with a status code and body.
    Respond(u16, String),
    /// Close the connection without answering.
    Hangup,
}

pub type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a programmable mock endpoint on an ephemeral port.
///
/// Returns the bound address and the log of received requests.
pub async fn start_programmable_endpoint<F, Fut>(f: F) -> (SocketAddr, Requests)
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Reply> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);
    let log = requests.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let log = log.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        log.lock().unwrap().push(request.clone());

                        match f(request).await {
                            Reply::Respond(status, body) => {
                                let status_text = match status {
                                    200 => "200 OK",
                                    404 => "404 Not Found",
                                    500 => "500 Internal Server Error",
                                    _ => "200 OK",
                                };
                                let response_str = format!(
                                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                    status_text,
                                    body.len(),
                                    body
                                );
                                let _ = socket.write_all(response_str.as_bytes()).await;
                                let _ = socket.shutdown().await;
                                tokio::time::sleep(Duration::from_millis(10)).await;
                            }
                            Reply::Hangup => {
                                drop(socket);
                            }
                        }
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, requests)
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}
