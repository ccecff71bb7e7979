#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Canned HTTP responses keyed by request path.
pub type Routes = HashMap<&'static str, (u16, String)>;

/// Serve `routes` on an ephemeral local port. Returns the base URL.
pub async fn serve(routes: Routes) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local listener");
    let addr = listener.local_addr().expect("local address");
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                respond(socket, &routes).await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Answer every request with the next response in `responses`, repeating the
/// last one. Returns the base URL and a count of requests served.
pub async fn serve_sequence(responses: Vec<(u16, String)>) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind local listener");
    let addr = listener.local_addr().expect("local address");
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let responses = Arc::new(responses);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let hit = counter.fetch_add(1, Ordering::SeqCst);
            let responses = responses.clone();
            tokio::spawn(async move {
                read_request(&mut socket).await;
                let (status, body) = responses
                    .get(hit)
                    .or(responses.last())
                    .cloned()
                    .unwrap_or((404, String::new()));
                write_response(socket, status, &body).await;
            });
        }
    });

    (format!("http://{}", addr), hits)
}

async fn respond(mut socket: TcpStream, routes: &Routes) {
    let request = read_request(&mut socket).await;
    let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
    let (status, body) = routes
        .get(path.as_str())
        .cloned()
        .unwrap_or((404, "not found".to_string()));
    write_response(socket, status, &body).await;
}

async fn write_response(mut socket: TcpStream, status: u16, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = socket.write_all(response.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = find_header_end(&buf) {
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// An RSS document with `count` items titled "`prefix` n".
pub fn rss_with_items(prefix: &str, count: usize) -> String {
    let items: String = (0..count)
        .map(|n| {
            format!(
                "<item><title>{prefix} {n}</title><link>https://example.com/{prefix}/{n}</link>\
                 <description>Story {n}</description><pubDate>Mon, 02 Jan 2006 15:04:05 +0000</pubDate></item>"
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><rss version=\"2.0\"><channel><title>{prefix}</title>{items}</channel></rss>"
    )
}
