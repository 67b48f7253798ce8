//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed routing table keyed by request target (path plus query).
//! Each route has a status, optional Content-Type, optional Location, a body,
//! an optional delay before responding, and an optional pause between body
//! bytes. Unknown targets get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: Option<String>,
    pub location: Option<String>,
    pub body: Vec<u8>,
    pub delay: Option<Duration>,
    pub byte_interval: Option<Duration>,
}

impl Route {
    pub fn image(content_type: &str, body: &[u8]) -> Self {
        Route {
            status: 200,
            content_type: Some(content_type.to_string()),
            location: None,
            body: body.to_vec(),
            delay: None,
            byte_interval: None,
        }
    }

    pub fn html(body: &str) -> Self {
        Route::image("text/html; charset=utf-8", body.as_bytes())
    }

    pub fn status(status: u16) -> Self {
        Route {
            status,
            content_type: Some("text/plain".to_string()),
            location: None,
            body: b"nope".to_vec(),
            delay: None,
            byte_interval: None,
        }
    }

    pub fn redirect(to: &str) -> Self {
        Route {
            status: 302,
            content_type: None,
            location: Some(to.to_string()),
            body: Vec::new(),
            delay: None,
            byte_interval: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Send the body one byte at a time, pausing `interval` before each.
    pub fn trickled(mut self, interval: Duration) -> Self {
        self.byte_interval = Some(interval);
        self
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(target, route)| (target.to_string(), route))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();

    let route = routes
        .get(&target)
        .cloned()
        .unwrap_or_else(|| Route::status(404));
    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }

    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        reason(route.status),
        route.body.len()
    );
    if let Some(ct) = &route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(location) = &route.location {
        head.push_str(&format!("Location: {}\r\n", location));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    match route.byte_interval {
        Some(interval) => {
            for byte in &route.body {
                thread::sleep(interval);
                if stream.write_all(std::slice::from_ref(byte)).is_err() {
                    return;
                }
                let _ = stream.flush();
            }
        }
        None => {
            let _ = stream.write_all(&route.body);
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
