//! Minimal HTTP/1.1 server that answers every request with a fixed status and
//! body, for shortener integration tests.
//!
//! Records the request target of each request so tests can check what was sent.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Handle to a running server.
pub struct ShortServer {
    /// Base URL, e.g. "http://127.0.0.1:12345".
    pub endpoint: String,
    targets: Arc<Mutex<Vec<String>>>,
}

impl ShortServer {
    /// Request targets (path + query) seen so far.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread that replies `status` with `body`.
/// The server runs until the process exits.
pub fn start(status: u16, body: &str) -> ShortServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let targets = Arc::new(Mutex::new(Vec::new()));
    let body = Arc::new(body.to_string());
    {
        let targets = Arc::clone(&targets);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let body = Arc::clone(&body);
                let targets = Arc::clone(&targets);
                thread::spawn(move || handle(stream, status, &body, &targets));
            }
        });
    }
    ShortServer {
        endpoint: format!("http://127.0.0.1:{}", port),
        targets,
    }
}

/// An endpoint on which nothing is listening.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    status: u16,
    body: &str,
    targets: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    if let Some(target) = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
    {
        targets.lock().unwrap().push(target.to_string());
    }
    let response = format!(
        "HTTP/1.1 {} Test\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
}
