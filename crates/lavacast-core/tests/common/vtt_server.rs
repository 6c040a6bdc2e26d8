//! Minimal HTTP/1.1 server imitating the lava-vtt API for integration tests.
//!
//! Records every request (method, path, content type, body) and answers
//! `HEAD /api/image/{hash}`, `POST /api/image`, and `POST /api/display` with
//! configurable statuses.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct VttServerOptions {
    /// Status for the HEAD existence probe (200 = image already stored).
    pub head_status: u32,
    /// Status for `POST /api/image`.
    pub upload_status: u32,
    /// Status for `POST /api/display`.
    pub display_status: u32,
}

impl Default for VttServerOptions {
    fn default() -> Self {
        Self {
            head_status: 404,
            upload_status: 201,
            display_status: 200,
        }
    }
}

/// One request as seen by the server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

pub struct VttServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl VttServer {
    /// Snapshot of all requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Returns the base URL (e.g.
/// "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(opts: VttServerOptions) -> VttServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &recorded, opts));
        }
    });
    VttServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    recorded: &Mutex<Vec<RecordedRequest>>,
    opts: VttServerOptions,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let request = match read_request(&mut stream) {
        Some(r) => r,
        None => return,
    };

    let status = if request.method.eq_ignore_ascii_case("HEAD") {
        opts.head_status
    } else if request.path == "/api/image" {
        opts.upload_status
    } else if request.path == "/api/display" {
        opts.display_status
    } else {
        404
    };

    recorded.lock().unwrap().push(request);

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status,
        reason(status)
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Reads one request, including its body when Content-Length is present.
fn read_request(stream: &mut std::net::TcpStream) -> Option<RecordedRequest> {
    let mut raw: Vec<u8> = Vec::new();
    let mut buf = [0u8; 8192];

    let header_end = loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => return None,
            Ok(n) => n,
            Err(_) => return None,
        };
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&raw) {
            break pos;
        }
        if raw.len() > 64 * 1024 {
            return None;
        }
    };

    let head = std::str::from_utf8(&raw[..header_end]).ok()?;
    let mut lines = head.lines();
    let request_line = lines.next()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    let mut content_length = 0usize;
    let mut content_type = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value.parse().unwrap_or(0);
            } else if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    let body_start = header_end + 4;
    while raw.len() < body_start + content_length {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(_) => break,
        };
        raw.extend_from_slice(&buf[..n]);
    }
    let body = raw
        .get(body_start..body_start + content_length)
        .unwrap_or(&[])
        .to_vec();

    Some(RecordedRequest {
        method,
        path,
        content_type,
        body,
    })
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

fn reason(status: u32) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}
