//! One-shot stub classifier built on `tiny_http`.

use std::io::Read;
use std::thread::JoinHandle;

/// What the stub saw.
pub struct Captured {
    pub method: String,
    pub content_type: String,
    pub body: String,
}

/// Serve exactly one request with `status` and `body`, returning the URL to
/// post to and a handle yielding the captured request.
pub fn serve_once(status: u16, content_type: &str, body: &str) -> (String, JoinHandle<Captured>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("stub server binds");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("stub server has a port");

    let content_type = content_type.to_string();
    let body = body.to_string();
    let handle = std::thread::spawn(move || {
        let mut request = server.recv().expect("stub receives a request");
        let mut received = String::new();
        request
            .as_reader()
            .read_to_string(&mut received)
            .expect("request body is readable");
        let captured = Captured {
            method: request.method().to_string(),
            content_type: request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.to_string())
                .unwrap_or_default(),
            body: received,
        };

        let response = tiny_http::Response::from_string(body)
            .with_status_code(status)
            .with_header(
                tiny_http::Header::from_bytes("Content-Type", content_type.as_bytes())
                    .expect("valid header"),
            );
        let _ = request.respond(response);
        captured
    });

    (format!("http://127.0.0.1:{port}/api"), handle)
}
