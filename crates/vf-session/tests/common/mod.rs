//! Stub classifier that answers a fixed number of requests.

use std::thread::JoinHandle;

/// Answer `count` requests with `status` and an HTML `body`, then stop.
///
/// Returns the URL to post to and a handle yielding how many requests were
/// served.
pub fn serve_html(status: u16, body: &str, count: usize) -> (String, JoinHandle<usize>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("stub server binds");
    let port = server
        .server_addr()
        .to_ip()
        .map(|addr| addr.port())
        .expect("stub server has a port");

    let body = body.to_string();
    let handle = std::thread::spawn(move || {
        let mut served = 0;
        for request in server.incoming_requests().take(count) {
            let response = tiny_http::Response::from_string(body.clone())
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "text/html; charset=utf-8")
                        .expect("valid header"),
                );
            let _ = request.respond(response);
            served += 1;
        }
        served
    });

    (format!("http://127.0.0.1:{port}/api"), handle)
}
