#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Method, Response, Server, StatusCode};

use declaration_board_adapters::AdapterConfig;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: String,
}

pub type Calls = Arc<Mutex<Vec<RecordedCall>>>;

/// Serves up to `max_requests` requests, answering each with `handler(call)`.
pub fn spawn_mock_server<F>(max_requests: usize, handler: F) -> (String, Calls)
where
    F: Fn(&RecordedCall) -> (u16, String) + Send + 'static,
{
    let server = Server::http("127.0.0.1:0").expect("start server");
    let addr = format!("http://{}", server.server_addr());
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&calls);

    thread::spawn(move || {
        for _ in 0..max_requests {
            let mut req = match server.recv() {
                Ok(r) => r,
                Err(_) => break,
            };
            let mut body = String::new();
            let _ = req.as_reader().read_to_string(&mut body);
            let call = RecordedCall {
                method: req.method().clone(),
                path: req.url().to_owned(),
                body,
            };
            let (code, payload) = handler(&call);
            if let Ok(mut g) = recorded.lock() {
                g.push(call);
            }
            let response = Response::from_string(payload).with_status_code(StatusCode(code));
            let _ = req.respond(response);
        }
    });

    (addr, calls)
}

pub fn api_config(base_url: &str) -> AdapterConfig {
    AdapterConfig {
        api_base_url: Some(base_url.to_owned()),
        http_timeout_ms: 5_000,
        ..AdapterConfig::default()
    }
}

pub fn proxy_config(base_url: &str) -> AdapterConfig {
    AdapterConfig {
        eip1193_proxy_url: Some(base_url.to_owned()),
        http_timeout_ms: 5_000,
        ..AdapterConfig::default()
    }
}

/// A local address with nothing listening on it.
pub fn unreachable_url() -> String {
    "http://127.0.0.1:1".to_owned()
}
