//! Command Client Module
//! Blocking HTTP client for the device command endpoint. Called from
//! background threads only, so the UI thread never blocks on the network.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use crate::api::command::{CommandRequest, DeviceCommand};

/// TCP connection timeout for command requests.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
/// End-to-end timeout for a single command request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Sends device commands to `<api_base>/api/command`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CommandClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl CommandClient {
    /// Build a client for the given API base URL.
    pub fn new(api_base: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/api/command", api_base.trim_end_matches('/')),
        })
    }

    /// POST a command for the given device. Any 2xx response is success;
    /// the response body is ignored.
    pub fn send_command(&self, device_id: i64, command: DeviceCommand) -> Result<(), ApiError> {
        let payload = CommandRequest::new(device_id, command);
        debug!(%command, device_id, endpoint = %self.endpoint, "sending command");

        let response = self.http.post(&self.endpoint).json(&payload).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status))
        }
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// ── Mock-HTTP tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{channel, Receiver};
    use std::thread;

    use super::*;

    /// Accept one connection, capture the raw request, answer with `status`.
    fn spawn_mock_server(status: u16) -> (String, Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let base = format!("http://{}", listener.local_addr().expect("local_addr"));
        let (tx, rx) = channel();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = stream.read(&mut chunk).expect("read request");
                buf.extend_from_slice(&chunk[..n]);
                if n == 0 || request_complete(&buf) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status} MOCK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
            );
            stream.write_all(response.as_bytes()).expect("write response");
            let _ = tx.send(String::from_utf8_lossy(&buf).to_string());
        });

        (base, rx)
    }

    /// True once the headers and the full content-length body have arrived.
    fn request_complete(buf: &[u8]) -> bool {
        let text = String::from_utf8_lossy(buf);
        let Some(split) = text.find("\r\n\r\n") else {
            return false;
        };
        let body_len = text.len() - split - 4;
        let content_length = text[..split]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        body_len >= content_length
    }

    fn captured_body(raw: &str) -> serde_json::Value {
        let body = raw.split("\r\n\r\n").nth(1).expect("request body");
        serde_json::from_str(body).expect("json body")
    }

    #[test]
    fn start_command_posts_expected_payload() {
        let (base, rx) = spawn_mock_server(200);
        let client = CommandClient::new(&base).expect("client");

        client.send_command(1, DeviceCommand::Start).expect("send");

        let raw = rx.recv().expect("captured request");
        assert!(
            raw.starts_with("POST /api/command HTTP/1.1\r\n"),
            "unexpected request line: {raw}"
        );
        assert!(raw
            .to_ascii_lowercase()
            .contains("content-type: application/json"));
        assert_eq!(
            captured_body(&raw),
            serde_json::json!({"device_id": 1, "command": "start"})
        );
    }

    #[test]
    fn stop_command_posts_expected_payload() {
        let (base, rx) = spawn_mock_server(204);
        let client = CommandClient::new(&base).expect("client");

        client.send_command(7, DeviceCommand::Stop).expect("send");

        let raw = rx.recv().expect("captured request");
        assert!(raw.starts_with("POST /api/command HTTP/1.1\r\n"));
        assert_eq!(
            captured_body(&raw),
            serde_json::json!({"device_id": 7, "command": "stop"})
        );
    }

    #[test]
    fn non_2xx_response_maps_to_status_error() {
        let (base, _rx) = spawn_mock_server(503);
        let client = CommandClient::new(&base).expect("client");

        let err = client
            .send_command(1, DeviceCommand::Stop)
            .expect_err("must fail");
        match err {
            ApiError::Status(status) => assert_eq!(status.as_u16(), 503),
            other => panic!("expected status error, got {other}"),
        }
    }

    #[test]
    fn unreachable_server_maps_to_transport_error() {
        // Bind-then-drop to get a port nothing listens on.
        let port = TcpListener::bind("127.0.0.1:0")
            .expect("bind")
            .local_addr()
            .expect("local_addr")
            .port();
        let client = CommandClient::new(&format!("http://127.0.0.1:{port}")).expect("client");

        let err = client
            .send_command(1, DeviceCommand::Start)
            .expect_err("must fail");
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = CommandClient::new("http://10.0.0.7:8000/").expect("client");
        assert_eq!(client.endpoint(), "http://10.0.0.7:8000/api/command");
    }
}
