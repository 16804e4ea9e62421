//! # Oraco CLI Serve Integration Tests
//!
//! File: cli/tests/serve.rs
//!
//! Starts the real `oraco serve` binary on a free local port, talks to it
//! over plain HTTP/1.1 and kills it afterwards.
//!
mod common;
use common::ISOLATED_ENV;
use std::io::{Read, Write};
use std::net::{Ipv4Addr, TcpListener, TcpStream};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};
use tempfile::tempdir;

struct ServerGuard(Child);

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn start_server(dir: &Path, port: u16) -> ServerGuard {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_oraco"));
    for key in ISOLATED_ENV {
        cmd.env_remove(key);
    }
    let child = cmd
        .current_dir(dir)
        .args(["serve", "--host", "127.0.0.1", "--port"])
        .arg(port.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to start oraco serve");
    ServerGuard(child)
}

/// Sends one request and returns the raw response, retrying the connection
/// until the server is up.
fn request(port: u16, raw: &str) -> String {
    let deadline = Instant::now() + Duration::from_secs(15);
    let mut stream = loop {
        match TcpStream::connect((Ipv4Addr::LOCALHOST, port)) {
            Ok(stream) => break stream,
            Err(_) if Instant::now() < deadline => sleep(Duration::from_millis(100)),
            Err(e) => panic!("server did not start on port {}: {}", port, e),
        }
    };
    stream
        .set_read_timeout(Some(Duration::from_secs(10)))
        .unwrap();
    stream.write_all(raw.as_bytes()).unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

fn get(port: u16, path: &str) -> String {
    request(
        port,
        &format!(
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        ),
    )
}

#[test]
fn test_serves_bundle_health_and_api() {
    let dir = tempdir().unwrap();
    let dist = dir.path().join("dist");
    std::fs::create_dir(&dist).unwrap();
    std::fs::write(dist.join("index.html"), "<html>Oraco Africa</html>").unwrap();

    let port = free_port();
    let _server = start_server(dir.path(), port);

    let health = get(port, "/health");
    assert!(health.starts_with("HTTP/1.1 200"), "{}", health);
    assert!(health.ends_with("OK"), "{}", health);

    let page = get(port, "/services");
    assert!(page.starts_with("HTTP/1.1 200"), "{}", page);
    assert!(page.contains("<html>Oraco Africa</html>"), "{}", page);

    let body = r#"{"message":"Hello"}"#;
    let chat = request(
        port,
        &format!(
            "POST /api/chat HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
    );
    assert!(chat.starts_with("HTTP/1.1 200"), "{}", chat);
    assert!(chat.contains("I'm currently offline"), "{}", chat);
}

#[test]
fn test_missing_bundle_keeps_health_check() {
    let dir = tempdir().unwrap();
    let port = free_port();
    let _server = start_server(dir.path(), port);

    let health = get(port, "/health");
    assert!(health.starts_with("HTTP/1.1 200"), "{}", health);

    let page = get(port, "/about");
    assert!(page.starts_with("HTTP/1.1 404"), "{}", page);
}
