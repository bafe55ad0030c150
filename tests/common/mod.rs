//! Local HTTP fixture server for link check tests
//!
//! Serves canned responses on 127.0.0.1 so checks never leave the machine:
//! - `/ok`       200
//! - `/old`      301 → `/new`
//! - `/new`      200
//! - `/with%20space` 200
//! - `/missing`  404
//! - `/error`    500
//! - `/slow`     200 after 3 seconds
//! - anything else 404

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub struct FixtureServer {
    addr: SocketAddr,
}

impl FixtureServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture server");
        let addr = listener.local_addr().expect("fixture server address");
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                thread::spawn(move || handle(stream, addr));
            }
        });
        Self { addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// URL on a port nothing is listening on
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/", addr)
}

fn handle(mut stream: TcpStream, addr: SocketAddr) {
    let Ok(read_half) = stream.try_clone() else {
        return;
    };
    let mut reader = BufReader::new(read_half);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => continue,
            Err(_) => return,
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (status, extra) = match path {
        "/ok" | "/new" | "/with%20space" => ("200 OK", String::new()),
        "/old" => (
            "301 Moved Permanently",
            format!("Location: http://{}/new\r\n", addr),
        ),
        "/error" => ("500 Internal Server Error", String::new()),
        "/slow" => {
            thread::sleep(Duration::from_secs(3));
            ("200 OK", String::new())
        }
        _ => ("404 Not Found", String::new()),
    };

    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: 0\r\nConnection: close\r\n\r\n",
        status, extra
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
