#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

pub const PET_PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title>Pet Guide</title>
  <meta name="description" content="All about pets">
  <meta property="og:type" content="article">
</head>
<body>
  <p>The cat sat on the mat.</p>
  <p>Cats and dogs are common pets.</p>
  <p>42 is just a number.</p>
</body>
</html>"#;

pub fn scenario_corpus() -> Vec<String> {
    vec![
        "The cat sat on the mat.".to_string(),
        "Cats and dogs are common pets.".to_string(),
        "42 is just a number.".to_string(),
    ]
}

/// Serve exactly one HTTP response on a local port; returns the base URL
pub fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        // Drain request headers
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap_or(0) > 0 {
            if line == "\r\n" {
                break;
            }
            line.clear();
        }

        let mut stream = stream;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{addr}"), handle)
}
