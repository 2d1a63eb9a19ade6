//! Static file server for the built wallet bundle
//!
//! Serves the wasm app from the dist/ directory on port 8080. Unknown
//! paths fall back to index.html.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("failed to bind server address");

    println!("Billetera IO dev server running at http://{}", ADDR);
    println!("Serving from {}/ directory", DIST);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let file_path = resolve_file(request_path(&request_line));

    match fs::read(&file_path) {
        Ok(contents) => write_response(&mut stream, "200 OK", content_type(&file_path), &contents),
        // Missing file: serve the SPA entry point instead.
        Err(_) => match fs::read(Path::new(DIST).join("index.html")) {
            Ok(contents) => {
                write_response(&mut stream, "200 OK", "text/html; charset=utf-8", &contents)
            }
            Err(e) => {
                eprintln!("index.html not found: {}", e);
                write_response(&mut stream, "404 NOT FOUND", "text/plain", b"not found");
            }
        },
    }
}

/// Path component of the request line, query string dropped.
fn request_path(request_line: &str) -> &str {
    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    full_path.split('?').next().unwrap_or(full_path)
}

fn resolve_file(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return Path::new(DIST).join("index.html");
    }
    let candidate = Path::new(DIST).join(path.trim_start_matches('/'));
    if candidate.is_dir() {
        Path::new(DIST).join("index.html")
    } else {
        candidate
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn write_response(stream: &mut TcpStream, status: &str, content_type: &str, body: &[u8]) {
    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream
        .write_all(headers.as_bytes())
        .and_then(|_| stream.write_all(body))
    {
        eprintln!("Failed to write response: {}", e);
        return;
    }
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("GET / HTTP/1.1"), "/");
        assert_eq!(request_path("GET /index.html HTTP/1.1"), "/index.html");
        assert_eq!(request_path("GET /app.wasm?v=3 HTTP/1.1"), "/app.wasm");
        assert_eq!(request_path("garbage"), "/");
    }

    #[test]
    fn test_resolve_file() {
        assert_eq!(resolve_file("/"), Path::new("dist").join("index.html"));
        assert_eq!(resolve_file(""), Path::new("dist").join("index.html"));
        assert_eq!(
            resolve_file("/app.wasm"),
            Path::new("dist").join("app.wasm")
        );
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("a.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("a.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("a.js")), "application/javascript");
        assert_eq!(content_type(Path::new("a")), "application/octet-stream");
    }
}
