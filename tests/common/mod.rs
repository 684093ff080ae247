//! Local stand-in for the imagery endpoint.

#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub enum MockResponse {
    Image { width: u32, height: u32, colour: [u8; 3] },
    Status(u16),
    Garbage,
}

pub struct MockImagery {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockImagery {
    /// Serve `responses` keyed by heading; unlisted headings answer 404
    pub async fn start(responses: HashMap<u16, MockResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(responses);

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let responses = Arc::clone(&responses);
                let seen = Arc::clone(&seen);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }

                    let head = String::from_utf8_lossy(&buf).to_string();
                    let target = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("")
                        .to_string();
                    seen.lock().unwrap().push(target.clone());

                    let response = heading_of(&target)
                        .and_then(|h| responses.get(&h).cloned())
                        .unwrap_or(MockResponse::Status(404));
                    let (status, body) = match response {
                        MockResponse::Image { width, height, colour } => {
                            ("200 OK", jpeg_bytes(width, height, colour))
                        }
                        MockResponse::Status(404) => ("404 Not Found", Vec::new()),
                        MockResponse::Status(403) => ("403 Forbidden", Vec::new()),
                        MockResponse::Status(_) => ("500 Internal Server Error", Vec::new()),
                        MockResponse::Garbage => ("200 OK", b"definitely not a jpeg".to_vec()),
                    };

                    let header = format!(
                        "HTTP/1.1 {}\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        status,
                        body.len()
                    );
                    let _ = socket.write_all(header.as_bytes()).await;
                    let _ = socket.write_all(&body).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            endpoint: format!("http://{}/maps/api/streetview", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn headings(&self) -> Vec<u16> {
        self.requests().iter().filter_map(|r| heading_of(r)).collect()
    }
}

fn heading_of(target: &str) -> Option<u16> {
    let query = target.split_once('?')?.1;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("heading="))
        .and_then(|h| h.parse().ok())
}

pub fn jpeg_bytes(width: u32, height: u32, colour: [u8; 3]) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(colour)));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Jpeg).unwrap();
    buf.into_inner()
}

pub fn jpeg(width: u32, height: u32, colour: [u8; 3]) -> MockResponse {
    MockResponse::Image {
        width,
        height,
        colour,
    }
}

pub fn count_files(dir: &std::path::Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

pub fn count_lines(path: &std::path::Path) -> usize {
    std::fs::read_to_string(path)
        .map(|s| s.lines().count())
        .unwrap_or(0)
}
