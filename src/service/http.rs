//! Minimal HTTP/1.1 framing
//!
//! Just enough of HTTP for a form round trip: one request per connection,
//! `Content-Length` bodies only, and every response closes the connection.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest accepted header block
const MAX_HEADER_BYTES: usize = 16 * 1024;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// A parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Request target without the query string
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Read one request from `reader`
pub async fn read_request<R: AsyncBufRead + Unpin>(reader: &mut R) -> Result<HttpRequest> {
    let mut header_bytes = 0usize;

    let request_line = read_line(reader, &mut header_bytes).await?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().context("Missing request method")?.to_string();
    let target = parts.next().context("Missing request target")?;
    let path = target.split('?').next().unwrap_or(target).to_string();

    let mut headers = Vec::new();
    loop {
        let line = read_line(reader, &mut header_bytes).await?;
        if line.is_empty() {
            break;
        }
        let (name, value) = line
            .split_once(':')
            .with_context(|| format!("Malformed header: {}", line))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let mut request = HttpRequest {
        method,
        path,
        headers,
        body: Vec::new(),
    };

    let content_length = match request.header("content-length") {
        Some(value) => value
            .parse::<usize>()
            .with_context(|| format!("Invalid Content-Length: {}", value))?,
        None => 0,
    };
    // Sanity check: reject oversized form submissions
    if content_length > MAX_BODY_BYTES {
        anyhow::bail!("Request body too large: {} bytes (max {})", content_length, MAX_BODY_BYTES);
    }

    request.body = vec![0u8; content_length];
    reader
        .read_exact(&mut request.body)
        .await
        .context("Failed to read request body")?;

    Ok(request)
}

async fn read_line<R: AsyncBufRead + Unpin>(reader: &mut R, total: &mut usize) -> Result<String> {
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .await
        .context("Failed to read request header")?;
    if n == 0 {
        anyhow::bail!("Connection closed before end of headers");
    }
    *total += n;
    if *total > MAX_HEADER_BYTES {
        anyhow::bail!("Request headers too large (max {} bytes)", MAX_HEADER_BYTES);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// A response ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into_bytes(),
        }
    }

    pub fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: format!("{} {}\n{}\n", status, reason_phrase(status), message).into_bytes(),
        }
    }

    pub fn not_found() -> Self {
        Self::error(404, "No such page")
    }

    /// Serialize status line, headers and body
    pub fn to_bytes(&self) -> Vec<u8> {
        let head = format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            reason_phrase(self.status),
            self.content_type,
            self.body.len()
        );
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(&self.body);
        bytes
    }

    /// Write the response and flush
    pub async fn write_to<W: AsyncWrite + Unpin>(&self, writer: &mut W) -> Result<()> {
        writer
            .write_all(&self.to_bytes())
            .await
            .context("Failed to write response")?;
        writer.flush().await.context("Failed to flush response")?;
        Ok(())
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        413 => "Payload Too Large",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
