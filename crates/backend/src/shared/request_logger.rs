use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::fmt;
use std::time::Instant;

/// Размер в байтах с разделителем триад: 12345 -> "12.345"
pub fn group_digits(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Одна строка журнала запросов
struct RequestLine<'a> {
    status: StatusCode,
    method: &'a Method,
    path: &'a str,
    elapsed_ms: u128,
    size: usize,
}

impl fmt::Display for RequestLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Голубой для 2xx, коричневый для остальных
        let color = if self.status.is_success() { "36" } else { "33" };
        write!(
            f,
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color,
            Local::now().format("%H:%M:%S"),
            self.elapsed_ms,
            group_digits(self.size),
            self.status.as_u16(),
            self.method.as_str(),
            self.path
        )
    }
}

/// Middleware: печатает статус, время и реальный размер тела каждого ответа
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} {} | {}ms | body read failed: {}",
                parts.status.as_u16(),
                method,
                path,
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    println!(
        "{}",
        RequestLine {
            status: parts.status,
            method: &method,
            path: &path,
            elapsed_ms: start.elapsed().as_millis(),
            size: bytes.len(),
        }
    );

    Response::from_parts(parts, Body::from(bytes))
}
