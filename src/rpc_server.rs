//! Admin console RPC server: JSON-RPC over stdin/stdout for the shell page bridge.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"link.click", "params":{"element":{...},"page":{...}}}
//! Response: {"id":1, "result":{..., "commands":[...]}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries only protocol lines.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use admin_console::app::Console;
use admin_console::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Simple rate limiter: max requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn send(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("admin_console=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config_path = std::env::var("ADMIN_CONSOLE_CONFIG").ok();
    let console = match Console::new(config_path) {
        Ok(c) => Mutex::new(c),
        Err(e) => {
            error!(error = %e, "failed to load settings");
            std::process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if send(&mut out, &ready).is_err() {
        return;
    }
    info!("admin console bridge ready");

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                let err = json!({"id": null, "error": format!("parse error: {}", e)});
                if send(&mut out, &err).is_err() {
                    break;
                }
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            let response = json!({"id": id, "error": "rate limit exceeded"});
            if send(&mut out, &response).is_err() {
                break;
            }
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&console, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                warn!(method, error = %err, "request failed");
                json!({"id": id, "error": err})
            }
        };
        if send(&mut out, &response).is_err() {
            break;
        }
    }
}
