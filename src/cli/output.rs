use colored::Colorize;

use crate::error::LinkedInError;
use crate::transport::HttpResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Pretty,
    Json,
}

/// Render a response body; JSON bodies are re-indented in pretty mode.
pub fn format_response(response: &HttpResponse, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => {
            let body = serde_json::from_str::<serde_json::Value>(&response.body)
                .unwrap_or_else(|_| serde_json::Value::String(response.body.clone()));
            let json = serde_json::json!({
                "status": response.status,
                "body": body,
            });
            serde_json::to_string_pretty(&json).unwrap_or_default()
        }
        OutputMode::Pretty => serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
            .unwrap_or_else(|| response.body.clone()),
    }
}

pub fn print_response(response: &HttpResponse, mode: OutputMode, is_tty: bool) {
    if mode == OutputMode::Pretty && is_tty {
        eprintln!("{}", format!("HTTP {}", response.status).green().bold());
    }
    println!("{}", format_response(response, mode));
}

pub fn print_error(err: &LinkedInError, mode: OutputMode, is_tty: bool) {
    match mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
            );
        }
        OutputMode::Pretty => {
            let label = if is_tty {
                "Error".red().bold().to_string()
            } else {
                "Error".to_string()
            };
            eprintln!("{label}: {err}");
        }
    }
}
