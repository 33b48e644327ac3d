//! Drive a windeck desktop from stdin.
//!
//! Usage: `windeck [WINDOW_ID...]` (default: `terminal`)
//!
//! Each input line is one gesture, either shorthand or a JSON request:
//!
//! ```text
//! open terminal
//! focus finder
//! snapshot
//! {"method": "toggleMaximize", "args": {"windowId": "terminal"}}
//! ```
//!
//! Shorthand method names may be written `toggle-maximize` or
//! `toggle_maximize`; they are sent as `toggleMaximize`.
//!
//! Every response is printed as one JSON line. Set `RUST_LOG=debug` to trace
//! transitions.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value as JsonValue};
use windeck::{rpc, Desktop};

const DEFAULT_WINDOWS: &[&str] = &["terminal"];

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let mut ids: Vec<String> = std::env::args().skip(1).collect();
  if ids.is_empty() {
    ids = DEFAULT_WINDOWS.iter().map(|id| (*id).to_owned()).collect();
  }

  let desktop = match Desktop::new(ids) {
    Ok(desktop) => desktop,
    Err(e) => {
      log::error!("Failed to create desktop: {e}");
      std::process::exit(2);
    }
  };
  log::info!("Windows: {:?}", desktop.window_ids());

  if let Err(e) = run(&desktop, io::stdin().lock(), io::stdout().lock()) {
    log::error!("I/O error: {e}");
    std::process::exit(1);
  }
}

fn run(desktop: &Desktop, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
  writeln!(output, "{}", serialize(&desktop.sync_init()))?;

  for line in input.lines() {
    let line = line?;
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    let response = match parse_line(line) {
      Ok((method, args)) => rpc::dispatch_json(desktop, &method, &args),
      Err(message) => json!({ "error": message }),
    };
    writeln!(output, "{response}")?;
  }

  output.flush()
}

/// Accept `{"method": ..., "args": ...}` or `<method> [window_id]`.
fn parse_line(line: &str) -> Result<(String, JsonValue), String> {
  if line.starts_with('{') {
    let value: JsonValue =
      serde_json::from_str(line).map_err(|e| format!("Invalid JSON: {e}"))?;
    let method = value
      .get("method")
      .and_then(JsonValue::as_str)
      .ok_or("Missing \"method\"")?
      .to_owned();
    let args = value.get("args").cloned().unwrap_or(JsonValue::Null);
    return Ok((method, args));
  }

  let mut words = line.split_whitespace();
  let method = camel_case(words.next().ok_or("Empty gesture")?);
  let args = match (words.next(), words.next()) {
    (None, _) => JsonValue::Null,
    (Some(window_id), None) => json!({ "windowId": window_id }),
    (Some(_), Some(extra)) => return Err(format!("Unexpected argument: {extra}")),
  };
  Ok((method, args))
}

fn camel_case(word: &str) -> String {
  let mut out = String::with_capacity(word.len());
  let mut upper = false;
  for c in word.chars() {
    if c == '-' || c == '_' {
      upper = !out.is_empty();
    } else if upper {
      out.extend(c.to_uppercase());
      upper = false;
    } else {
      out.push(c);
    }
  }
  out
}

fn serialize(value: &impl serde::Serialize) -> String {
  serde_json::to_string(value).unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_shorthand() {
    let (method, args) = parse_line("toggle-maximize terminal").unwrap();
    assert_eq!(method, "toggleMaximize");
    assert_eq!(args, json!({ "windowId": "terminal" }));

    let (method, args) = parse_line("all_states").unwrap();
    assert_eq!(method, "allStates");
    assert_eq!(args, JsonValue::Null);
  }

  #[test]
  fn parses_json_request() {
    let (method, args) = parse_line(r#"{"method": "snapshot"}"#).unwrap();
    assert_eq!(method, "snapshot");
    assert_eq!(args, JsonValue::Null);
  }

  #[test]
  fn rejects_extra_words() {
    assert!(parse_line("open terminal now").is_err());
  }

  #[test]
  fn runs_a_session() {
    let desktop = Desktop::new(["terminal", "finder"]).unwrap();
    let input = "open terminal\n\n# comment\nopen finder\nminimize finder\nstate finder\nfocus ghost\n";
    let mut output = Vec::new();

    run(&desktop, input.as_bytes(), &mut output).unwrap();

    let lines: Vec<JsonValue> = String::from_utf8(output)
      .unwrap()
      .lines()
      .map(|l| serde_json::from_str(l).unwrap())
      .collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["event"], "sync:init");
    assert_eq!(lines[0]["data"]["zOrder"], json!([]));
    assert_eq!(
      lines[4]["result"],
      json!({ "isOpen": true, "isMinimized": true, "isMaximized": false, "zIndex": 2 })
    );
    assert_eq!(lines[5], json!({ "error": "Window not found: ghost" }));
  }
}
