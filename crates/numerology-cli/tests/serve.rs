//! Integration tests for `numerology serve` over stdio.
//! Verifies a tool call round-trips and that closing stdin exits cleanly.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn numerology_binary() -> std::path::PathBuf {
    assert_cmd::cargo::cargo_bin!("numerology").into()
}

fn spawn_serve(data_dir: &TempDir) -> std::process::Child {
    Command::new(numerology_binary())
        .arg("serve")
        .env("NUMEROLOGY_DATA_DIR", data_dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn numerology serve")
}

/// Send a JSON-RPC message as newline-delimited JSON (rmcp stdio format).
fn send_jsonrpc(stdin: &mut impl Write, msg: &serde_json::Value) {
    let line = serde_json::to_string(msg).unwrap();
    writeln!(stdin, "{line}").unwrap();
    stdin.flush().unwrap();
}

/// Send the MCP initialize handshake so the server enters its main loop.
fn mcp_handshake(child: &mut std::process::Child) {
    let stdin = child.stdin.as_mut().expect("stdin pipe");

    let init_req = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2024-11-05",
            "capabilities": {},
            "clientInfo": { "name": "test", "version": "0.1.0" }
        }
    });
    send_jsonrpc(stdin, &init_req);
    std::thread::sleep(Duration::from_millis(300));

    let initialized = serde_json::json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized"
    });
    send_jsonrpc(stdin, &initialized);
    std::thread::sleep(Duration::from_millis(200));
}

/// Pull the tool result text for response `id` out of the server's stdout.
fn tool_text(stdout: &[u8], id: u64) -> Option<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| serde_json::from_str::<serde_json::Value>(line).ok())
        .find(|msg| msg["id"] == id)
        .and_then(|msg| {
            msg["result"]["content"][0]["text"]
                .as_str()
                .and_then(|t| serde_json::from_str(t).ok())
        })
}

#[test]
fn serve_exits_on_early_stdin_eof() {
    let dir = TempDir::new().unwrap();
    let mut child = spawn_serve(&dir);
    std::thread::sleep(Duration::from_millis(200));

    drop(child.stdin.take());

    let start = Instant::now();
    let output = child.wait_with_output().expect("wait");
    let elapsed = start.elapsed();

    assert!(
        output.status.success(),
        "early stdin EOF should exit 0, got {}",
        output.status
    );
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn serve_exits_when_client_leaves_mid_handshake() {
    let dir = TempDir::new().unwrap();
    let mut child = spawn_serve(&dir);

    let stdin = child.stdin.as_mut().expect("stdin pipe");
    send_jsonrpc(
        stdin,
        &serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "test", "version": "0.1.0" }
            }
        }),
    );
    std::thread::sleep(Duration::from_millis(300));

    // No `notifications/initialized` follows.
    drop(child.stdin.take());

    let output = child.wait_with_output().expect("wait");
    assert!(
        output.status.success(),
        "stdin EOF before initialized should exit 0, got {}",
        output.status
    );
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains("failed to start MCP server"),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn serve_answers_compatibility_call() {
    let dir = TempDir::new().unwrap();
    let mut child = spawn_serve(&dir);
    mcp_handshake(&mut child);

    let stdin = child.stdin.as_mut().expect("stdin pipe");
    let call = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/call",
        "params": {
            "name": "numerology_compatibility",
            "arguments": { "a": 1, "b": 3 }
        }
    });
    send_jsonrpc(stdin, &call);
    std::thread::sleep(Duration::from_millis(300));

    drop(child.stdin.take());
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success(), "exit status {}", output.status);

    let result = tool_text(&output.stdout, 2).expect("tool response for id 2");
    assert_eq!(result["score"], 90);
    assert_eq!(result["profile_a"]["name"], "Leader");
}

#[test]
fn serve_remembers_life_path_date() {
    let dir = TempDir::new().unwrap();
    let mut child = spawn_serve(&dir);
    mcp_handshake(&mut child);

    let stdin = child.stdin.as_mut().expect("stdin pipe");
    send_jsonrpc(
        stdin,
        &serde_json::json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {
                "name": "numerology_life_path",
                "arguments": { "date": "1990-07-16" }
            }
        }),
    );
    std::thread::sleep(Duration::from_millis(300));
    drop(child.stdin.take());
    child.wait().expect("wait");

    assert!(dir.path().join("profile.db").exists());

    let output = Command::new(numerology_binary())
        .arg("recall")
        .env("NUMEROLOGY_DATA_DIR", dir.path())
        .output()
        .unwrap();
    assert!(
        String::from_utf8_lossy(&output.stdout).contains("birth date: 1990-07-16 (life path 33)")
    );
}
