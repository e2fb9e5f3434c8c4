use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread::{self, JoinHandle};

const NO_CONTENT: &str = "HTTP/1.1 204 No Content\r\n\r\n";

fn not_found(name: &str) -> String {
    let body = format!(r#"{{"message":"No such container: {name}"}}"#);
    format!(
        "HTTP/1.1 404 Not Found\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}

// Serves one canned response per connection and hands back the request lines.
fn fake_engine(socket: &Path, responses: Vec<String>) -> JoinHandle<Vec<String>> {
    let listener = UnixListener::bind(socket).expect("failed to bind fake engine socket");
    thread::spawn(move || {
        let mut requests = Vec::new();
        for response in responses {
            let (stream, _) = listener.accept().expect("failed to accept");
            let mut reader = BufReader::new(&stream);
            let mut request_line = String::new();
            reader
                .read_line(&mut request_line)
                .expect("failed to read request line");
            loop {
                let mut line = String::new();
                let n = reader.read_line(&mut line).expect("failed to read header");
                if n == 0 || line == "\r\n" {
                    break;
                }
            }
            requests.push(request_line.trim_end().to_owned());
            (&stream)
                .write_all(response.as_bytes())
                .expect("failed to write response");
        }
        requests
    })
}

fn relaunch(socket: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relaunch"))
        .arg("--host")
        .arg(format!("unix://{}", socket.display()))
        .args(["--log-level", "error"])
        .args(args)
        .env_remove("DOCKER_HOST")
        .env_remove("DOCKER_API_VERSION")
        .output()
        .expect("failed to execute relaunch")
}

fn socket_in(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("engine.sock")
}

#[test]
fn restart_all_containers() {
    let dir = tempfile::tempdir().unwrap();
    let socket = socket_in(&dir);
    let engine = fake_engine(&socket, vec![NO_CONTENT.to_owned(); 3]);

    let output = relaunch(&socket, &["restart", "a", "b", "c"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nb\nc\n");
    assert_eq!(
        engine.join().unwrap(),
        vec![
            "POST /v1.43/containers/a/restart HTTP/1.1",
            "POST /v1.43/containers/b/restart HTTP/1.1",
            "POST /v1.43/containers/c/restart HTTP/1.1",
        ]
    );
}

#[test]
fn restart_keeps_going_after_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let socket = socket_in(&dir);
    let engine = fake_engine(
        &socket,
        vec![NO_CONTENT.to_owned(), not_found("b"), NO_CONTENT.to_owned()],
    );

    let output = relaunch(&socket, &["restart", "-t", "0", "a", "b", "c"]);

    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nc\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error response from daemon: No such container: b"),
        "unexpected stderr: {stderr}"
    );

    let requests = engine.join().unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.contains("/restart?t=0 ")));
}

#[test]
fn restart_reports_every_failure() {
    let dir = tempfile::tempdir().unwrap();
    let socket = socket_in(&dir);
    let engine = fake_engine(&socket, vec![not_found("a"), not_found("b")]);

    let output = relaunch(&socket, &["restart", "a", "b"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(
            "Error response from daemon: No such container: a\nError response from daemon: No such container: b"
        ),
        "unexpected stderr: {stderr}"
    );
    engine.join().unwrap();
}

#[test]
fn restart_requires_a_container() {
    let dir = tempfile::tempdir().unwrap();
    let output = relaunch(&socket_in(&dir), &["restart"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn restart_rejects_unsupported_host() {
    let output = Command::new(env!("CARGO_BIN_EXE_relaunch"))
        .args(["--host", "tcp://127.0.0.1:2375", "restart", "a"])
        .output()
        .expect("failed to execute relaunch");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to resolve the engine host"));
}

#[test]
fn completion_script() {
    let output = Command::new(env!("CARGO_BIN_EXE_relaunch"))
        .args(["completion", "--shell", "bash"])
        .output()
        .expect("failed to execute relaunch");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("relaunch"));
}
