//! Bounded subprocess execution for collaborator tools
//!
//! Collaborator commands wrap external tools (transcript extractor, research
//! agent) that can run for minutes. Every invocation gets a hard timeout; a
//! timeout converts to a terminal outcome for that call, not a hang.

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use wait_timeout::ChildExt;

/// Outcome of a bounded tool invocation.
#[derive(Debug)]
pub enum ToolOutcome {
    Completed {
        success: bool,
        stdout: String,
        stderr: String,
    },
    TimedOut,
}

/// Run a shell command with a hard timeout, capturing output.
///
/// Output is drained concurrently with the wait: if we waited first, the
/// child could block on write() once the pipe buffer fills, deadlocking
/// against us.
pub fn run_with_timeout(command: &str, timeout: Duration) -> Result<ToolOutcome> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn command: {command}"))?;

    let (stdout_tx, stdout_rx) = mpsc::channel();
    let (stderr_tx, stderr_rx) = mpsc::channel();

    if let Some(mut stdout) = child.stdout.take() {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = stdout.read_to_string(&mut buf);
            let _ = stdout_tx.send(buf);
        });
    } else {
        let _ = stdout_tx.send(String::new());
    }

    if let Some(mut stderr) = child.stderr.take() {
        thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            let _ = stderr_tx.send(buf);
        });
    } else {
        let _ = stderr_tx.send(String::new());
    }

    let wait_result = child
        .wait_timeout(timeout)
        .with_context(|| format!("Failed to wait for command: {command}"))?;

    match wait_result {
        Some(status) => {
            let stdout = stdout_rx.recv().unwrap_or_default();
            let stderr = stderr_rx.recv().unwrap_or_default();
            Ok(ToolOutcome::Completed {
                success: status.success(),
                stdout,
                stderr,
            })
        }
        None => {
            // Kill and reap, then report the timeout as a terminal outcome
            let _ = child.kill();
            let _ = child.wait();
            Ok(ToolOutcome::TimedOut)
        }
    }
}
