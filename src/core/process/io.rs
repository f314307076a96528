// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for child processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!     each raw line, lossily decoded
//!               --> trace!(process, stream, line)   (FORWARD_TO_LOG)
//!               --> collected into a String         (KEEP_IN_STRING)
//!   wait (or timeout --> kill)
//!   --> ProcessOutput { exit_code, stdout, stderr }
//! ```

use std::borrow::Cow;

use crate::error::{DocsError, ProcessError, Result};
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Spawns a task reading `reader` line by line until EOF.
///
/// Lines are decoded lossily, so invalid UTF-8 never stops the reader; a
/// stopped reader would close the pipe and kill the child with SIGPIPE.
/// Returns `None` when the stream is neither logged nor kept.
fn spawn_reader<R>(
    reader: Option<R>,
    flags: StreamFlags,
    process: &str,
    stream: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let reader = reader?;
    let process = process.to_string();
    Some(tokio::spawn(async move {
        let mut kept = String::new();
        let mut reader = BufReader::new(reader);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = decode_line(&buf);
                    if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                        trace!(process = %process, stream, line = %line, "output");
                    }
                    if flags.contains(StreamFlags::KEEP_IN_STRING) {
                        if !kept.is_empty() {
                            kept.push('\n');
                        }
                        kept.push_str(&line);
                    }
                }
                Err(e) => {
                    warn!(process = %process, stream, error = %e, "error reading stream");
                    break;
                }
            }
        }
        kept
    }))
}

/// Strips the line terminator and replaces invalid UTF-8 with U+FFFD.
pub(super) fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes)
}

async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Streams the child's output and waits for it to exit.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout = spawn_reader(child.stdout.take(), self.stdout_stream(), name, "stdout");
        let stderr = spawn_reader(child.stderr.take(), self.stderr_stream(), name, "stderr");

        let status = if let Some(limit) = self.timeout_duration() {
            if let Ok(status) = tokio::time::timeout(limit, child.wait()).await {
                status?
            } else {
                warn!(process = %name, timeout = ?limit, "process timed out");
                child
                    .kill()
                    .await
                    .with_context(|| format!("failed to kill process {name}"))?;
                return Err(DocsError::from(ProcessError::Timeout {
                    command: self.command_line(),
                    timeout_secs: limit.as_secs(),
                })
                .into());
            }
        } else {
            child.wait().await?
        };

        let stdout = join_reader(stdout).await;
        let stderr = join_reader(stderr).await;

        Ok(ProcessOutput::new(status.code().unwrap_or(-1), stdout, stderr))
    }
}
