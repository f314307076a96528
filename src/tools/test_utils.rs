// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for tool tests.
//!
//! `FakePython` is a shell script standing in for the interpreter: it records
//! its arguments and working directory, prints a canned message to stderr and
//! exits with a chosen code. `run_with_logs` captures tracing output for dry-run assertions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;

/// A fake interpreter that logs each invocation's arguments to a file.
pub(crate) struct FakePython {
    _dir: TempDir,
    script: PathBuf,
    log: PathBuf,
    context: PathBuf,
}

impl FakePython {
    /// Creates a fake interpreter exiting with `exit_code` after printing
    /// `stderr` (if non-empty) to stderr.
    #[cfg(unix)]
    pub(crate) fn new(exit_code: i32, stderr: &str) -> Self {
        let mut tail = String::new();
        if !stderr.is_empty() {
            tail.push_str(&format!("echo '{stderr}' >&2\n"));
        }
        tail.push_str(&format!("exit {exit_code}\n"));
        Self::with_tail(&tail)
    }

    /// Creates a fake interpreter that never exits on its own.
    #[cfg(unix)]
    pub(crate) fn hanging() -> Self {
        Self::with_tail("exec sleep 30\n")
    }

    #[cfg(unix)]
    fn with_tail(tail: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let script = dir.path().join("python");
        let log = dir.path().join("invocations.log");
        let context = dir.path().join("context.log");

        let mut body = format!(
            "#!/bin/sh\n[ \"$1\" = \"--warm-up\" ] && exit 0\nprintf '%s\\n' \"$*\" >> '{}'\n",
            log.display()
        );
        body.push_str(&format!(
            "printf 'cwd=%s\\nPYTHONIOENCODING=%s\\n' \"$(pwd)\" \"$PYTHONIOENCODING\" > '{}'\n",
            context.display()
        ));
        body.push_str(tail);

        std::fs::write(&script, body).expect("failed to write fake python");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake python");
        wait_until_executable(&script);

        Self {
            _dir: dir,
            script,
            log,
            context,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.script
    }

    /// A default config whose interpreter is this fake.
    pub(crate) fn config(&self) -> Config {
        let mut config = Config::default();
        config.tools.python = Some(self.script.clone());
        config
    }

    /// Argument lines of every recorded invocation, oldest first.
    pub(crate) fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `key=value` lines (`cwd`, `PYTHONIOENCODING`) of the last invocation.
    pub(crate) fn last_context(&self) -> Vec<String> {
        std::fs::read_to_string(&self.context)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// Retries a warm-up run while another test thread's fork still holds the
/// freshly written script open (ETXTBSY).
#[cfg(unix)]
fn wait_until_executable(script: &Path) {
    const ETXTBSY: i32 = 26;
    for _ in 0..50 {
        match std::process::Command::new(script).arg("--warm-up").status() {
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
            _ => return,
        }
    }
}

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs an async closure while capturing INFO-and-above tracing output.
pub(crate) async fn run_with_logs<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: Arc::clone(&buffer),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    f().await?;

    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    Ok(String::from_utf8_lossy(&guard).to_string())
}
