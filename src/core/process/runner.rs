// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! build_command()  args, cwd, extra env, stdio
//!   |
//!   v
//! spawn() --> run_child()
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! A non-zero exit is not an error here: callers inspect
//! [`ProcessOutput::success`] and report failures in their own terms.

use crate::error::{DocsError, ProcessError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

impl ProcessBuilder {
    /// Spawns the process and waits for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The timeout elapses.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self.build_command().spawn().map_err(|source| {
            DocsError::from(ProcessError::SpawnFailed {
                command: cmd_line,
                source,
            })
        })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self.run_child(&name, &mut child).await?;

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command.envs(self.extra_env());

        command.stdin(Stdio::null());
        command.stdout(stdio_from_flags(self.stdout_stream()));
        command.stderr(stdio_from_flags(self.stderr_stream()));
        command.kill_on_drop(true);

        command
    }
}

fn stdio_from_flags(flags: StreamFlags) -> Stdio {
    if flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        Stdio::piped()
    } else {
        Stdio::null()
    }
}
