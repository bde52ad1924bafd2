//! Subprocess launching, stream capture, and termination.

use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::debug;

use crate::error::{E2eError, E2eResult};

/// Capture mode for one standard stream.
#[derive(Debug, Clone, Copy, Default)]
pub enum StreamMode {
    /// Drop the stream.
    #[default]
    Discard,
    /// Capture the stream for the caller.
    Pipe,
    /// Pass the stream through to the suite's own stream.
    Inherit,
}

impl StreamMode {
    fn stdio(self) -> Stdio {
        match self {
            StreamMode::Discard => Stdio::null(),
            StreamMode::Pipe => Stdio::piped(),
            StreamMode::Inherit => Stdio::inherit(),
        }
    }
}

/// Per-stream capture configuration for [`Launched::spawn`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamConfig {
    pub stdin: StreamMode,
    pub stdout: StreamMode,
    pub stderr: StreamMode,
}

/// Outcome of a finished subprocess. Immutable once the process has exited.
/// A non-zero code is data for the caller to assert on, never an error.
#[derive(Debug)]
pub struct ProcessResult {
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessResult {
    pub fn stdout_utf8(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_utf8(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    /// Require a specific exit code, surfacing captured stderr on mismatch.
    pub fn expect_code(&self, command: &str, expected: i32) -> E2eResult<()> {
        if self.code == expected {
            return Ok(());
        }
        Err(E2eError::UnexpectedExit {
            command: command.to_string(),
            expected,
            got: self.code,
            stderr: self.stderr_utf8(),
        })
    }
}

fn display_name(program: &OsStr) -> String {
    program.to_string_lossy().into_owned()
}

/// Run a command to completion with both output streams piped.
pub async fn run<I, S>(program: impl AsRef<OsStr>, args: I) -> E2eResult<ProcessResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| E2eError::Launch {
            command: display_name(program),
            source,
        })?;

    Ok(ProcessResult {
        code: output.status.code().unwrap_or(-1),
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// A still-running subprocess. Killed on drop; [`Launched::terminate`] is
/// the polite path (SIGTERM, short grace period, then kill).
pub struct Launched {
    command: String,
    child: Child,
}

impl Launched {
    pub fn spawn<I, S>(
        program: impl AsRef<OsStr>,
        args: I,
        streams: StreamConfig,
    ) -> E2eResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let program = program.as_ref();
        let command = display_name(program);
        let child = Command::new(program)
            .args(args)
            .stdin(streams.stdin.stdio())
            .stdout(streams.stdout.stdio())
            .stderr(streams.stderr.stdio())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| E2eError::Launch {
                command: command.clone(),
                source,
            })?;

        debug!(command = %command, pid = child.id(), "spawned");
        Ok(Self { command, child })
    }

    /// Take the piped stdin handle. `None` unless stdin was `Pipe`, or if
    /// already taken.
    pub fn stdin_pipe(&mut self) -> Option<ChildStdin> {
        self.child.stdin.take()
    }

    /// Take the piped stdout as a line stream. `None` unless stdout was
    /// `Pipe`, or if already taken.
    pub fn stdout_lines(&mut self) -> Option<Lines<BufReader<ChildStdout>>> {
        self.child
            .stdout
            .take()
            .map(|stdout| BufReader::new(stdout).lines())
    }

    /// Await process exit, returning the exit code.
    pub async fn wait(&mut self) -> E2eResult<i32> {
        let status = self.child.wait().await?;
        Ok(status.code().unwrap_or(-1))
    }

    /// Stop the process: SIGTERM first, then kill if it lingers.
    pub async fn terminate(&mut self) {
        if let Some(pid) = self.child.id() {
            let _ = kill(Pid::from_raw(pid as i32), Signal::SIGTERM);
            if tokio::time::timeout(Duration::from_millis(500), self.child.wait())
                .await
                .is_ok()
            {
                return;
            }
            debug!(command = %self.command, "SIGTERM ignored, killing");
        }
        let _ = self.child.kill().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_exit_code_and_streams() {
        let result = run("sh", ["-c", "echo out; echo err >&2; exit 3"])
            .await
            .unwrap();
        assert_eq!(result.code, 3);
        assert_eq!(result.stdout_utf8(), "out\n");
        assert_eq!(result.stderr_utf8(), "err\n");
    }

    #[tokio::test]
    async fn missing_binary_is_a_launch_failure() {
        let err = run("definitely-not-a-real-binary", Vec::<&str>::new())
            .await
            .unwrap_err();
        assert!(matches!(err, E2eError::Launch { .. }));
    }

    #[tokio::test]
    async fn expect_code_reports_mismatch_with_stderr() {
        let result = run("sh", ["-c", "echo boom >&2; exit 1"]).await.unwrap();
        result.expect_code("sh", 1).unwrap();

        let err = result.expect_code("sh", 0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exited with code 1"));
        assert!(message.contains("boom"));
    }

    #[tokio::test]
    async fn terminate_reaps_a_long_running_child() {
        let mut child = Launched::spawn(
            "sh",
            ["-c", "sleep 30"],
            StreamConfig::default(),
        )
        .unwrap();
        child.terminate().await;
        // already reaped; a second wait returns immediately
        let code = child.wait().await.unwrap();
        assert_ne!(code, 0);
    }

    #[tokio::test]
    async fn piped_stdout_is_line_readable() {
        let mut child = Launched::spawn(
            "sh",
            ["-c", "printf 'one\\ntwo\\n'"],
            StreamConfig {
                stdout: StreamMode::Pipe,
                ..Default::default()
            },
        )
        .unwrap();
        let mut lines = child.stdout_lines().unwrap();
        assert_eq!(lines.next_line().await.unwrap().unwrap(), "one");
        assert_eq!(lines.next_line().await.unwrap().unwrap(), "two");
        assert_eq!(lines.next_line().await.unwrap(), None);
        assert_eq!(child.wait().await.unwrap(), 0);
    }
}
