//! Spawning the preview server and probing its log for readiness.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncBufRead, Lines};
use tokio::time::{sleep, timeout, Instant};
use tracing::info;

use atoll_common::LISTEN_BANNER;

use crate::error::{E2eError, E2eResult};
use crate::process::{Launched, StreamConfig, StreamMode};

/// Fixed settling delay between the readiness line and the first request.
/// The log line can precede the listener accepting by a beat; this is a
/// race-avoidance workaround, not a protocol guarantee.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Configuration for spawning a preview server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the `atoll-dev` binary.
    pub binary: PathBuf,

    /// Scaffolded project to serve.
    pub project_dir: PathBuf,

    /// Port to serve on.
    pub port: u16,

    /// Deadline for the readiness signal.
    pub startup_timeout: Duration,
}

impl ServerConfig {
    pub fn new(binary: PathBuf, project_dir: PathBuf, port: u16) -> Self {
        Self {
            binary,
            project_dir,
            port,
            startup_timeout: Duration::from_secs(30),
        }
    }
}

/// Exclusive handle to a running preview server.
///
/// The child is killed on drop; [`ServerHandle::stop`] is the graceful path
/// (SIGTERM, then kill).
pub struct ServerHandle {
    child: Launched,
    base_url: String,
}

impl ServerHandle {
    /// Spawn the server, wait for the readiness signal on its stdout, and
    /// wait out the settling delay. The child never outlives an error.
    pub async fn spawn(config: ServerConfig) -> E2eResult<Self> {
        let mut args: Vec<OsString> = vec![config.project_dir.clone().into()];
        args.push("--port".into());
        args.push(config.port.to_string().into());

        let mut child = Launched::spawn(
            &config.binary,
            args,
            StreamConfig {
                stdin: StreamMode::Discard,
                stdout: StreamMode::Pipe,
                stderr: StreamMode::Inherit,
            },
        )?;

        let mut lines = child
            .stdout_lines()
            .ok_or_else(|| E2eError::ServerStart("stdout was not piped".to_string()))?;

        if let Err(err) = await_ready(&mut lines, LISTEN_BANNER, config.startup_timeout).await {
            child.terminate().await;
            return Err(err);
        }

        // Keep draining stdout so the child can never block on a full pipe;
        // the lines double as live diagnostics.
        tokio::spawn(async move {
            while let Ok(Some(line)) = lines.next_line().await {
                info!(target: "atoll_dev", "{line}");
            }
        });

        sleep(SETTLE_DELAY).await;

        Ok(Self {
            child,
            base_url: format!("http://127.0.0.1:{}", config.port),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop the server and reap the child.
    pub async fn stop(&mut self) {
        self.child.terminate().await;
    }
}

/// Consume a line stream until a line contains `signal`.
///
/// Each line is logged for post-mortem debugging. The stream ending first
/// means the process gave up before becoming ready; the wall-clock deadline
/// bounds a server that stays silent without ever closing its stream. Both
/// outcomes are terminal, there is no retry.
pub async fn await_ready<R>(
    lines: &mut Lines<R>,
    signal: &str,
    deadline: Duration,
) -> E2eResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let started = Instant::now();
    loop {
        let remaining = deadline
            .checked_sub(started.elapsed())
            .ok_or_else(|| deadline_error(signal, deadline))?;

        match timeout(remaining, lines.next_line()).await {
            Err(_) => return Err(deadline_error(signal, deadline)),
            Ok(Err(err)) => return Err(err.into()),
            Ok(Ok(None)) => {
                return Err(E2eError::ServerStart(
                    "output ended before the readiness signal".to_string(),
                ))
            }
            Ok(Ok(Some(line))) => {
                info!(target: "atoll_dev", "{line}");
                if line.contains(signal) {
                    return Ok(());
                }
            }
        }
    }
}

fn deadline_error(signal: &str, deadline: Duration) -> E2eError {
    E2eError::ServerStart(format!("no {signal:?} within {deadline:?}"))
}

/// Find a free local port by binding port 0 and reading the assignment.
pub fn find_free_port() -> E2eResult<u16> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader};

    #[tokio::test]
    async fn ready_on_the_signal_line() {
        let output: &[u8] = b"warming up\nServer listening on http://127.0.0.1:9\n";
        let mut lines = BufReader::new(output).lines();
        await_ready(&mut lines, LISTEN_BANNER, Duration::from_secs(1))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn stream_end_without_signal_fails() {
        let output: &[u8] = b"something broke\n";
        let mut lines = BufReader::new(output).lines();
        let err = await_ready(&mut lines, LISTEN_BANNER, Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, E2eError::ServerStart(_)));
    }

    #[tokio::test]
    async fn silent_open_stream_hits_the_deadline() {
        let (_held_open, reader) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();
        let err = await_ready(&mut lines, LISTEN_BANNER, Duration::from_millis(50))
            .await
            .unwrap_err();
        assert!(matches!(err, E2eError::ServerStart(_)));
    }

    #[test]
    fn free_ports_are_in_the_unprivileged_range() {
        let port = find_free_port().unwrap();
        assert!(port > 1024);
    }
}
