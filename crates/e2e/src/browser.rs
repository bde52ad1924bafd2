//! Headless-browser automation via a Playwright driver subprocess.
//!
//! A small Node driver owns the Chromium instance and one page, and speaks a
//! JSON-lines protocol on stdin/stdout: one command in, one reply out. The
//! Rust side exposes only the capabilities the suite needs — navigate, text
//! content, click, computed style, close — so nothing here depends on more
//! of the automation library than that.

use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tempfile::TempDir;
use tokio::io::{AsyncWriteExt, BufReader, Lines};
use tokio::process::{ChildStdin, ChildStdout};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::{E2eError, E2eResult};
use crate::process::{Launched, StreamConfig, StreamMode};

/// Chromium can take a while to come up on a cold cache.
const LAUNCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Per-command deadline once the browser is up.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Exclusive handle to a headless browser with one open page.
///
/// The driver process is killed on drop; [`BrowserSession::close`] is the
/// graceful path (page and browser close, then process exit).
pub struct BrowserSession {
    driver: Launched,
    stdin: ChildStdin,
    lines: Lines<BufReader<ChildStdout>>,
    // keeps the staged driver script alive for the child's lifetime
    _workdir: TempDir,
}

#[derive(Debug, Deserialize)]
struct DriverReply {
    ok: bool,
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    event: Option<String>,
}

impl BrowserSession {
    /// Whether the Node/Playwright toolchain is present on this machine.
    pub fn available() -> bool {
        std::process::Command::new("node")
            .args(["-e", "require('playwright')"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Launch headless Chromium (sandbox disabled, for ephemeral/CI
    /// environments) and open one page.
    pub async fn launch() -> E2eResult<Self> {
        if !Self::available() {
            return Err(E2eError::BrowserUnavailable);
        }

        let workdir = TempDir::new()?;
        let script = workdir.path().join("driver.js");
        std::fs::write(&script, DRIVER_JS)?;

        let mut driver = Launched::spawn(
            "node",
            [script.as_os_str()],
            StreamConfig {
                stdin: StreamMode::Pipe,
                stdout: StreamMode::Pipe,
                stderr: StreamMode::Inherit,
            },
        )?;

        let stdin = driver
            .stdin_pipe()
            .ok_or_else(|| E2eError::Browser("driver stdin was not piped".to_string()))?;
        let mut lines = driver
            .stdout_lines()
            .ok_or_else(|| E2eError::Browser("driver stdout was not piped".to_string()))?;

        // The first line is the ready event, once Chromium is up.
        let first = timeout(LAUNCH_TIMEOUT, lines.next_line())
            .await
            .map_err(|_| E2eError::Browser("browser launch timed out".to_string()))??;
        let ready: DriverReply = match first {
            Some(line) => serde_json::from_str(&line)?,
            None => {
                driver.terminate().await;
                return Err(E2eError::Browser(
                    "driver exited before becoming ready".to_string(),
                ));
            }
        };
        if !ready.ok || ready.event.as_deref() != Some("ready") {
            driver.terminate().await;
            return Err(E2eError::Browser(
                ready.error.unwrap_or_else(|| "driver failed to start".to_string()),
            ));
        }

        debug!("browser driver ready");
        Ok(Self {
            driver,
            stdin,
            lines,
            _workdir: workdir,
        })
    }

    async fn command(&mut self, command: serde_json::Value) -> E2eResult<DriverReply> {
        let mut payload = command.to_string();
        payload.push('\n');
        self.stdin.write_all(payload.as_bytes()).await?;

        let line = timeout(COMMAND_TIMEOUT, self.lines.next_line())
            .await
            .map_err(|_| E2eError::Browser("driver command timed out".to_string()))??
            .ok_or_else(|| E2eError::Browser("driver closed its output".to_string()))?;
        Ok(serde_json::from_str(&line)?)
    }

    fn check(reply: DriverReply, selector: Option<&str>) -> E2eResult<DriverReply> {
        if reply.ok {
            return Ok(reply);
        }
        if reply.code.as_deref() == Some("not_found") {
            return Err(E2eError::ElementNotFound(
                selector.unwrap_or("<none>").to_string(),
            ));
        }
        Err(E2eError::Browser(
            reply.error.unwrap_or_else(|| "unknown driver error".to_string()),
        ))
    }

    /// Navigate and wait until network activity is idle, so DOM-dependent
    /// assertions need no fixed sleep afterwards.
    pub async fn goto(&mut self, url: &str) -> E2eResult<()> {
        let reply = self.command(json!({ "op": "goto", "url": url })).await?;
        Self::check(reply, None).map(|_| ())
    }

    /// Text content of the first element matching `selector`.
    pub async fn text(&mut self, selector: &str) -> E2eResult<String> {
        let reply = self
            .command(json!({ "op": "text", "selector": selector }))
            .await?;
        let reply = Self::check(reply, Some(selector))?;
        match reply.value {
            Some(serde_json::Value::String(text)) => Ok(text),
            other => Err(E2eError::Browser(format!(
                "driver returned no text for {selector:?}: {other:?}"
            ))),
        }
    }

    /// Dispatch a click on the first element matching `selector`.
    pub async fn click(&mut self, selector: &str) -> E2eResult<()> {
        let reply = self
            .command(json!({ "op": "click", "selector": selector }))
            .await?;
        Self::check(reply, Some(selector)).map(|_| ())
    }

    /// Computed style property (e.g. `font-weight`) of the first match.
    pub async fn computed_style(&mut self, selector: &str, property: &str) -> E2eResult<String> {
        let reply = self
            .command(json!({ "op": "style", "selector": selector, "prop": property }))
            .await?;
        let reply = Self::check(reply, Some(selector))?;
        match reply.value {
            Some(serde_json::Value::String(value)) => Ok(value),
            other => Err(E2eError::Browser(format!(
                "driver returned no style for {selector:?}: {other:?}"
            ))),
        }
    }

    /// Read `selector`'s text and require it to equal `expected`.
    pub async fn expect_text(&mut self, selector: &str, expected: &str) -> E2eResult<()> {
        let actual = self.text(selector).await?;
        if actual == expected {
            return Ok(());
        }
        Err(E2eError::Mismatch {
            what: "text content",
            expected: expected.to_string(),
            actual,
        })
    }

    /// Read `selector`'s computed `property` and require it to equal
    /// `expected`.
    pub async fn expect_style(
        &mut self,
        selector: &str,
        property: &str,
        expected: &str,
    ) -> E2eResult<()> {
        let actual = self.computed_style(selector, property).await?;
        if actual == expected {
            return Ok(());
        }
        Err(E2eError::Mismatch {
            what: "computed style",
            expected: expected.to_string(),
            actual,
        })
    }

    /// Close the page and browser, then reap the driver. Failures here are
    /// logged, not surfaced: disposal must not mask an earlier assertion.
    pub async fn close(mut self) {
        match self.command(json!({ "op": "close" })).await {
            Ok(reply) if reply.ok => {
                let _ = self.driver.wait().await;
            }
            Ok(reply) => {
                warn!(error = ?reply.error, "browser close reported failure");
                self.driver.terminate().await;
            }
            Err(err) => {
                warn!(%err, "browser close failed");
                self.driver.terminate().await;
            }
        }
    }
}

/// The Node side of the protocol: launches Chromium, opens one page, then
/// answers one JSON command per stdin line with one JSON reply per stdout
/// line until `close` (or stdin EOF).
const DRIVER_JS: &str = r#"const readline = require("readline");
const { chromium } = require("playwright");

(async () => {
  const browser = await chromium.launch({ headless: true, args: ["--no-sandbox"] });
  const page = await browser.newPage();
  const reply = (obj) => process.stdout.write(JSON.stringify(obj) + "\n");
  reply({ ok: true, event: "ready" });

  const rl = readline.createInterface({ input: process.stdin });
  for await (const line of rl) {
    let cmd;
    try {
      cmd = JSON.parse(line);
    } catch (err) {
      reply({ ok: false, error: "unparseable command: " + String(err) });
      continue;
    }
    try {
      switch (cmd.op) {
        case "goto": {
          await page.goto(cmd.url, { waitUntil: "networkidle" });
          reply({ ok: true });
          break;
        }
        case "text": {
          const el = await page.$(cmd.selector);
          if (!el) {
            reply({ ok: false, code: "not_found", error: "no element: " + cmd.selector });
            break;
          }
          reply({ ok: true, value: await el.textContent() });
          break;
        }
        case "click": {
          await page.click(cmd.selector, { timeout: 5000 });
          reply({ ok: true });
          break;
        }
        case "style": {
          const el = await page.$(cmd.selector);
          if (!el) {
            reply({ ok: false, code: "not_found", error: "no element: " + cmd.selector });
            break;
          }
          const value = await el.evaluate(
            (node, prop) => getComputedStyle(node).getPropertyValue(prop),
            cmd.prop
          );
          reply({ ok: true, value: value });
          break;
        }
        case "close": {
          await page.close();
          await browser.close();
          reply({ ok: true });
          process.exit(0);
        }
        default:
          reply({ ok: false, error: "unknown op: " + String(cmd.op) });
      }
    } catch (err) {
      reply({ ok: false, error: String((err && err.message) || err) });
    }
  }
  await browser.close();
})().catch((err) => {
  process.stderr.write(String(err) + "\n");
  process.exit(1);
});
"#;
