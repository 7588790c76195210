use super::{ScanEvent, ScanSource};
use crate::errors::{AppError, AppResult};
use std::io::{BufRead, BufReader};
use std::process::{Child, ChildStdout, Command, Stdio};

/// Prefix printed by zbar tools when not running in `--raw` mode.
const ZBAR_QR_PREFIX: &str = "QR-Code:";

/// Payloads decoded by an external camera decoder (e.g. `zbarcam --raw`),
/// read line by line from its stdout.
pub struct DecoderFeed {
    command_line: String,
    child: Child,
    stdout: BufReader<ChildStdout>,
}

impl DecoderFeed {
    /// Start the decoder. Failure to launch is a scanner error.
    pub fn spawn(command_line: &str) -> AppResult<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| AppError::ScanSource("no decoder command configured".into()))?;

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| AppError::ScanSource(format!("failed to start '{}': {}", program, e)))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| AppError::ScanSource("decoder stdout unavailable".into()))?;

        Ok(Self {
            command_line: command_line.to_string(),
            child,
            stdout: BufReader::new(stdout),
        })
    }
}

impl ScanSource for DecoderFeed {
    fn next_scan(&mut self) -> AppResult<Option<ScanEvent>> {
        let mut line = String::new();
        loop {
            line.clear();
            let n = self
                .stdout
                .read_line(&mut line)
                .map_err(|e| AppError::ScanSource(format!("read failed: {}", e)))?;

            if n == 0 {
                let status = self
                    .child
                    .wait()
                    .map_err(|e| AppError::ScanSource(e.to_string()))?;
                if status.success() {
                    return Ok(None);
                }
                return Err(AppError::ScanSource(format!(
                    "'{}' exited with {}",
                    self.command_line, status
                )));
            }

            let payload = strip_line_ending(&line);
            let payload = payload.strip_prefix(ZBAR_QR_PREFIX).unwrap_or(payload);
            if payload.is_empty() {
                continue;
            }
            return Ok(Some(ScanEvent::Payload(payload.to_string())));
        }
    }

    fn describe(&self) -> String {
        format!("decoder '{}'", self.command_line)
    }
}

impl Drop for DecoderFeed {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

/// Decoded content is kept verbatim apart from the line terminator.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
