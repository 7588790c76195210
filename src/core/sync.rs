//! Fire-and-forget forwarding of new scans to a remote endpoint.

use crate::config::Config;
use crate::models::AttendanceRecord;
use crate::ui::messages::warning;
use std::thread::JoinHandle;
use std::time::Duration;

pub struct RemoteSync {
    endpoint: Option<String>,
    timeout: Duration,
    workers: Vec<JoinHandle<()>>,
    submitted: usize,
}

impl RemoteSync {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            workers: Vec::new(),
            submitted: 0,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            cfg.sync_endpoint().map(str::to_string),
            Duration::from_secs(cfg.sync_timeout_secs),
        )
    }

    pub fn disabled() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Workers not yet joined.
    pub fn pending(&self) -> usize {
        self.workers.len()
    }

    /// Number of submissions handed to a worker so far.
    pub fn dispatched(&self) -> usize {
        self.submitted
    }

    /// POST `record` as JSON on a detached worker. The response is never
    /// inspected and failures only print a warning.
    pub fn submit(&mut self, record: &AttendanceRecord) {
        let Some(url) = self.endpoint.clone() else {
            return;
        };
        let record = record.clone();
        let timeout = self.timeout;

        // finished workers carry nothing worth joining
        self.workers.retain(|h| !h.is_finished());

        let spawned = std::thread::Builder::new()
            .name("rollcall-sync".into())
            .spawn(move || {
                if let Err(e) = post_record(&url, &record, timeout) {
                    warning(format!("Error submitting attendance for {}: {}", record.id, e));
                }
            });

        match spawned {
            Ok(handle) => {
                self.workers.push(handle);
                self.submitted += 1;
            }
            Err(e) => warning(format!("Could not start sync worker: {}", e)),
        }
    }

    /// Wait for outstanding workers (each bounded by the HTTP timeout).
    /// Their outcome is still discarded.
    pub fn drain(&mut self) {
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Drop for RemoteSync {
    fn drop(&mut self) {
        self.drain();
    }
}

fn post_record(
    url: &str,
    record: &AttendanceRecord,
    timeout: Duration,
) -> Result<(), reqwest::Error> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    client.post(url).json(record).send()?;
    Ok(())
}
