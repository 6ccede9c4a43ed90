//! Optional diagnostic event sink.
//!
//! When attached, every published [`PadEvent`] is appended to the sink as one
//! timestamped JSON line:
//!
//! ```text
//! {"at_unix_ms":1754650000123,"uptime_ms":4218,"event":{"Connected":2}}
//! ```
//!
//! The sink is strictly best-effort: a full disk or yanked log target must
//! never affect arbitration, so write failures are downgraded to a warning and
//! swallowed.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::event::PadEvent;

#[derive(Serialize)]
struct EventRecord<'a> {
    at_unix_ms: u128,
    uptime_ms: u128,
    event: &'a PadEvent,
}

/// Appends arbitration events as JSON lines to any writer.
pub struct DiagnosticSink {
    out: Box<dyn Write + Send>,
}

impl DiagnosticSink {
    /// Wrap an arbitrary writer.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self { out: Box::new(out) }
    }

    /// Append to a file, creating it if needed.
    pub fn to_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Record one event. Failures are logged at warn level and swallowed.
    pub fn record(&mut self, uptime: Duration, event: &PadEvent) {
        let at_unix_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let record = EventRecord {
            at_unix_ms,
            uptime_ms: uptime.as_millis(),
            event,
        };

        let result = serde_json::to_writer(&mut self.out, &record)
            .map_err(io::Error::from)
            .and_then(|_| self.out.write_all(b"\n"))
            .and_then(|_| self.out.flush());

        if let Err(e) = result {
            log::warn!("diagnostic sink write failed: {e}");
        }
    }
}
