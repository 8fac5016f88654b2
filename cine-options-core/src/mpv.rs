//! mpv JSON IPC engine.
//!
//! Talks to a running mpv started with `--input-ipc-server=<path>`. Each
//! request is one JSON line; replies are matched by `request_id`, and event
//! lines or replies to earlier async requests are skipped.

use crate::display::StatusDisplay;
use crate::engine::{PlaybackEngine, PropertyValue};
use crate::error::EngineError;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// How long a synchronous request waits for mpv's reply.
pub const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
struct Request<'a> {
    command: &'a [String],
    request_id: u64,
    #[serde(rename = "async", skip_serializing_if = "is_false")]
    is_async: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Deserialize)]
struct Reply {
    request_id: Option<u64>,
    error: Option<String>,
    #[serde(default)]
    data: Value,
    event: Option<String>,
}

struct Connection {
    reader: BufReader<UnixStream>,
    writer: UnixStream,
}

/// A [`PlaybackEngine`] and [`StatusDisplay`] backed by mpv's IPC socket.
///
/// # Example
///
/// ```no_run
/// use cine_options_core::{MpvIpcEngine, PlaybackEngine};
///
/// let mpv = MpvIpcEngine::connect("/tmp/mpvsocket")?;
/// mpv.add("video-zoom", 0.1.into())?;
/// println!("zoom: {}", mpv.get_property("video-zoom")?);
/// # Ok::<(), cine_options_core::EngineError>(())
/// ```
pub struct MpvIpcEngine {
    conn: Mutex<Connection>,
    next_id: AtomicU64,
}

impl MpvIpcEngine {
    /// Connect to the IPC socket at `path`, waiting at most
    /// [`REPLY_TIMEOUT`] for each reply.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        Self::connect_with_timeout(path, REPLY_TIMEOUT)
    }

    /// Connect to the IPC socket at `path`. A reply that takes longer than
    /// `timeout` fails the request with [`EngineError::Io`].
    pub fn connect_with_timeout(
        path: impl AsRef<Path>,
        timeout: Duration,
    ) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let writer = UnixStream::connect(path)?;
        writer.set_read_timeout(Some(timeout))?;
        let reader = BufReader::new(writer.try_clone()?);
        debug!("connected to mpv at {}", path.display());

        Ok(Self {
            conn: Mutex::new(Connection { reader, writer }),
            next_id: AtomicU64::new(1),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn send(&self, args: &[PropertyValue], is_async: bool) -> Result<Value, EngineError> {
        let command: Vec<String> = args.iter().map(ToString::to_string).collect();
        let request_id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let line = serde_json::to_string(&Request {
            command: &command,
            request_id,
            is_async,
        })?;

        let mut conn = self.lock();
        trace!("-> {}", line);
        conn.writer.write_all(line.as_bytes())?;
        conn.writer.write_all(b"\n")?;
        conn.writer.flush()?;

        if is_async {
            return Ok(Value::Null);
        }

        loop {
            let mut buf = String::new();
            if conn.reader.read_line(&mut buf)? == 0 {
                return Err(EngineError::Disconnected);
            }
            trace!("<- {}", buf.trim_end());

            let reply: Reply = serde_json::from_str(&buf)?;
            if reply.event.is_some() || reply.request_id != Some(request_id) {
                continue;
            }

            return match reply.error.as_deref() {
                Some("success") | None => Ok(reply.data),
                Some(message) => Err(EngineError::Mpv {
                    command: command.first().cloned().unwrap_or_default(),
                    message: message.to_string(),
                }),
            };
        }
    }
}

impl PlaybackEngine for MpvIpcEngine {
    fn command(&self, args: &[PropertyValue]) -> Result<(), EngineError> {
        self.send(args, false).map(|_| ())
    }

    fn command_async(&self, args: &[PropertyValue]) -> Result<(), EngineError> {
        self.send(args, true).map(|_| ())
    }

    fn get_property(&self, name: &str) -> Result<PropertyValue, EngineError> {
        let data = self.send(&["get_property".into(), name.into()], false)?;
        Ok(property_from_json(data))
    }
}

impl StatusDisplay for MpvIpcEngine {
    fn show_text(&self, message: &str) {
        if let Err(e) = self.command(&["show-text".into(), message.into()]) {
            warn!("failed to show '{}': {}", message, e);
        }
    }
}

fn property_from_json(value: Value) -> PropertyValue {
    match value {
        Value::Bool(b) => PropertyValue::Flag(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => PropertyValue::Int(i),
            None => PropertyValue::Double(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => PropertyValue::Text(s),
        other => PropertyValue::Text(other.to_string()),
    }
}
