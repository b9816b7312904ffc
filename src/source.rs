//! Remote record source.
//!
//! The record list is read once at startup. The engine does not own an
//! HTTP stack: the host fetches the feed body and hands it over through a
//! [`RecordSource`]. A fetch can run on a background thread with
//! [`spawn_fetch`]; its outcome is applied on the engine's next action.

use crate::error::{BrowserError, Result};
use crate::types::Record;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Anything that can produce the initial record list.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<Record>>;
}

impl<F> RecordSource for F
where
    F: Fn() -> Result<Vec<Record>>,
{
    fn fetch(&self) -> Result<Vec<Record>> {
        self()
    }
}

#[derive(Clone, Debug)]
enum JsonBody {
    Text(String),
    File(PathBuf),
}

/// A JSON array of records, held in memory or read from a file on fetch.
#[derive(Clone, Debug)]
pub struct JsonSource {
    body: JsonBody,
}

impl JsonSource {
    /// Source over an already-fetched response body.
    pub fn from_json(body: impl Into<String>) -> Self {
        Self {
            body: JsonBody::Text(body.into()),
        }
    }

    /// Source reading a JSON file each time it is fetched.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            body: JsonBody::File(path.into()),
        }
    }

    /// Drain a reader into an in-memory source.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        Ok(Self::from_json(body))
    }
}

impl RecordSource for JsonSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        let records: Vec<Record> = match &self.body {
            JsonBody::Text(text) => serde_json::from_str(text)?,
            JsonBody::File(path) => {
                let text = fs::read_to_string(path)?;
                serde_json::from_str(&text)?
            }
        };
        debug!(count = records.len(), "parsed record feed");
        Ok(records)
    }
}

/// Pending result of a background fetch.
pub struct FetchHandle {
    receiver: Receiver<Result<Vec<Record>>>,
    finished: bool,
}

impl FetchHandle {
    /// Take the outcome if the fetch has finished.
    ///
    /// Returns `None` while the fetch is still running and after the outcome
    /// has been taken once.
    pub fn try_take(&mut self) -> Option<Result<Vec<Record>>> {
        if self.finished {
            return None;
        }
        let outcome = match self.receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(fetch_thread_gone()),
        };
        self.finished = true;
        Some(outcome)
    }

    /// Block until the fetch finishes or `timeout` elapses.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Option<Result<Vec<Record>>> {
        if self.finished {
            return None;
        }
        let outcome = match self.receiver.recv_timeout(timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => return None,
            Err(RecvTimeoutError::Disconnected) => Err(fetch_thread_gone()),
        };
        self.finished = true;
        Some(outcome)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

fn fetch_thread_gone() -> BrowserError {
    BrowserError::SourceUnavailable("fetch thread exited without a result".to_string())
}

/// Run `source.fetch()` on a background thread.
pub fn spawn_fetch<S>(source: S) -> Result<FetchHandle>
where
    S: RecordSource + Send + 'static,
{
    let (sender, receiver) = bounded(1);
    thread::Builder::new()
        .name("record-fetch".to_string())
        .spawn(move || {
            // The handle may already be gone; nothing to report to then.
            let _ = sender.send(source.fetch());
        })?;

    Ok(FetchHandle {
        receiver,
        finished: false,
    })
}
