//! Where decoder results go.
//!
//! Each decoder applied by a program reports what it decoded together with
//! the user line it ran on. The sink decides what happens to the report:
//! print it, keep it for the embedder to inspect, or drop it.
//!
//! Enum dispatch keeps the call a plain `match` on the hot path.

use std::fmt;

use parking_lot::Mutex;

use crate::Value;

/// One decoder result, already rendered.
///
/// Values hold `Rc`s; keeping the text instead lets a sink cross threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    /// 1-based user line, `None` outside a numbered statement.
    pub line: Option<usize>,
    pub value: String,
}

impl TraceEntry {
    pub fn new(line: Option<usize>, value: &Value) -> Self {
        TraceEntry {
            line,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Collects entries in memory.
#[derive(Default)]
pub struct BufferTrace {
    entries: Mutex<Vec<TraceEntry>>,
}

impl BufferTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: TraceEntry) {
        self.entries.lock().push(entry);
    }

    pub fn entries(&self) -> Vec<TraceEntry> {
        self.entries.lock().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

pub enum TraceSink {
    /// Print each entry on its own line.
    Stdout,
    Buffer(BufferTrace),
    Silent,
}

impl TraceSink {
    pub fn record(&self, entry: TraceEntry) {
        match self {
            Self::Stdout => println!("{entry}"),
            Self::Buffer(buffer) => buffer.record(entry),
            Self::Silent => {}
        }
    }

    /// Captured entries; always empty for sinks that do not capture.
    pub fn entries(&self) -> Vec<TraceEntry> {
        match self {
            Self::Buffer(buffer) => buffer.entries(),
            Self::Stdout | Self::Silent => Vec::new(),
        }
    }

    /// The captured entries rendered one per line.
    pub fn output(&self) -> String {
        self.entries()
            .iter()
            .map(|entry| format!("{entry}\n"))
            .collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.clear();
        }
    }
}

/// A sink shared between the interpreter and whoever reads it back.
pub type SharedTraceSink = std::sync::Arc<TraceSink>;

pub fn stdout_sink() -> SharedTraceSink {
    std::sync::Arc::new(TraceSink::Stdout)
}

pub fn buffer_sink() -> SharedTraceSink {
    std::sync::Arc::new(TraceSink::Buffer(BufferTrace::new()))
}

pub fn silent_sink() -> SharedTraceSink {
    std::sync::Arc::new(TraceSink::Silent)
}
