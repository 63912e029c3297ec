use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Local;

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a line stamped with the local time.
    pub fn push(&self, msg: String) {
        let mut buf = self.lock();
        buf.push(format!("{} {}", Local::now().format("%H:%M:%S"), msg));
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid size input validation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid(usize),
}

/// Which panel receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Board,
    Moves,
    GridSize,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::GridSize,
            Focus::GridSize => Focus::Board,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Board => Focus::GridSize,
            Focus::Moves => Focus::Board,
            Focus::GridSize => Focus::Moves,
        }
    }
}
