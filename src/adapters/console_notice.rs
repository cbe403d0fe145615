use std::io::{self, Write};
use std::sync::Mutex;

use cad_core::ports::NoticePort;
use cad_core::Notice;
use tracing::warn;

/// Prints notices as `title: message` lines.
pub struct ConsoleNotice<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleNotice<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleNotice<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> NoticePort for ConsoleNotice<W> {
    fn notify(&self, notice: Notice) {
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{}: {}", notice.title(), notice.message()) {
            warn!(error = %err, "Failed to print notice");
        }
    }
}
