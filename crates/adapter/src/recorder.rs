//! JSON-lines transition recorder.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{GameState, Observer};
use crate::protocol::StateMessage;
use crate::types::Command;

/// Observer writing one [`StateMessage`] per line to `W`
///
/// Observers cannot fail a transition, so the first write error is kept and
/// further writes are skipped until [`JsonLinesRecorder::take_error`] clears it.
pub struct JsonLinesRecorder<W: Write> {
    out: W,
    seq: u64,
    error: Option<io::Error>,
}

impl<W: Write> JsonLinesRecorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            error: None,
        }
    }

    /// Number of transitions written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, msg: &StateMessage) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, msg)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl JsonLinesRecorder<BufWriter<File>> {
    /// Record into a file, truncating it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create record file {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Observer for JsonLinesRecorder<W> {
    fn on_transition(&mut self, command: Command, state: &GameState) {
        if self.error.is_some() {
            return;
        }
        let msg = StateMessage::from_state(self.seq, command, state);
        match self.write_line(&msg) {
            Ok(()) => self.seq += 1,
            Err(e) => self.error = Some(e),
        }
    }
}
