//! Event sink that narrates a session as text lines.

use std::io::{self, Write};

use game_core::{CombatEvent, EventSink};

use crate::format::describe;

/// Writes one line per combat event to `out`.
///
/// `EventSink::emit` cannot fail, so the first write error is kept and
/// returned by [`Narrator::finish`]; later events are dropped.
pub struct Narrator<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            error: None,
        }
    }

    /// Return the writer, or the first error hit while narrating.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> EventSink for Narrator<W> {
    fn emit(&mut self, event: CombatEvent) {
        if self.error.is_some() {
            return;
        }

        let Some(line) = describe(&event) else {
            return;
        };

        if let Err(err) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write narration: {}", err);
            self.error = Some(err);
        }
    }
}
