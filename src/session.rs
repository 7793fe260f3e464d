//! Event sessions
//!
//! A session connects one event handler to one output. The input side pushes
//! messages into it one at a time, in arrival order.

use crate::error::{Error, Result};
use crate::midi::MidiMessage;
use std::io::{self, Write};

/// Consumes MIDI messages and yields a name to report, if any
pub trait EventHandler {
    fn handle(&mut self, message: &MidiMessage) -> Result<Option<&str>>;
}

/// Receives each reported name
pub trait Output {
    fn emit(&mut self, name: &str) -> io::Result<()>;
}

impl Output for Vec<String> {
    fn emit(&mut self, name: &str) -> io::Result<()> {
        self.push(name.to_string());
        Ok(())
    }
}

/// Writes one name per line, flushing after each so names appear live
#[derive(Debug)]
pub struct WriterOutput<W: Write> {
    writer: W,
}

impl<W: Write> WriterOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for WriterOutput<W> {
    fn emit(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", name)?;
        self.writer.flush()
    }
}

/// Session counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Messages handed to the handler
    pub events: u64,
    /// Names sent to the output
    pub emitted: u64,
    /// Messages dropped for an out-of-range note or an undecodable line
    pub skipped: u64,
}

/// One handler bound to one output
#[derive(Debug)]
pub struct Session<H, O> {
    handler: H,
    output: O,
    closed: bool,
    stats: SessionStats,
}

impl<H: EventHandler, O: Output> Session<H, O> {
    pub fn new(handler: H, output: O) -> Self {
        Self {
            handler,
            output,
            closed: false,
            stats: SessionStats::default(),
        }
    }

    /// Handle one message
    ///
    /// An out-of-range note is logged and skipped; the session keeps going.
    /// Once closed, messages are dropped without reaching the handler.
    pub fn dispatch(&mut self, message: &MidiMessage) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.stats.events += 1;
        match self.handler.handle(message) {
            Ok(Some(name)) => {
                self.output.emit(name)?;
                self.stats.emitted += 1;
            }
            Ok(None) => {}
            Err(Error::NoteOutOfRange(note)) => {
                log::warn!("skipping {:?}: note {} is out of range", message, note);
                self.stats.skipped += 1;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Handle a batch of messages in order
    pub fn feed(&mut self, messages: &[MidiMessage]) -> Result<()> {
        for message in messages {
            if self.closed {
                break;
            }
            self.dispatch(message)?;
        }
        Ok(())
    }

    /// Drain a fallible event stream until it ends or the session is closed
    ///
    /// A capture line that does not decode is logged and skipped like an
    /// out-of-range note. Other stream errors end the run.
    pub fn run<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<MidiMessage>>,
    {
        for event in events {
            if self.closed {
                break;
            }
            match event {
                Ok(message) => self.dispatch(&message)?,
                Err(Error::Capture { line, message }) => {
                    log::warn!("skipping capture line {}: {}", line, message);
                    self.stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }
        log::debug!("session finished: {:?}", self.stats);
        Ok(())
    }

    /// Stop handling messages; safe to call any number of times
    pub fn close(&mut self) {
        if !self.closed {
            log::debug!("session closed after {} events", self.stats.events);
        }
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
