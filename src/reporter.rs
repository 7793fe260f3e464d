//! Single note name reporting

use crate::error::{Error, Result};
use crate::midi::MidiMessage;
use crate::notes::NoteTable;
use crate::session::EventHandler;

/// Names every sounding note; holds no state of its own
#[derive(Debug, Clone, Copy)]
pub struct NoteNameReporter<'a> {
    table: &'a NoteTable,
}

impl<'a> NoteNameReporter<'a> {
    pub fn new(table: &'a NoteTable) -> Self {
        Self { table }
    }

    /// Name of the note started by `message`, if it is a sounding note-on
    pub fn process(&self, message: &MidiMessage) -> Result<Option<&'a str>> {
        match *message {
            MidiMessage::NoteOn { note, velocity } if velocity > 0 => u8::try_from(note)
                .ok()
                .and_then(|note| self.table.name(note))
                .map(Some)
                .ok_or(Error::NoteOutOfRange(i64::from(note))),
            _ => Ok(None),
        }
    }
}

impl EventHandler for NoteNameReporter<'_> {
    fn handle(&mut self, message: &MidiMessage) -> Result<Option<&str>> {
        self.process(message)
    }
}
