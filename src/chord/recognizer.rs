//! Live chord recognition

use super::dictionary::ChordDictionary;
use super::shape::ChordShape;
use crate::error::{Error, Result};
use crate::midi::{MidiMessage, MAX_NOTE};
use crate::notes::pitch_class;
use crate::session::EventHandler;

/// Tracks held pitch classes and names the chord they form
///
/// Each recognizer owns its held-notes state; the dictionary is shared
/// read-only, so several recognizers can run from one configuration.
#[derive(Debug, Clone)]
pub struct ChordRecognizer<'a> {
    dictionary: &'a ChordDictionary,
    held: ChordShape,
}

impl<'a> ChordRecognizer<'a> {
    pub fn new(dictionary: &'a ChordDictionary) -> Self {
        Self {
            dictionary,
            held: ChordShape::EMPTY,
        }
    }

    /// Pitch classes currently held
    pub fn held(&self) -> ChordShape {
        self.held
    }

    /// Release everything
    pub fn reset(&mut self) {
        self.held.clear();
    }

    /// Apply one message; returns the chord completed by a note-on
    ///
    /// Lookup happens only on a sounding note-on, so a chord is reported
    /// again each time one of its notes is (re)pressed, never on release.
    pub fn process(&mut self, message: &MidiMessage) -> Result<Option<&'a str>> {
        let Some(note) = message.note() else {
            return Ok(None);
        };
        if note > MAX_NOTE {
            return Err(Error::NoteOutOfRange(i64::from(note)));
        }

        let pc = pitch_class(note as u8);
        if message.is_sounding() {
            self.held.insert(pc);
            Ok(self.dictionary.get(self.held))
        } else {
            self.held.remove(pc);
            Ok(None)
        }
    }
}

impl EventHandler for ChordRecognizer<'_> {
    fn handle(&mut self, message: &MidiMessage) -> Result<Option<&str>> {
        self.process(message)
    }
}
