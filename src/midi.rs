//! MIDI input messages

use serde::Deserialize;

/// Channel voice status nibbles
pub mod status {
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
}

/// Highest valid MIDI note number
pub const MAX_NOTE: u16 = 127;

/// A MIDI message as seen by the note handlers
///
/// Only note messages carry meaning here; everything else decodes to `Other`.
/// Note numbers are wider than a MIDI data byte so that a bad value from the
/// input side reaches the handlers and is reported as out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MidiMessage {
    NoteOn {
        note: u16,
        velocity: u8,
    },
    NoteOff {
        note: u16,
        #[serde(default)]
        velocity: u8,
    },
    #[serde(other)]
    Other,
}

impl MidiMessage {
    /// Decode a raw channel voice message
    ///
    /// Returns None for an empty buffer or a truncated note message.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let (&status_byte, data) = bytes.split_first()?;
        match status_byte & 0xF0 {
            status::NOTE_ON => match data {
                [note, velocity, ..] => Some(MidiMessage::NoteOn {
                    note: u16::from(*note),
                    velocity: *velocity,
                }),
                _ => None,
            },
            status::NOTE_OFF => match data {
                [note, velocity, ..] => Some(MidiMessage::NoteOff {
                    note: u16::from(*note),
                    velocity: *velocity,
                }),
                _ => None,
            },
            _ => Some(MidiMessage::Other),
        }
    }

    /// Note number of a note message
    pub fn note(&self) -> Option<u16> {
        match *self {
            MidiMessage::NoteOn { note, .. } | MidiMessage::NoteOff { note, .. } => Some(note),
            MidiMessage::Other => None,
        }
    }

    /// Note-on with a non-zero velocity
    pub fn is_sounding(&self) -> bool {
        matches!(*self, MidiMessage::NoteOn { velocity, .. } if velocity > 0)
    }

    /// Note-off, or note-on with zero velocity
    pub fn is_release(&self) -> bool {
        matches!(
            *self,
            MidiMessage::NoteOff { .. } | MidiMessage::NoteOn { velocity: 0, .. }
        )
    }
}
