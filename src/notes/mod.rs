//! Note naming tables
//!
//! Builds the two lookup tables used by the reporters: MIDI number to note
//! name, and note name back to MIDI number (or pitch class when octave
//! numbers are left out of the names).

pub mod scheme;

pub use scheme::{NamingScheme, Preset};

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Number of pitch classes in an octave
pub const NOTES_PER_OCTAVE: u8 = 12;

/// MIDI number of pitch class 0 in octave 0
pub const C0_MIDI: u8 = 12;

/// Highest generated octave (inclusive)
pub const MAX_OCTAVE: u8 = 8;

/// Number of entries in a generated table
pub const TABLE_LEN: usize = (MAX_OCTAVE as usize + 1) * NOTES_PER_OCTAVE as usize;

/// Pitch class (0-11) of a MIDI note number
pub fn pitch_class(note: u8) -> u8 {
    note % NOTES_PER_OCTAVE
}

/// Octave of a MIDI note number, or None below octave 0
pub fn octave(note: u8) -> Option<u8> {
    note.checked_sub(C0_MIDI).map(|n| n / NOTES_PER_OCTAVE)
}

/// Remove a trailing octave number from a note name
pub fn strip_octave(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Bidirectional note name table
#[derive(Debug, Clone)]
pub struct NoteTable {
    /// Names for MIDI numbers C0_MIDI.., in ascending order
    names: Vec<String>,
    /// Name to MIDI number, or to pitch class when octaves are omitted
    numbers: HashMap<String, u8>,
    include_octave: bool,
}

impl NoteTable {
    /// Build tables for octaves 0 through 8 from 12 pitch class labels
    ///
    /// `labels[0]` names the pitch class of MIDI 12. With `include_octave`
    /// each name carries its octave number and maps back to its MIDI number;
    /// without it, names repeat every octave and map back to the pitch class.
    pub fn build<S: AsRef<str>>(labels: &[S], include_octave: bool) -> Result<Self> {
        if labels.len() != NOTES_PER_OCTAVE as usize {
            return Err(Error::InvalidConfiguration(format!(
                "expected {} pitch class names, got {}",
                NOTES_PER_OCTAVE,
                labels.len()
            )));
        }

        for (i, label) in labels.iter().enumerate() {
            let label = label.as_ref();
            if label.is_empty() {
                return Err(Error::InvalidConfiguration(format!(
                    "pitch class {} has an empty name",
                    i
                )));
            }
            if labels[..i].iter().any(|other| other.as_ref() == label) {
                return Err(Error::InvalidConfiguration(format!(
                    "pitch class name '{}' is used twice",
                    label
                )));
            }
        }

        let mut names = Vec::with_capacity(TABLE_LEN);
        let mut numbers = HashMap::with_capacity(TABLE_LEN);

        for oct in 0..=MAX_OCTAVE {
            for pc in 0..NOTES_PER_OCTAVE {
                let midi = C0_MIDI + oct * NOTES_PER_OCTAVE + pc;
                let label = labels[pc as usize].as_ref();
                let name = if include_octave {
                    format!("{}{}", label, oct)
                } else {
                    label.to_string()
                };
                let value = if include_octave { midi } else { pitch_class(midi) };
                numbers.insert(name.clone(), value);
                names.push(name);
            }
        }

        log::debug!(
            "built note table: {} names, {} reverse keys, octaves {}",
            names.len(),
            numbers.len(),
            if include_octave { "on" } else { "off" }
        );

        Ok(Self {
            names,
            numbers,
            include_octave,
        })
    }

    /// Build tables for a naming scheme
    pub fn for_scheme(scheme: &NamingScheme, include_octave: bool) -> Result<Self> {
        Self::build(&scheme.labels(), include_octave)
    }

    /// Name of a MIDI note number
    pub fn name(&self, note: u8) -> Option<&str> {
        let index = note.checked_sub(C0_MIDI)? as usize;
        self.names.get(index).map(String::as_str)
    }

    /// Reverse lookup: MIDI number, or pitch class when octaves are omitted
    pub fn number(&self, name: &str) -> Option<u8> {
        self.numbers.get(name).copied()
    }

    /// Reverse lookup reduced to a pitch class regardless of octave policy
    pub fn pitch_class(&self, name: &str) -> Option<u8> {
        self.number(name).map(pitch_class)
    }

    /// Resolve a lookup key: a number gives its note name, a name its number
    pub fn lookup(&self, key: &str) -> Result<String> {
        if let Ok(number) = key.parse::<i64>() {
            return u8::try_from(number)
                .ok()
                .and_then(|note| self.name(note))
                .map(str::to_string)
                .ok_or(Error::NoteOutOfRange(number));
        }
        self.number(key)
            .map(|value| value.to_string())
            .ok_or_else(|| Error::UnknownNote(key.to_string()))
    }

    pub fn include_octave(&self) -> bool {
        self.include_octave
    }

    /// Number of MIDI numbers covered
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Lowest and highest MIDI numbers covered
    pub fn range(&self) -> (u8, u8) {
        (C0_MIDI, C0_MIDI + (self.names.len() as u8).saturating_sub(1))
    }

    /// All (MIDI number, name) pairs in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (C0_MIDI + i as u8, name.as_str()))
    }
}
