//! Chord shape dictionary

use super::shape::ChordShape;
use crate::error::{Error, Result};
use crate::notes::NoteTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named chord and the note names it is made of
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordDefinition {
    pub name: String,
    pub notes: Vec<String>,
}

impl ChordDefinition {
    pub fn new<S: Into<String>>(name: S, notes: &[&str]) -> Self {
        Self {
            name: name.into(),
            notes: notes.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Immutable map from chord shape to chord name
#[derive(Debug, Clone, Default)]
pub struct ChordDictionary {
    chords: HashMap<ChordShape, String>,
}

impl ChordDictionary {
    /// Compile chord definitions against a note table
    ///
    /// Note names are resolved to pitch classes, so the octave suffix (if the
    /// table uses one) does not matter for the resulting shape.
    pub fn build(definitions: &[ChordDefinition], table: &NoteTable) -> Result<Self> {
        let mut chords: HashMap<ChordShape, String> = HashMap::with_capacity(definitions.len());

        for def in definitions {
            if def.notes.is_empty() {
                return Err(Error::InvalidConfiguration(format!(
                    "chord '{}' has no notes",
                    def.name
                )));
            }

            let mut shape = ChordShape::new();
            for note in &def.notes {
                let pc = table.pitch_class(note).ok_or_else(|| Error::UnknownNoteName {
                    chord: def.name.clone(),
                    note: note.clone(),
                })?;
                shape.insert(pc);
            }

            if let Some(existing) = chords.get(&shape) {
                return Err(Error::AmbiguousChordShape {
                    first: existing.clone(),
                    second: def.name.clone(),
                });
            }

            log::debug!("chord '{}' -> {}", def.name, shape);
            chords.insert(shape, def.name.clone());
        }

        Ok(Self { chords })
    }

    /// Chord name for an exact pitch class set
    pub fn get(&self, shape: ChordShape) -> Option<&str> {
        self.chords.get(&shape).map(String::as_str)
    }

    /// Shape registered for a chord name
    pub fn shape_of(&self, name: &str) -> Option<ChordShape> {
        self.chords
            .iter()
            .find(|(_, chord)| chord.as_str() == name)
            .map(|(shape, _)| *shape)
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChordShape, &str)> {
        self.chords.iter().map(|(shape, name)| (*shape, name.as_str()))
    }
}
