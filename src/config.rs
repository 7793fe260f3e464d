//! Configuration file loading
//!
//! ```json
//! {
//!   "naming": "solfege",
//!   "include_octave": true,
//!   "chords": [{ "name": "Do majeur", "notes": ["Do", "Mi", "Sol"] }]
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use crate::chord::{ChordDefinition, ChordDictionary};
use crate::error::{Error, Result};
use crate::notes::{NamingScheme, NoteTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Pitch class names
    pub naming: NamingScheme,
    /// Append octave numbers to reported note names
    pub include_octave: bool,
    /// Chords to recognize
    pub chords: Vec<ChordDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            naming: NamingScheme::default(),
            include_octave: true,
            chords: default_chords(),
        }
    }
}

/// The three major triads of C major, named in solfège
pub fn default_chords() -> Vec<ChordDefinition> {
    vec![
        ChordDefinition::new("Do majeur", &["Do", "Mi", "Sol"]),
        ChordDefinition::new("Fa majeur", &["Fa", "La", "Do"]),
        ChordDefinition::new("Sol majeur", &["Sol", "Si", "Ré"]),
    ]
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty-printed JSON that `from_json` reads back
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Note table for naming single notes, with the configured octave policy
    pub fn note_table(&self) -> Result<NoteTable> {
        NoteTable::for_scheme(&self.naming, self.include_octave)
    }

    /// Chord dictionary; chord notes are always given without octave numbers
    pub fn chord_dictionary(&self) -> Result<ChordDictionary> {
        let table = NoteTable::for_scheme(&self.naming, false)?;
        ChordDictionary::build(&self.chords, &table)
    }
}
