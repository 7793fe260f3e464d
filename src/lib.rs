pub mod capture;
pub mod chord;
pub mod config;
pub mod error;
pub mod midi;
pub mod notes;
pub mod reporter;
pub mod session;

pub use chord::{ChordDictionary, ChordRecognizer, ChordShape};
pub use config::Config;
pub use error::{Error, Result};
pub use midi::MidiMessage;
pub use notes::NoteTable;
pub use reporter::NoteNameReporter;
pub use session::{EventHandler, Output, Session};
