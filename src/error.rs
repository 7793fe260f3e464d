use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("MIDI note {0} is outside the note table")]
    NoteOutOfRange(i64),

    #[error("Unknown note name '{0}'")]
    UnknownNote(String),

    #[error("Chord '{chord}' references unknown note '{note}'")]
    UnknownNoteName { chord: String, note: String },

    #[error("Chords '{first}' and '{second}' have the same shape")]
    AmbiguousChordShape { first: String, second: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Capture error at line {line}: {message}")]
    Capture { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
