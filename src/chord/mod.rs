//! Chord recognition from held pitch classes

pub mod dictionary;
pub mod recognizer;
pub mod shape;

pub use dictionary::{ChordDefinition, ChordDictionary};
pub use recognizer::ChordRecognizer;
pub use shape::ChordShape;
