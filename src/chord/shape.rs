//! Pitch class sets

use crate::notes::NOTES_PER_OCTAVE;
use std::fmt;

const MASK: u16 = (1 << NOTES_PER_OCTAVE) - 1;

/// Set of pitch classes, bit `pc` set when pitch class `pc` is present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChordShape(u16);

impl ChordShape {
    pub const EMPTY: ChordShape = ChordShape(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Shape from raw bits; bits above the twelfth are dropped
    pub fn from_bits(bits: u16) -> Self {
        Self(bits & MASK)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Add a pitch class (taken modulo 12)
    pub fn insert(&mut self, pitch_class: u8) {
        self.0 |= 1 << (pitch_class % NOTES_PER_OCTAVE);
    }

    /// Remove a pitch class (taken modulo 12)
    pub fn remove(&mut self, pitch_class: u8) {
        self.0 &= !(1 << (pitch_class % NOTES_PER_OCTAVE));
    }

    pub fn contains(self, pitch_class: u8) -> bool {
        pitch_class < NOTES_PER_OCTAVE && self.0 & (1 << pitch_class) != 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of pitch classes present
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Present pitch classes in ascending order
    pub fn pitch_classes(self) -> impl Iterator<Item = u8> {
        (0..NOTES_PER_OCTAVE).filter(move |&pc| self.contains(pc))
    }
}

impl FromIterator<u8> for ChordShape {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut shape = ChordShape::new();
        for pc in iter {
            shape.insert(pc);
        }
        shape
    }
}

impl fmt::Display for ChordShape {
    /// Twelve characters, pitch class 0 first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pc in 0..NOTES_PER_OCTAVE {
            f.write_str(if self.contains(pc) { "x" } else { "." })?;
        }
        Ok(())
    }
}
