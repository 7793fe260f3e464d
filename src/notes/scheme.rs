//! Pitch class naming schemes

use serde::{Deserialize, Serialize};

/// English letter names, flats for the black keys except F#
pub const ENGLISH: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// French solfège names
pub const SOLFEGE: [&str; 12] = [
    "Do", "Réb", "Ré", "Mib", "Mi", "Fa", "Fa#", "Sol", "Lab", "La", "Sib", "Si",
];

/// Built-in naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    English,
    Solfege,
}

impl Preset {
    pub fn labels(self) -> &'static [&'static str; 12] {
        match self {
            Preset::English => &ENGLISH,
            Preset::Solfege => &SOLFEGE,
        }
    }
}

/// A preset or a caller-supplied list of 12 pitch class names
///
/// In JSON this is either a preset name (`"solfege"`) or an array of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamingScheme {
    Preset(Preset),
    Custom(Vec<String>),
}

impl NamingScheme {
    /// Pitch class names in ascending semitone order
    pub fn labels(&self) -> Vec<String> {
        match self {
            NamingScheme::Preset(preset) => {
                preset.labels().iter().map(|s| s.to_string()).collect()
            }
            NamingScheme::Custom(labels) => labels.clone(),
        }
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        NamingScheme::Preset(Preset::Solfege)
    }
}

impl From<Preset> for NamingScheme {
    fn from(preset: Preset) -> Self {
        NamingScheme::Preset(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preset() {
        let scheme: NamingScheme = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(scheme, NamingScheme::Preset(Preset::English));
        assert_eq!(scheme.labels()[6], "F#");
    }

    #[test]
    fn test_deserialize_custom() {
        let scheme: NamingScheme =
            serde_json::from_str(r#"["C","C#","D","D#","E","F","F#","G","G#","A","A#","B"]"#)
                .unwrap();
        assert_eq!(scheme.labels()[1], "C#");
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        assert!(serde_json::from_str::<NamingScheme>("\"german\"").is_err());
    }
}
