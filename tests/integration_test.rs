//! Integration tests for note naming and chord recognition
//!
//! These tests build tables and dictionaries from configuration, replay event
//! streams through sessions, and check the reported names.

use chordwatch::capture::{read_capture, CaptureReader};
use chordwatch::notes::{strip_octave, NamingScheme, Preset, C0_MIDI, MAX_OCTAVE};
use chordwatch::{
    ChordRecognizer, Config, Error, MidiMessage, NoteNameReporter, NoteTable, Session,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::tempdir;

fn on(note: u16) -> MidiMessage {
    MidiMessage::NoteOn { note, velocity: 90 }
}

fn off(note: u16) -> MidiMessage {
    MidiMessage::NoteOff { note, velocity: 0 }
}

/// Replay messages through a chord session and return what it printed
fn chords_for(config: &Config, messages: &[MidiMessage]) -> Vec<String> {
    let dictionary = config.chord_dictionary().expect("dictionary");
    let mut session = Session::new(ChordRecognizer::new(&dictionary), Vec::new());
    session.feed(messages).expect("feed");
    session.into_output()
}

// =============================================================================
// Note tables
// =============================================================================

#[test]
fn test_english_octave_example() {
    let table = NoteTable::for_scheme(&NamingScheme::Preset(Preset::English), true).unwrap();
    assert_eq!(table.name(64), Some("E4"));
    assert_eq!(table.number("C0"), Some(12));
}

#[test]
fn test_solfege_collapsed_example() {
    let table = NoteTable::for_scheme(&NamingScheme::Preset(Preset::Solfege), false).unwrap();
    assert_eq!(table.name(61), Some("Réb"));
    assert_eq!(table.name(73), Some("Réb"));
    assert_eq!(table.number("Fa#"), Some(6));
}

#[test]
fn test_reconstruct_pitch_class_for_custom_scheme() {
    let labels = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];
    let table = NoteTable::build(&labels, true).unwrap();
    for octave in 0..=MAX_OCTAVE {
        for (pc, label) in labels.iter().enumerate() {
            let midi = C0_MIDI + octave * 12 + pc as u8;
            let name = table.name(midi).unwrap();
            assert_eq!(strip_octave(name), *label);
            assert_eq!(table.number(name), Some(midi));
        }
    }
}

// =============================================================================
// Chord recognition
// =============================================================================

#[test]
fn test_do_majeur_any_order_any_octave() {
    let config = Config::default();
    let orders: [[u16; 3]; 4] = [[60, 64, 67], [67, 64, 60], [43, 88, 72], [76, 55, 36]];
    for notes in orders {
        let messages: Vec<_> = notes.iter().map(|&n| on(n)).collect();
        assert_eq!(chords_for(&config, &messages), vec!["Do majeur"]);
    }
}

#[test]
fn test_release_and_repress_mi() {
    let config = Config::default();
    let printed = chords_for(
        &config,
        &[on(60), on(64), on(67), off(64), on(64)],
    );
    assert_eq!(printed, vec!["Do majeur", "Do majeur"]);
}

#[test]
fn test_do_alone_is_silent() {
    assert!(chords_for(&Config::default(), &[on(60)]).is_empty());
}

#[test]
fn test_moving_between_chords() {
    // Do majeur, then let go of Mi and Sol and add Fa and La
    let printed = chords_for(
        &Config::default(),
        &[
            on(60),
            on(64),
            on(67),
            off(64),
            off(67),
            on(65),
            on(69),
            off(60),
            off(65),
            off(69),
            on(67),
            on(71),
            on(74),
        ],
    );
    assert_eq!(printed, vec!["Do majeur", "Fa majeur", "Sol majeur"]);
}

#[test]
fn test_independent_sessions() {
    let config = Config::default();
    let dictionary = config.chord_dictionary().unwrap();
    let mut first = Session::new(ChordRecognizer::new(&dictionary), Vec::new());
    let mut second = Session::new(ChordRecognizer::new(&dictionary), Vec::new());

    first.feed(&[on(60), on(64)]).unwrap();
    second.feed(&[on(65), on(69)]).unwrap();
    first.dispatch(&on(67)).unwrap();
    second.dispatch(&on(72)).unwrap();

    assert_eq!(first.output(), &vec!["Do majeur".to_string()]);
    assert_eq!(second.output(), &vec!["Fa majeur".to_string()]);
    assert_eq!(first.handler().held().len(), 3);
    assert_eq!(second.handler().held().len(), 3);
    assert_ne!(first.handler().held(), second.handler().held());
}

#[test]
fn test_malformed_note_is_skipped() {
    let config = Config::default();
    let dictionary = config.chord_dictionary().unwrap();
    let mut session = Session::new(ChordRecognizer::new(&dictionary), Vec::new());

    session.feed(&[on(60), on(64)]).unwrap();
    let before = session.handler().held();
    session.dispatch(&on(200)).unwrap();
    assert_eq!(session.handler().held(), before);
    assert_eq!(session.stats().skipped, 1);

    session.dispatch(&on(67)).unwrap();
    assert_eq!(session.output(), &vec!["Do majeur".to_string()]);
}

#[test]
fn test_ambiguous_configuration_fails() {
    let config = Config::from_json(
        r#"{"chords": [
            {"name": "Do majeur", "notes": ["Do", "Mi", "Sol"]},
            {"name": "Do 6/4", "notes": ["Sol", "Do", "Mi"]}
        ]}"#,
    )
    .unwrap();
    assert!(matches!(
        config.chord_dictionary(),
        Err(Error::AmbiguousChordShape { .. })
    ));
}

// =============================================================================
// Note names
// =============================================================================

#[test]
fn test_note_session_reports_and_skips() {
    let table = NoteTable::for_scheme(&NamingScheme::Preset(Preset::English), true).unwrap();
    let mut session = Session::new(NoteNameReporter::new(&table), Vec::new());
    session
        .feed(&[
            on(64),
            MidiMessage::NoteOn { note: 64, velocity: 0 },
            on(5),
            off(64),
            on(12),
        ])
        .unwrap();
    assert_eq!(session.output(), &vec!["E4".to_string(), "C0".to_string()]);
    assert_eq!(session.stats().skipped, 1);
    assert_eq!(session.stats().events, 5);
}

#[test]
fn test_teardown_mid_stream() {
    let table = NoteTable::for_scheme(&NamingScheme::Preset(Preset::Solfege), true).unwrap();
    let mut session = Session::new(NoteNameReporter::new(&table), Vec::new());
    session.dispatch(&on(60)).unwrap();
    session.close();
    session.feed(&[on(62), on(64)]).unwrap();
    assert_eq!(session.output(), &vec!["Do4".to_string()]);
    assert_eq!(session.stats().events, 1);
}

// =============================================================================
// Files
// =============================================================================

const TRIAD: &str = r#"{"type":"note_on","note":48,"velocity":80}
{"type":"note_on","note":52,"velocity":80}
{"type":"note_on","note":200,"velocity":80}
{"type":"note_on","note":55,"velocity":80}
{"type":"note_off","note":52}
{"type":"note_on","note":52,"velocity":0}
"#;

#[test]
fn test_config_and_capture_files() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(
        &config_path,
        r#"{"naming": "english", "include_octave": false,
            "chords": [{"name": "C major", "notes": ["C", "E", "G"]}]}"#,
    )
    .unwrap();
    let capture_path = dir.path().join("triad.jsonl");
    std::fs::write(&capture_path, TRIAD).unwrap();

    let config = Config::load(&config_path).unwrap();
    let dictionary = config.chord_dictionary().unwrap();
    let mut session = Session::new(ChordRecognizer::new(&dictionary), Vec::new());
    session.run(CaptureReader::open(&capture_path).unwrap()).unwrap();
    assert_eq!(session.output(), &vec!["C major".to_string()]);
    assert_eq!(session.stats().skipped, 1);
    assert!(session.handler().held().contains(0));
    assert!(!session.handler().held().contains(4));

    let table = config.note_table().unwrap();
    let mut session = Session::new(NoteNameReporter::new(&table), Vec::new());
    session.run(CaptureReader::open(&capture_path).unwrap()).unwrap();
    assert_eq!(session.into_output(), vec!["C", "E", "G"]);
}

#[test]
fn test_wide_note_in_capture_does_not_end_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.jsonl");
    std::fs::write(
        &path,
        concat!(
            "{\"type\":\"note_on\",\"note\":60,\"velocity\":80}\n",
            "{\"type\":\"note_on\",\"note\":300,\"velocity\":80}\n",
            "{\"type\":\"note_on\",\"note\":64,\"velocity\":80}\n",
            "not an event\n",
            "{\"type\":\"note_on\",\"note\":67,\"velocity\":80}\n",
        ),
    )
    .unwrap();

    let dictionary = Config::default().chord_dictionary().unwrap();
    let mut session = Session::new(ChordRecognizer::new(&dictionary), Vec::new());
    session.run(CaptureReader::open(&path).unwrap()).unwrap();
    assert_eq!(session.output(), &vec!["Do majeur".to_string()]);
    assert_eq!(session.stats().events, 4);
    assert_eq!(session.stats().skipped, 2);
}

#[test]
fn test_gzip_capture_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("triad.jsonl.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(TRIAD.as_bytes()).unwrap();
    std::fs::write(&path, encoder.finish().unwrap()).unwrap();

    let messages = read_capture(&path).unwrap();
    assert_eq!(messages.len(), 6);
    assert_eq!(messages[2], MidiMessage::NoteOn { note: 200, velocity: 80 });
}

#[test]
fn test_missing_config_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        Config::load(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));
}
