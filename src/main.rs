use chordwatch::capture::CaptureReader;
use chordwatch::notes::{NamingScheme, Preset};
use chordwatch::session::{SessionStats, WriterOutput};
use chordwatch::{ChordRecognizer, Config, Error, NoteNameReporter, Session};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "chordwatch")]
#[command(version = "0.1.0")]
#[command(about = "Name notes and chords from a MIDI note stream", long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pitch class naming (overrides the configuration)
    #[arg(short, long, global = true)]
    naming: Option<NamingArg>,

    /// Leave octave numbers out of note names
    #[arg(long, global = true)]
    no_octave: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every MIDI number and its note name
    Tables,
    /// Print the effective configuration as JSON
    Config,
    /// Look up note names by MIDI number, or MIDI numbers by name
    Lookup {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Print the name of each note played in a capture
    Notes {
        /// JSON-lines capture, optionally gzipped (reads stdin if not specified)
        capture: Option<PathBuf>,
    },
    /// Print the name of each chord played in a capture
    Chords {
        /// JSON-lines capture, optionally gzipped (reads stdin if not specified)
        capture: Option<PathBuf>,
    },
    /// Print note names and chord names side by side
    Watch {
        /// JSON-lines capture, optionally gzipped (reads stdin if not specified)
        capture: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NamingArg {
    English,
    Solfege,
}

impl From<NamingArg> for NamingScheme {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::English => NamingScheme::Preset(Preset::English),
            NamingArg::Solfege => NamingScheme::Preset(Preset::Solfege),
        }
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(naming) = args.naming {
        config.naming = naming.into();
    }
    if args.no_octave {
        config.include_octave = false;
    }

    match &args.command {
        Command::Tables => {
            let table = config.note_table()?;
            for (midi, name) in table.iter() {
                println!("{}\t{}", midi, name);
            }
        }
        Command::Config => {
            println!("{}", config.to_json()?);
        }
        Command::Lookup { keys } => {
            let table = config.note_table()?;
            for key in keys {
                println!("{}", table.lookup(key)?);
            }
        }
        Command::Notes { capture } => {
            let table = config.note_table()?;
            let mut session = Session::new(
                NoteNameReporter::new(&table),
                WriterOutput::new(io::stdout()),
            );
            session.run(open_capture(capture.as_deref())?)?;
            session.close();
            report(&session.stats());
        }
        Command::Chords { capture } => {
            let dictionary = config.chord_dictionary()?;
            let mut session = Session::new(
                ChordRecognizer::new(&dictionary),
                WriterOutput::new(io::stdout()),
            );
            session.run(open_capture(capture.as_deref())?)?;
            session.close();
            report(&session.stats());
        }
        Command::Watch { capture } => {
            let table = config.note_table()?;
            let dictionary = config.chord_dictionary()?;
            let mut notes = Session::new(
                NoteNameReporter::new(&table),
                WriterOutput::new(io::stdout()),
            );
            let mut chords = Session::new(
                ChordRecognizer::new(&dictionary),
                WriterOutput::new(io::stdout()),
            );
            for event in open_capture(capture.as_deref())? {
                let message = event?;
                notes.dispatch(&message)?;
                chords.dispatch(&message)?;
            }
            notes.close();
            chords.close();
            report(&notes.stats());
            report(&chords.stats());
        }
    }

    Ok(())
}

fn open_capture(path: Option<&Path>) -> Result<CaptureReader<Box<dyn io::BufRead>>, Error> {
    match path {
        Some(path) => CaptureReader::open(path),
        None => CaptureReader::stdin(),
    }
}

fn report(stats: &SessionStats) {
    log::info!(
        "{} events, {} names, {} skipped",
        stats.events,
        stats.emitted,
        stats.skipped
    );
}
