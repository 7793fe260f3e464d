//! Recorded event streams
//!
//! A capture holds one JSON message per line, e.g.
//! `{"type":"note_on","note":60,"velocity":100}`. Blank lines and lines
//! starting with `#` are skipped. Captures may be gzip-compressed.

use crate::error::{Error, Result};
use crate::midi::MidiMessage;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Iterator over the messages of a capture
pub struct CaptureReader<R: BufRead> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> CaptureReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl CaptureReader<Box<dyn BufRead>> {
    /// Open a capture file, decompressing if necessary
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let is_gzip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("gz"))
            .unwrap_or(false);

        if is_gzip {
            log::debug!("reading gzip capture {}", path.display());
            Ok(Self::new(Box::new(BufReader::new(GzDecoder::new(file)))))
        } else {
            Self::from_reader(file)
        }
    }

    /// Wrap any reader, checking for the gzip magic number
    pub fn from_reader<T: Read + 'static>(reader: T) -> Result<Self> {
        let mut reader = BufReader::new(reader);
        if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
            log::debug!("capture input is gzip-compressed");
            Ok(Self::new(Box::new(BufReader::new(GzDecoder::new(reader)))))
        } else {
            Ok(Self::new(Box::new(reader)))
        }
    }

    /// Read from standard input
    pub fn stdin() -> Result<Self> {
        Self::from_reader(io::stdin())
    }
}

impl<R: BufRead> Iterator for CaptureReader<R> {
    type Item = Result<MidiMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line += 1;

            let text = text.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let line = self.line;
            return Some(serde_json::from_str(text).map_err(|e| Error::Capture {
                line,
                message: e.to_string(),
            }));
        }
    }
}

/// Read a whole capture file into memory
pub fn read_capture<P: AsRef<Path>>(path: P) -> Result<Vec<MidiMessage>> {
    CaptureReader::open(path)?.collect()
}
