use crate::core::io::atomic::write_atomically;
use crate::core::models::peak::PeakRecord;
use crate::core::utils::format::{decimal_repr, right_justify};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

pub const PEAK_LIST_HEADER: &str = "      Assignment         w1         w2  ";
const COLUMN_COUNT: usize = 3;
const LABEL_WIDTH: usize = 17;
const VALUE_WIDTH: usize = 11;
const COLUMN_NAMES: [&str; COLUMN_COUNT] = ["Assignment", "w1", "w2"];

#[derive(Debug, Error)]
pub enum PeakListError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PeakListParseErrorKind,
    },
    #[error("Peak list has no header line")]
    MissingHeader,
}

#[derive(Debug, Error, PartialEq)]
pub enum PeakListParseErrorKind {
    #[error("Header must name {expected} columns, found {found} (line: '{text}')")]
    InvalidHeader {
        expected: usize,
        found: usize,
        text: String,
    },
    #[error("Expected {expected} fields, found {found} (line: '{text}')")]
    WrongFieldCount {
        expected: usize,
        found: usize,
        text: String,
    },
    #[error("Invalid float format in column {column} (value: '{value}')")]
    InvalidFloat { column: &'static str, value: String },
    #[error("Non-finite value in column {column} (value: '{value}')")]
    NonFinite { column: &'static str, value: String },
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse_ppm(value: &str, column: &'static str, line: usize) -> Result<f64, PeakListError> {
    let ppm: f64 = value.parse().map_err(|_| PeakListError::Parse {
        line,
        kind: PeakListParseErrorKind::InvalidFloat {
            column,
            value: value.into(),
        },
    })?;
    if !ppm.is_finite() {
        return Err(PeakListError::Parse {
            line,
            kind: PeakListParseErrorKind::NonFinite {
                column,
                value: value.into(),
            },
        });
    }
    Ok(ppm)
}

/// Formats one peak as a Sparky peak-list row, including the trailing newline.
pub fn format_row(peak: &PeakRecord) -> String {
    format!(
        "{}{}{} \n",
        right_justify(&peak.label, LABEL_WIDTH),
        value_field(peak.ppm_dim0),
        value_field(peak.ppm_dim1),
    )
}

// A value that fills its column is pushed one space right so fields stay separable.
fn value_field(value: f64) -> String {
    let text = decimal_repr(value);
    if text.len() >= VALUE_WIDTH {
        format!(" {}", text)
    } else {
        right_justify(&text, VALUE_WIDTH)
    }
}

/// Reader and writer for whitespace-aligned Sparky peak lists.
pub struct PeakListFile;

impl PeakListFile {
    /// Parses a peak list, skipping blank and `#` lines.
    ///
    /// The first remaining line is the column header; every later line must
    /// hold an assignment label followed by the `w1` and `w2` ppm values.
    ///
    /// # Errors
    ///
    /// Returns [`PeakListError::MissingHeader`] for an input without any
    /// content, and [`PeakListError::Parse`] with the 1-based line number for
    /// a malformed header or row.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<PeakRecord>, PeakListError> {
        let mut header_seen = false;
        let mut peaks = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            if is_skippable(&line) {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            if !header_seen {
                if fields.len() != COLUMN_COUNT {
                    return Err(PeakListError::Parse {
                        line: line_num,
                        kind: PeakListParseErrorKind::InvalidHeader {
                            expected: COLUMN_COUNT,
                            found: fields.len(),
                            text: line.trim().into(),
                        },
                    });
                }
                header_seen = true;
                continue;
            }

            if fields.len() != COLUMN_COUNT {
                return Err(PeakListError::Parse {
                    line: line_num,
                    kind: PeakListParseErrorKind::WrongFieldCount {
                        expected: COLUMN_COUNT,
                        found: fields.len(),
                        text: line.trim().into(),
                    },
                });
            }
            let w1 = parse_ppm(fields[1], COLUMN_NAMES[1], line_num)?;
            let w2 = parse_ppm(fields[2], COLUMN_NAMES[2], line_num)?;
            peaks.push(PeakRecord::new(fields[0], w1, w2));
        }

        if !header_seen {
            return Err(PeakListError::MissingHeader);
        }
        Ok(peaks)
    }

    /// Writes the header, a blank line, then one row per peak.
    pub fn write_to(peaks: &[PeakRecord], writer: &mut impl Write) -> Result<(), PeakListError> {
        write!(writer, "{}\n\n", PEAK_LIST_HEADER)?;
        for peak in peaks {
            writer.write_all(format_row(peak).as_bytes())?;
        }
        Ok(())
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PeakRecord>, PeakListError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    pub fn write_to_path<P: AsRef<Path>>(peaks: &[PeakRecord], path: P) -> Result<(), PeakListError> {
        write_atomically(path, |writer| Self::write_to(peaks, writer))
    }
}
