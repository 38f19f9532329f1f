use crate::core::models::residue::ResidueRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const FIELD_COUNT: usize = 4;

#[derive(Debug, Error)]
pub enum ResidueTableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: ResidueTableParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ResidueTableParseErrorKind {
    #[error("Expected 4 fields (name, id, shift, coupling), found {found} (line: '{text}')")]
    WrongFieldCount { found: usize, text: String },
    #[error("Invalid integer format in field {field} (value: '{value}')")]
    InvalidInt { field: &'static str, value: String },
    #[error("Invalid float format in field {field} (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Non-finite value in field {field} (value: '{value}')")]
    NonFinite { field: &'static str, value: String },
}

fn parse_float(value: &str, field: &'static str, line: usize) -> Result<f64, ResidueTableError> {
    let parsed: f64 = value.parse().map_err(|_| ResidueTableError::Parse {
        line,
        kind: ResidueTableParseErrorKind::InvalidFloat {
            field,
            value: value.into(),
        },
    })?;
    if !parsed.is_finite() {
        return Err(ResidueTableError::Parse {
            line,
            kind: ResidueTableParseErrorKind::NonFinite {
                field,
                value: value.into(),
            },
        });
    }
    Ok(parsed)
}

/// Reader for headerless `name id shift coupling` residue tables.
pub struct ResidueTableFile;

impl ResidueTableFile {
    pub fn read_from(reader: &mut impl BufRead) -> Result<Vec<ResidueRecord>, ResidueTableError> {
        let mut records = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() != FIELD_COUNT {
                return Err(ResidueTableError::Parse {
                    line: line_num,
                    kind: ResidueTableParseErrorKind::WrongFieldCount {
                        found: fields.len(),
                        text: trimmed.into(),
                    },
                });
            }

            let id: i64 = fields[1].parse().map_err(|_| ResidueTableError::Parse {
                line: line_num,
                kind: ResidueTableParseErrorKind::InvalidInt {
                    field: "id",
                    value: fields[1].into(),
                },
            })?;
            let shift = parse_float(fields[2], "shift", line_num)?;
            let coupling = parse_float(fields[3], "coupling", line_num)?;

            records.push(ResidueRecord::new(fields[0], id, shift, coupling).with_line(line_num));
        }

        Ok(records)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ResidueRecord>, ResidueTableError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}
