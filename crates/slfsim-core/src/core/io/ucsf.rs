use crate::core::io::traits::SpectrumFile;
use crate::core::models::axis::SpectrumAxis;
use crate::core::models::grid::SpectrumGrid;
use crate::core::models::spectrum::Spectrum;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};
use thiserror::Error;

pub const UCSF_IDENT: &str = "UCSF NMR";
const UCSF_VERSION: u8 = 2;
const FILE_HEADER_LEN: usize = 180;
const AXIS_HEADER_LEN: usize = 128;
const MAX_TILE_BYTES: usize = 128 * 1024;
const DEFAULT_OWNER: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct UcsfMetadata {
    pub owner: String,
    pub date: String,
    pub comment: String,
}

impl UcsfMetadata {
    /// Metadata stamped with the current local time, in `ctime` layout.
    pub fn now(owner: &str, comment: &str) -> Self {
        Self {
            owner: owner.to_string(),
            date: chrono::Local::now()
                .format("%a %b %e %H:%M:%S %Y")
                .to_string(),
            comment: comment.to_string(),
        }
    }
}

impl Default for UcsfMetadata {
    fn default() -> Self {
        Self::now(DEFAULT_OWNER, "")
    }
}

#[derive(Debug, Error)]
pub enum UcsfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Not a UCSF file (identifier {0:?})")]
    BadIdentifier(String),
    #[error("Unsupported UCSF layout: {0}")]
    Unsupported(String),
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

/// Tile shape used for a spectrum of the given (rows, cols) shape.
///
/// Dimensions are halved in turn, rows first, until one tile holds at most
/// 128 KiB of single-precision data.
pub fn tile_shape(shape: (usize, usize)) -> (usize, usize) {
    let mut dims = [shape.0.max(1), shape.1.max(1)];
    let mut axis = 0;
    while dims[0] * dims[1] * 4 > MAX_TILE_BYTES {
        dims[axis] = (dims[axis] / 2).max(1);
        axis = (axis + 1) % 2;
    }
    (dims[0], dims[1])
}

fn write_fixed(writer: &mut impl Write, text: &str, len: usize) -> io::Result<()> {
    let bytes = text.as_bytes();
    let n = bytes.len().min(len);
    writer.write_all(&bytes[..n])?;
    writer.write_all(&vec![0u8; len - n])
}

fn read_fixed(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim_end().to_string()
}

fn to_u32(value: usize, what: &str) -> Result<u32, UcsfError> {
    u32::try_from(value)
        .map_err(|_| UcsfError::Unsupported(format!("{} of {} does not fit the header", what, value)))
}

fn write_axis_header(
    writer: &mut impl Write,
    axis: &SpectrumAxis,
    tile_len: usize,
) -> Result<(), UcsfError> {
    let size = to_u32(axis.size, "axis size")?;
    write_fixed(writer, &axis.label, 6)?;
    writer.write_i16::<BigEndian>(0)?; // spectral shift
    writer.write_u32::<BigEndian>(size)?; // npoints
    writer.write_u32::<BigEndian>(size)?; // size
    writer.write_u32::<BigEndian>(to_u32(tile_len, "tile length")?)?;
    writer.write_f32::<BigEndian>(axis.observe_frequency_mhz as f32)?;
    writer.write_f32::<BigEndian>(axis.spectral_width_hz as f32)?;
    writer.write_f32::<BigEndian>(axis.carrier_ppm() as f32)?;
    writer.write_f32::<BigEndian>(0.0)?; // zero-order phase
    writer.write_f32::<BigEndian>(0.0)?; // first-order phase
    writer.write_f32::<BigEndian>(0.0)?; // first point scale
    writer.write_all(&[0u8; 84])?;
    Ok(())
}

fn read_axis_header(reader: &mut impl Read) -> Result<(SpectrumAxis, usize), UcsfError> {
    let mut buf = [0u8; AXIS_HEADER_LEN];
    reader.read_exact(&mut buf)?;

    let label = read_fixed(&buf[0..6]);
    let mut fields: &[u8] = &buf[6..];
    let _spectral_shift = fields.read_i16::<BigEndian>()?;
    let npoints = fields.read_u32::<BigEndian>()? as usize;
    let _size = fields.read_u32::<BigEndian>()?;
    let tile_len = fields.read_u32::<BigEndian>()? as usize;
    let observe_frequency = fields.read_f32::<BigEndian>()? as f64;
    let spectral_width = fields.read_f32::<BigEndian>()? as f64;
    let carrier_ppm = fields.read_f32::<BigEndian>()? as f64;

    if npoints == 0 || tile_len == 0 || tile_len > npoints {
        return Err(UcsfError::Inconsistency(format!(
            "axis '{}' declares {} points in tiles of {}",
            label, npoints, tile_len
        )));
    }

    let axis = SpectrumAxis::new(
        &label,
        npoints,
        spectral_width,
        observe_frequency,
        carrier_ppm * observe_frequency,
    );
    Ok((axis, tile_len))
}

pub struct UcsfFile;

impl SpectrumFile for UcsfFile {
    type Metadata = UcsfMetadata;
    type Error = UcsfError;

    fn read_from(reader: &mut impl Read) -> Result<(Spectrum, Self::Metadata), Self::Error> {
        let mut header = [0u8; FILE_HEADER_LEN];
        reader.read_exact(&mut header)?;

        let ident = read_fixed(&header[0..10]);
        if ident != UCSF_IDENT {
            return Err(UcsfError::BadIdentifier(ident));
        }
        let (naxis, ncomponents, version) = (header[10], header[11], header[13]);
        if naxis != 2 {
            return Err(UcsfError::Unsupported(format!("{} axes (only 2D is supported)", naxis)));
        }
        if ncomponents != 1 {
            return Err(UcsfError::Unsupported(format!(
                "{} components (only real data is supported)",
                ncomponents
            )));
        }
        if version != UCSF_VERSION {
            return Err(UcsfError::Unsupported(format!("format version {}", version)));
        }
        let metadata = UcsfMetadata {
            owner: read_fixed(&header[14..23]),
            date: read_fixed(&header[23..49]),
            comment: read_fixed(&header[49..129]),
        };

        let (row_axis, tile_rows) = read_axis_header(reader)?;
        let (col_axis, tile_cols) = read_axis_header(reader)?;
        let (rows, cols) = (row_axis.size, col_axis.size);

        let mut grid = SpectrumGrid::zeros(rows, cols)
            .map_err(|e| UcsfError::Inconsistency(e.to_string()))?;
        let mut tile = vec![0f32; tile_rows * tile_cols];
        for tile_row in 0..rows.div_ceil(tile_rows) {
            for tile_col in 0..cols.div_ceil(tile_cols) {
                reader.read_f32_into::<BigEndian>(&mut tile)?;
                for (r, chunk) in tile.chunks(tile_cols).enumerate() {
                    let row = tile_row * tile_rows + r;
                    for (c, &value) in chunk.iter().enumerate() {
                        grid.add(row, tile_col * tile_cols + c, value);
                    }
                }
            }
        }

        let spectrum = Spectrum::new(row_axis, col_axis, grid)
            .map_err(|e| UcsfError::Inconsistency(e.to_string()))?;
        Ok((spectrum, metadata))
    }

    fn write_to(
        spectrum: &Spectrum,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let grid = spectrum.grid();
        let (rows, cols) = grid.shape();
        let (tile_rows, tile_cols) = tile_shape((rows, cols));
        let (n_tile_rows, n_tile_cols) = (rows.div_ceil(tile_rows), cols.div_ceil(tile_cols));

        let file_len = n_tile_rows * n_tile_cols * tile_rows * tile_cols * 4
            + FILE_HEADER_LEN
            + 2 * AXIS_HEADER_LEN;
        let seek_pos = i32::try_from(file_len).map_err(|_| {
            UcsfError::Unsupported(format!("file of {} bytes exceeds the header limit", file_len))
        })?;

        write_fixed(writer, UCSF_IDENT, 10)?;
        writer.write_u8(2)?; // naxis
        writer.write_u8(1)?; // ncomponents
        writer.write_u8(0)?; // encoding
        writer.write_u8(UCSF_VERSION)?;
        write_fixed(writer, &metadata.owner, 9)?;
        write_fixed(writer, &metadata.date, 26)?;
        write_fixed(writer, &metadata.comment, 80)?;
        writer.write_all(&[0u8; 3])?;
        writer.write_i32::<BigEndian>(seek_pos)?;
        writer.write_all(&[0u8; 40])?; // scratch
        writer.write_all(&[0u8; 4])?;

        write_axis_header(writer, spectrum.row_axis(), tile_rows)?;
        write_axis_header(writer, spectrum.col_axis(), tile_cols)?;

        for tile_row in 0..n_tile_rows {
            for tile_col in 0..n_tile_cols {
                for r in 0..tile_rows {
                    let row = tile_row * tile_rows + r;
                    for c in 0..tile_cols {
                        let value = grid.get(row, tile_col * tile_cols + c).unwrap_or(0.0);
                        writer.write_f32::<BigEndian>(value)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_spectrum_to(spectrum: &Spectrum, writer: &mut impl Write) -> Result<(), Self::Error> {
        Self::write_to(spectrum, &UcsfMetadata::default(), writer)
    }
}
