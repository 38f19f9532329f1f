use super::atomic::write_atomically;
use crate::core::models::spectrum::Spectrum;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// Defines the interface for reading and writing spectrum container formats.
///
/// Implementors handle the format-specific layout; the provided path helpers
/// take care of buffering and of replacing output files atomically.
pub trait SpectrumFile {
    /// Format-specific header data that is not part of the spectrum itself.
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a spectrum and its metadata from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is malformed or reading fails.
    fn read_from(reader: &mut impl Read) -> Result<(Spectrum, Self::Metadata), Self::Error>;

    /// Writes a spectrum with the given metadata to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the spectrum cannot be represented in the format or
    /// writing fails.
    fn write_to(
        spectrum: &Spectrum,
        metadata: &Self::Metadata,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a spectrum with freshly generated default metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_spectrum_to(spectrum: &Spectrum, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads a spectrum from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<(Spectrum, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a spectrum and metadata to a file path, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        spectrum: &Spectrum,
        metadata: &Self::Metadata,
        path: P,
    ) -> Result<(), Self::Error> {
        write_atomically(path, |writer| Self::write_to(spectrum, metadata, writer))
    }

    /// Writes a spectrum with default metadata to a file path, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_spectrum_to_path<P: AsRef<Path>>(spectrum: &Spectrum, path: P) -> Result<(), Self::Error> {
        write_atomically(path, |writer| Self::write_spectrum_to(spectrum, writer))
    }
}
