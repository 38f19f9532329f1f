use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes `path` by streaming into a temporary file in the same directory and
/// renaming it into place once `write` succeeds.
///
/// If `write` fails the temporary file is removed and any existing file at
/// `path` is left untouched.
///
/// # Errors
///
/// Returns the error produced by `write`, or an I/O error if the temporary
/// file cannot be created, flushed or renamed.
pub fn write_atomically<P, F, E>(path: P, write: F) -> Result<(), E>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<(), E>,
    E: From<io::Error>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn successful_write_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        write_atomically(&path, |w| -> io::Result<()> { w.write_all(b"hello") }).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn failed_write_leaves_existing_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "original").unwrap();

        let result = write_atomically(&path, |w| -> io::Result<()> {
            w.write_all(b"partial")?;
            Err(io::Error::other("boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn failed_write_leaves_no_stray_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let _ = write_atomically(&path, |_| -> io::Result<()> { Err(io::Error::other("boom")) });

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_directory_is_reported_as_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");

        let result = write_atomically(&path, |w| -> io::Result<()> { w.write_all(b"x") });

        assert!(result.is_err());
    }
}
