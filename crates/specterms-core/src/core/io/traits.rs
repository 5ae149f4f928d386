use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing analysis results in a tabular file format.
///
/// Implementors handle format-specific serialization of one kind of result; the
/// path-based helper is provided on top of the writer-based method.
pub trait TableFile {
    /// The data written by this format.
    type Data: ?Sized;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Writes `data` to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes `data` to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(data: &Self::Data, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(data, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
