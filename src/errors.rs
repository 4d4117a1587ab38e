use std::path::PathBuf;

/// Error type representing the failures that can occur while ranking songs.
///
/// This enum covers reading the input CSV files, rejecting malformed rows,
/// rejecting unknown sort keys and writing the output file.
#[derive(Debug)]
pub enum MusicError {
    /// Represents underlying I/O errors from the standard library.
    ///
    /// Used for failures that are not tied to a specific input file,
    /// such as writing the output CSV.
    IoError(std::io::Error),

    /// An input file could not be opened or read.
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data row could not be turned into a song.
    ///
    /// `line` is 1-based and counts the header row.
    ParseError {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// A sort key other than `popularity`, `energy` or `danceability`.
    SortKeyError(String),
}

impl From<std::io::Error> for MusicError {
    /// Converts a [`std::io::Error`] into a [`MusicError`].
    ///
    /// # Examples
    /// ```
    /// use std::fs::File;
    /// use music_manager::errors::MusicError;
    ///
    /// fn read_file() -> Result<(), MusicError> {
    ///     let _file = File::open("nonexistent.csv")?;
    ///     Ok(())
    /// }
    /// assert!(matches!(read_file(), Err(MusicError::IoError(_))));
    /// ```
    fn from(err: std::io::Error) -> Self {
        MusicError::IoError(err)
    }
}

impl std::fmt::Display for MusicError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use music_manager::errors::MusicError;
    /// let err = MusicError::SortKeyError("tempo".to_string());
    /// assert_eq!(
    ///     format!("{}", err),
    ///     "Sort key error: 'tempo' is not one of popularity, energy, danceability"
    /// );
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MusicError::IoError(e) => write!(f, "IO error: {}", e),
            MusicError::FileError { path, source } => {
                write!(f, "File error: {}: {}", path.display(), source)
            }
            MusicError::ParseError {
                source_name,
                line,
                reason,
            } => write!(f, "Parse error: {}:{}: {}", source_name, line, reason),
            MusicError::SortKeyError(key) => write!(
                f,
                "Sort key error: '{}' is not one of popularity, energy, danceability",
                key
            ),
        }
    }
}

impl std::error::Error for MusicError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only the I/O backed variants carry a source.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MusicError::IoError(e) => Some(e),
            MusicError::FileError { source, .. } => Some(source),
            _ => None,
        }
    }
}
