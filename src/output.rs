use crate::errors::MusicError;
use crate::song::SortKey;
use crate::song_list::SongList;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the header `artist,song,year,<key>` followed by at most `display`
/// songs from the front of `list`.
///
/// Text fields containing commas, quotes or line breaks are quoted.
/// Only the first `display` nodes are visited. Returns the number of rows
/// written, not counting the header.
///
/// # Examples
///
/// ```
/// # use music_manager::output::write_top;
/// # use music_manager::song::{Song, SortKey};
/// # use music_manager::song_list::SongList;
/// let mut list = SongList::new();
/// list.insert_in_order(Song::new("X", "Alpha", 2000, 0.5, 0.5, 80), SortKey::Popularity);
/// list.insert_in_order(Song::new("Y", "Beta", 2001, 0.5, 0.5, 90), SortKey::Popularity);
///
/// let mut out = Vec::new();
/// let rows = write_top(&list, SortKey::Popularity, 1, &mut out).unwrap();
/// assert_eq!(rows, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "artist,song,year,popularity\nY,Beta,2001,90\n");
/// ```
pub fn write_top<W: Write>(
    list: &SongList,
    key: SortKey,
    display: usize,
    mut out: W,
) -> Result<usize, MusicError> {
    writeln!(out, "artist,song,year,{}", key)?;

    let mut rows = 0;
    for song in list.iter().take(display) {
        writeln!(
            out,
            "{},{},{},{}",
            quote_field(song.artist()),
            quote_field(song.song()),
            song.year(),
            key.format_metric(song)
        )?;
        rows += 1;
    }

    out.flush()?;
    Ok(rows)
}

/// Creates (or truncates) the file at `path` and writes the ranking to it.
pub fn write_output_file(
    path: &Path,
    list: &SongList,
    key: SortKey,
    display: usize,
) -> Result<usize, MusicError> {
    let file = File::create(path).map_err(|source| MusicError::FileError {
        path: path.to_path_buf(),
        source,
    })?;
    write_top(list, key, display, BufWriter::new(file))
}

/// Quotes `field` for CSV output when it needs it, doubling embedded quotes.
///
/// # Examples
///
/// ```
/// # use music_manager::output::quote_field;
/// assert_eq!(quote_field("Train"), "Train");
/// assert_eq!(quote_field("Hey, Soul Sister"), "\"Hey, Soul Sister\"");
/// assert_eq!(quote_field("12\" Mix"), "\"12\"\" Mix\"");
/// ```
pub fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
