use crate::errors::MusicError;
use crate::song::Song;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

// Column positions in the input CSV. Columns 2 and 3 (duration, explicit)
// and everything after energy are not used.
const ARTIST: usize = 0;
const SONG: usize = 1;
const YEAR: usize = 4;
const POPULARITY: usize = 5;
const DANCEABILITY: usize = 6;
const ENERGY: usize = 7;
const MIN_FIELDS: usize = ENERGY + 1;

/// Songs read from one input, in file order, plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub songs: Vec<Song>,
    pub skipped: Vec<MusicError>,
}

/// Reads the CSV file at `path`.
///
/// # Errors
///
/// Returns [`MusicError::FileError`] if the file cannot be opened or a line
/// cannot be read. Malformed rows are not errors; they are collected in
/// [`ParsedFile::skipped`].
pub fn read_songs(path: &Path) -> Result<ParsedFile, MusicError> {
    let file = File::open(path).map_err(|source| MusicError::FileError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_songs(BufReader::new(file), &path.display().to_string()).map_err(|e| match e {
        MusicError::IoError(source) => MusicError::FileError {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses CSV text from `reader`. The first line is a header and is skipped,
/// as are blank lines. Fields may be double-quoted; a quoted field can hold
/// commas, doubled quotes (`""`) and line breaks. `source_name` only labels
/// skipped rows.
///
/// # Examples
///
/// ```
/// # use music_manager::reader::parse_songs;
/// let csv = "artist,song,duration_ms,explicit,year,popularity,danceability,energy\n\
///            Britney Spears,Oops!...I Did It Again,211160,False,2000,77,0.751,0.834\n\
///            Train,\"Hey, Soul Sister\",216773,False,2010,83,0.673,0.886\n";
/// let parsed = parse_songs(csv.as_bytes(), "inline").unwrap();
/// assert_eq!(parsed.songs.len(), 2);
/// assert_eq!(parsed.songs[0].popularity(), 77);
/// assert_eq!(parsed.songs[1].song(), "Hey, Soul Sister");
/// ```
pub fn parse_songs<R: BufRead>(reader: R, source_name: &str) -> Result<ParsedFile, MusicError> {
    let mut parsed = ParsedFile::default();
    let mut lines = reader.lines().enumerate().skip(1);

    while let Some((index, line)) = lines.next() {
        let mut record = line?;
        // keep reading until every quoted field is closed
        while has_open_quote(&record) {
            match lines.next() {
                Some((_, next)) => {
                    record.push('\n');
                    record.push_str(&next?);
                }
                None => break,
            }
        }

        let record = record.trim_end_matches('\r');
        if record.trim().is_empty() {
            continue;
        }

        match parse_line(record) {
            Ok(song) => parsed.songs.push(song),
            Err(reason) => {
                log::debug!("Skipping {}:{}: {}", source_name, index + 1, reason);
                parsed.skipped.push(MusicError::ParseError {
                    source_name: source_name.to_string(),
                    line: index + 1,
                    reason,
                });
            }
        }
    }

    Ok(parsed)
}

/// Turns one data row into a song, or explains why it can't.
pub fn parse_line(line: &str) -> Result<Song, String> {
    let fields = split_fields(line)?;
    if fields.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {} fields, found {}",
            MIN_FIELDS,
            fields.len()
        ));
    }

    let artist = text_field(&fields, ARTIST, "artist")?;
    let song = text_field(&fields, SONG, "song")?;
    let year: i32 = number_field(&fields, YEAR, "year")?;
    let popularity: i32 = number_field(&fields, POPULARITY, "popularity")?;
    let danceability = real_field(&fields, DANCEABILITY, "danceability")?;
    let energy = real_field(&fields, ENERGY, "energy")?;

    Ok(Song::new(artist, song, year, danceability, energy, popularity))
}

/// Splits one CSV record into its fields, unquoting quoted ones.
///
/// A quote only opens a quoted field at the start of that field; elsewhere it
/// is kept as a literal character.
///
/// # Examples
///
/// ```
/// # use music_manager::reader::split_fields;
/// assert_eq!(
///     split_fields(r#"Train,"Hey, Soul Sister",2010"#).unwrap(),
///     ["Train", "Hey, Soul Sister", "2010"]
/// );
/// assert_eq!(split_fields(r#""say ""hi""",x"#).unwrap(), [r#"say "hi""#, "x"]);
/// assert!(split_fields(r#"a,"open"#).is_err());
/// ```
pub fn split_fields(record: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            (c, _) => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(field);
    Ok(fields)
}

fn has_open_quote(record: &str) -> bool {
    // doubled quotes inside a field count twice, so parity is enough
    record.chars().filter(|&c| c == '"').count() % 2 == 1
}

fn text_field<'a>(fields: &'a [String], index: usize, name: &str) -> Result<&'a str, String> {
    let value = fields[index].as_str();
    if value.trim().is_empty() {
        Err(format!("{} is empty", name))
    } else {
        Ok(value)
    }
}

fn number_field<T: FromStr>(fields: &[String], index: usize, name: &str) -> Result<T, String> {
    let raw = fields[index].trim();
    raw.parse()
        .map_err(|_| format!("{} '{}' is not a number", name, raw))
}

fn real_field(fields: &[String], index: usize, name: &str) -> Result<f64, String> {
    let value: f64 = number_field(fields, index, name)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("{} '{}' is not a finite number", name, fields[index].trim()))
    }
}
