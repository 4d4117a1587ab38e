use crate::errors::MusicError;
use crate::traits::GeneralFormat;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One song read from the input, with the three metrics it can be ranked by.
///
/// Fields are private: a `Song` never changes once built.
///
/// # Examples
///
/// ```
/// # use music_manager::song::Song;
/// let song = Song::new("Daft Punk", "One More Time", 2000, 0.613, 0.697, 71);
/// assert_eq!(song.song(), "One More Time");
/// assert_eq!(song.popularity(), 71);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    artist: String,
    song: String,
    year: i32,
    popularity: i32,
    danceability: f64,
    energy: f64,
}

impl Song {
    /// Builds a song. Argument order follows the metrics as they are
    /// commonly listed for the dataset: danceability, energy, popularity.
    pub fn new(
        artist: impl Into<String>,
        song: impl Into<String>,
        year: i32,
        danceability: f64,
        energy: f64,
        popularity: i32,
    ) -> Self {
        Self {
            artist: artist.into(),
            song: song.into(),
            year,
            popularity,
            danceability,
            energy,
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Song title.
    pub fn song(&self) -> &str {
        &self.song
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn popularity(&self) -> i32 {
        self.popularity
    }

    pub fn danceability(&self) -> f64 {
        self.danceability
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }
}

/// The metric songs are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    Popularity,
    Energy,
    Danceability,
}

impl SortKey {
    /// Returns the value of this metric for `song`.
    ///
    /// Popularity is an integer in the input; it widens to `f64` without loss.
    pub fn metric(self, song: &Song) -> f64 {
        match self {
            SortKey::Popularity => f64::from(song.popularity),
            SortKey::Energy => song.energy,
            SortKey::Danceability => song.danceability,
        }
    }

    /// Renders the metric the way it appears in the output CSV.
    ///
    /// # Examples
    ///
    /// ```
    /// # use music_manager::song::{Song, SortKey};
    /// let song = Song::new("X", "Alpha", 2000, 0.5, 0.123456789, 80);
    /// assert_eq!(SortKey::Popularity.format_metric(&song), "80");
    /// assert_eq!(SortKey::Danceability.format_metric(&song), "0.5");
    /// assert_eq!(SortKey::Energy.format_metric(&song), "0.123457");
    /// ```
    pub fn format_metric(self, song: &Song) -> String {
        match self {
            SortKey::Popularity => song.popularity.to_string(),
            SortKey::Energy => song.energy.format_general(),
            SortKey::Danceability => song.danceability.format_general(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Energy => "energy",
            SortKey::Danceability => "danceability",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = MusicError;

    /// Parses a column name. Anything but the three metric names is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use music_manager::song::SortKey;
    /// assert_eq!("energy".parse::<SortKey>().unwrap(), SortKey::Energy);
    /// assert!("song".parse::<SortKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(SortKey::Popularity),
            "energy" => Ok(SortKey::Energy),
            "danceability" => Ok(SortKey::Danceability),
            other => Err(MusicError::SortKeyError(other.to_string())),
        }
    }
}

/// Compares two songs by `key`, falling back to the title when the metric ties.
///
/// The title comparison is the same whatever `key` is. Unordered reals (NaN)
/// are treated as a tie.
///
/// # Examples
///
/// ```
/// # use music_manager::song::{compare_by_key, Song, SortKey};
/// # use std::cmp::Ordering;
/// let alpha = Song::new("X", "Alpha", 2000, 0.5, 0.5, 80);
/// let beta = Song::new("Y", "Beta", 2001, 0.5, 0.5, 90);
///
/// assert_eq!(compare_by_key(&alpha, &beta, SortKey::Popularity), Ordering::Less);
/// // equal energy, so "Alpha" < "Beta" decides
/// assert_eq!(compare_by_key(&alpha, &beta, SortKey::Energy), Ordering::Less);
/// ```
pub fn compare_by_key(a: &Song, b: &Song, key: SortKey) -> Ordering {
    match key.metric(a).partial_cmp(&key.metric(b)) {
        Some(Ordering::Equal) | None => a.song.as_bytes().cmp(b.song.as_bytes()),
        Some(ordering) => ordering,
    }
}
