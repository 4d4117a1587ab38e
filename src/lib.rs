pub mod args;
pub mod config;
pub mod errors;
pub mod output;
pub mod reader;
pub mod song;
pub mod song_list;
pub mod traits;

use config::Config;
use errors::MusicError;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use song::SortKey;
use song_list::SongList;
use std::error::Error;
use std::path::PathBuf;

/// Songs ranked by one key, plus every row that could not be parsed.
#[derive(Debug)]
pub struct Ingested {
    pub list: SongList,
    pub skipped: Vec<MusicError>,
}

/// Reads every file in `files` and inserts their songs into a new list.
///
/// Files are parsed in parallel; insertion happens afterwards in file order,
/// then line order, so the ranking doesn't depend on scheduling.
///
/// # Errors
///
/// Fails if any file can't be read. When several can't, the error reported
/// is the one for the file listed first.
pub fn ingest(
    files: &[PathBuf],
    key: SortKey,
    progress: ProgressBar,
) -> Result<Ingested, MusicError> {
    let parsed = files
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| reader::read_songs(path))
        .collect::<Vec<_>>();
    progress.finish_and_clear();
    let parsed = parsed.into_iter().collect::<Result<Vec<_>, _>>()?;

    let mut list = SongList::new();
    let mut skipped = Vec::new();
    for file in parsed {
        for song in file.songs {
            list.insert_in_order(song, key);
        }
        skipped.extend(file.skipped);
    }

    Ok(Ingested { list, skipped })
}

/// Ranks the configured input files and writes the top songs to the output
/// file.
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    log::info!(
        "Ranking songs from {} file(s) by {}",
        config.files.len(),
        config.sort_key
    );
    log::debug!("Parsing input files using {} threads", config.num_threads);

    let progress = ProgressBar::new(config.files.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} files") {
        progress.set_style(style);
    }

    let Ingested { list, skipped } = ingest(&config.files, config.sort_key, progress)?;

    if !skipped.is_empty() {
        if config.verbose {
            skipped.iter().for_each(|e| log::warn!("{}", e));
        } else {
            log::warn!(
                "Skipped {} malformed row(s), rerun with --verbose for details",
                skipped.len()
            );
        }
    }

    match list.peek_front() {
        Some(top) => log::info!(
            "Read {} songs; top by {} is '{}' by {} ({})",
            list.len(),
            config.sort_key,
            top.song(),
            top.artist(),
            config.sort_key.format_metric(top)
        ),
        None => log::info!("No songs were read"),
    }

    if config.verbose {
        let key = config.sort_key;
        let mut rank = 0usize;
        list.apply(
            |song, rank: &mut usize| {
                *rank += 1;
                log::debug!(
                    "#{} {} - {} ({})",
                    rank,
                    song.artist(),
                    song.song(),
                    key.format_metric(song)
                );
            },
            &mut rank,
        );
    }

    let rows = output::write_output_file(
        &config.output_path,
        &list,
        config.sort_key,
        config.display,
    )?;
    log::info!("Wrote {} song(s) to {}", rows, config.output_path.display());

    Ok(())
}
