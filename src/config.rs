use crate::args::Args;
use crate::song::SortKey;
use std::error::Error;
use std::path::PathBuf;

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `num_threads` - Number of threads used to parse input files in parallel
/// * `sort_key` - Metric the songs are ranked by
/// * `display` - Number of songs written to the output file
/// * `files` - Input CSV files, in the order their songs are inserted
/// * `output_path` - Destination of the output CSV
/// * `verbose` - Bool to determine if rows skipped during parsing will be printed
///
#[derive(Clone, Debug)]
pub struct Config {
    pub num_threads: usize,
    pub sort_key: SortKey,
    pub display: usize,
    pub files: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Details
    ///
    /// 1. Configures parallel parsing based on available CPU cores
    /// 2. Copies sort key, display limit and verbose flag from the arguments
    /// 3. Drops empty entries from the file list (e.g. a trailing comma)
    ///
    /// # Errors
    ///
    /// Returns an error if no input file remains after step 3. A failure to
    /// configure the thread pool is logged but doesn't halt execution.
    pub fn build(args: &Args) -> Result<Config, Box<dyn Error>> {
        let num_threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            log::error!("Could not configure thread pool: {}", e);
        }

        let files: Vec<PathBuf> = args
            .files
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(PathBuf::from)
            .collect();

        if files.is_empty() {
            return Err("No input files were given".into());
        }

        Ok(Config {
            num_threads,
            sort_key: args.sort_by,
            display: args.display,
            files,
            output_path: PathBuf::from(&args.output),
            verbose: args.verbose,
        })
    }
}
