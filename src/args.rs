use crate::song::SortKey;
use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Metric to rank songs by
    #[arg(long = "sortBy", value_enum)]
    pub sort_by: SortKey,

    /// (optional) Number of top songs to write to the output file
    #[arg(short = 'n', long = "display", default_value_t = 10)]
    pub display: usize,

    /// Comma separated list of CSV files to read
    #[arg(long = "files", value_delimiter = ',', required = true)]
    pub files: Vec<String>,

    /// (optional) Where to write the ranking
    #[arg(short = 'o', long = "output", default_value = "output.csv")]
    pub output: String,

    #[arg(short, long)]
    pub verbose: bool,
}
