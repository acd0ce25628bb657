use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "bookgraph")]
#[command(about = "Find the closest books by co-review distance and check how well they share a genre")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the interaction dump, book id map, seed lists and scraped genres
    /// (defaults to ~/.bookgraph)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<String>,

    /// Directory for result files
    #[arg(short, long, value_name = "DIR", default_value = "results", global = true)]
    pub output_dir: String,

    /// Directory for cached artifacts (defaults to <DATA_DIR>/cache)
    #[arg(long, value_name = "DIR", global = true)]
    pub cache_dir: Option<String>,

    /// Discard cached artifacts and rebuild them from the raw data
    #[arg(long, global = true)]
    pub rebuild: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - debug logging and per-book details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the closest books for every seed book of a genre
    Closest {
        /// Genre whose seed books are searched from
        #[arg(short, long)]
        genre: String,

        /// Number of closest books found by the weighted search
        #[arg(short, long, value_name = "COUNT", default_value = "100")]
        k: usize,

        /// Number of most co-reviewed direct neighbors
        #[arg(short, long, value_name = "COUNT", default_value = "100")]
        coreviewed_k: usize,
    },

    /// Compute co-review degrees and show the most connected books
    Degrees {
        /// Number of books to show
        #[arg(short, long, value_name = "COUNT", default_value = "20")]
        top: usize,
    },

    /// Score saved results by how many neighbors share the seed's genre
    Evaluate {
        /// Genres to evaluate, comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        genres: Vec<String>,

        /// Leading neighbors checked per seed book
        #[arg(short = 'n', long, value_name = "COUNT", default_value = "10")]
        checked: usize,

        /// Leading shelf tags checked per neighbor
        #[arg(short, long, value_name = "COUNT", default_value = "5")]
        top_genres: usize,

        /// Highest-degree books used for the genre baseline
        #[arg(short, long, value_name = "COUNT", default_value = "500")]
        baseline_books: usize,

        /// Books listed as appearing most often among the closest
        #[arg(short, long, value_name = "COUNT", default_value = "10")]
        appearances: usize,

        /// Print the evaluation as JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },
}
