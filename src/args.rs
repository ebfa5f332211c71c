use clap::Parser;
use glean_page::results::DEFAULT_RESULTS_FILE;

#[derive(Parser, Debug)]
#[command(name = "glean-page")]
#[command(about = "Searches the web, scrapes article content, and writes summarized results")]
#[command(version)]
pub struct Args {
    /// Search query used to discover pages
    #[arg(short, long, required_unless_present = "urls", conflicts_with = "urls")]
    pub query: Option<String>,

    /// Explicit page URLs to scrape instead of searching
    #[arg(short, long, num_args = 1..)]
    pub urls: Vec<String>,

    /// Number of search results to request (1-20)
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,

    /// Number of concurrent page fetches
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Output file for the results snapshot
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    pub output: String,
}
