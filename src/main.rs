use clap::Parser;
use glean_page::Scraper;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut scraper = Scraper::from_env();
    scraper.set_max_concurrency(args.concurrency);

    // Explicit URLs win; otherwise discover them through search
    let urls = if !args.urls.is_empty() {
        args.urls.clone()
    } else if let Some(query) = args.query.as_deref() {
        ::log::info!("Searching for: {}", query);
        match scraper.search_web(query, args.count).await {
            Ok(links) => links,
            Err(e) => {
                eprintln!("Search failed: {}", e);
                return;
            }
        }
    } else {
        Vec::new()
    };

    if urls.is_empty() {
        println!("No URLs to scrape.");
        return;
    }

    let start_time = std::time::Instant::now();
    let successes = scraper.batch_scrape(&urls).await;
    ::log::info!(
        "Scraped {} of {} pages in {:.2} seconds",
        successes.len(),
        urls.len(),
        start_time.elapsed().as_secs_f64()
    );

    scraper.analyze_and_summarize().await;

    for url in scraper.failed_urls() {
        println!("Failed to scrape: {}", url);
    }

    match scraper.save_results(&args.output) {
        Ok(path) => println!("Results saved to {}", path.display()),
        Err(e) => {
            ::log::error!("Failed to save results: {}", e);
            eprintln!("Failed to save results: {}", e);
        }
    }
}
