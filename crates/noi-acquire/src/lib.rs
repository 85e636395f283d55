pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod scrape;
pub mod types;

pub use scrape::{run, scrape};
pub use types::{Extracted, FetchConfig, ScrapeConfig, ScrapeSummary};
