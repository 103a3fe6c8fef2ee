pub mod catalog;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod progress;
pub mod scrape;
