mod adjust;
mod error;
mod export;
mod resorts;
mod scrape;
mod types;

pub use error::SnowdaysError;

pub use adjust::error::AdjustError;
pub use adjust::pipeline::*;

pub use export::*;

pub use resorts::*;

pub use scrape::driver::{Scraper, DEFAULT_BASE_URL};
pub use scrape::error::{FetchError, ScrapeError};
pub use scrape::fetch::{Fetcher, DEFAULT_TIMEOUT};
pub use scrape::parser::{DailyRow, DashboardTableParser, HistoryParser, ParsedPage, RowData};
pub use scrape::retry::RetryPolicy;

pub use types::month_range::MonthRange;
pub use types::observation::Observation;
