//! Stage 1: scrape every configured station over the full date range and
//! export the observation table.

use log::info;
use snowdays::{
    default_scrape_range, write_observations, Scraper, SnowdaysError, OBSERVATIONS_FILE,
    STATION_CODES,
};
use std::path::Path;

fn main() -> Result<(), SnowdaysError> {
    env_logger::init();

    let scraper = Scraper::builder().build()?;
    let (start, end) = default_scrape_range();

    let records = scraper.scrape(&STATION_CODES, start, end);
    info!("scrape finished with {} records", records.len());

    write_observations(&records, Path::new(OBSERVATIONS_FILE))?;
    info!("observation table written to {OBSERVATIONS_FILE}");
    Ok(())
}
