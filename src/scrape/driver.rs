//! The station × month scrape loop.

use crate::scrape::error::FetchError;
use crate::scrape::fetch::{Fetcher, DEFAULT_TIMEOUT};
use crate::scrape::parser::{DashboardTableParser, HistoryParser, ParsedPage};
use crate::scrape::retry::RetryPolicy;
use crate::types::month_range::MonthRange;
use crate::types::observation::Observation;
use bon::bon;
use chrono::NaiveDate;
use log::info;
use std::time::Duration;

/// Dashboard endpoint prefix; the full URL is
/// `{base}/{station}/table/{date}/{date}/monthly`.
pub const DEFAULT_BASE_URL: &str = "https://www.wunderground.com/dashboard/pws";

/// Drives the scrape: for every station code, walks the month range most
/// recent first, fetches and parses each history page under the retry policy,
/// and flattens the results into [`Observation`]s.
///
/// Strictly sequential — one request in flight at a time, wall-clock dominated
/// by network latency plus backoff sleeps. A page that keeps failing costs its
/// retry budget and contributes zero records; it can never abort the run.
pub struct Scraper {
    fetcher: Fetcher,
    retry: RetryPolicy,
    parser: Box<dyn HistoryParser>,
    base_url: String,
}

#[bon]
impl Scraper {
    /// Builds a scraper. All parameters are optional overrides; the defaults
    /// target the live dashboard with the stock timeout and retry schedule.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snowdays::Scraper;
    ///
    /// let scraper = Scraper::builder().build()?;
    /// # Ok::<(), snowdays::FetchError>(())
    /// ```
    #[builder]
    pub fn new(
        base_url: Option<String>,
        timeout: Option<Duration>,
        retry: Option<RetryPolicy>,
        parser: Option<Box<dyn HistoryParser>>,
    ) -> Result<Self, FetchError> {
        let fetcher = Fetcher::new(timeout.unwrap_or(DEFAULT_TIMEOUT))?;
        Ok(Self {
            fetcher,
            retry: retry.unwrap_or_default(),
            parser: parser.unwrap_or_else(|| Box::new(DashboardTableParser::new())),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Scrapes every station over the month range and returns the accumulated
    /// records, handed off by value to the export stage.
    pub fn scrape(&self, stations: &[&str], start: NaiveDate, end: NaiveDate) -> Vec<Observation> {
        let range = MonthRange::new(start, end);
        let mut records = Vec::new();

        for &station in stations {
            info!("scraping station {station} over {} months", range.months_spanned());
            for month in range {
                let url = month_url(&self.base_url, station, month);
                let page = self.retry.run(&url, || {
                    let body = self.fetcher.fetch(&url)?;
                    self.parser.parse(&body)
                });
                records.extend(flatten_page(station, &page));
            }
            info!("station {station} done, {} records accumulated", records.len());
        }

        records
    }
}

/// The month's first day is used as both range endpoints; the page defines
/// what a "monthly" query spans from there.
fn month_url(base_url: &str, station: &str, month: NaiveDate) -> String {
    let day = month.format("%Y-%m-%d");
    format!("{base_url}/{station}/table/{day}/{day}/monthly")
}

/// Flattens one parsed page into observation records. Page-level name and
/// elevation are copied onto every parsed row; a degraded row keeps only its
/// day label.
fn flatten_page(station: &str, page: &ParsedPage) -> Vec<Observation> {
    page.rows
        .iter()
        .map(|row| match &row.data {
            Some(data) => Observation {
                station: station.to_string(),
                location: page.station_name.clone(),
                elevation: page.elevation.clone(),
                date: row.day.clone(),
                temp_max: Some(data.temp_max.clone()),
                temp_avg: Some(data.temp_avg.clone()),
                temp_min: Some(data.temp_min.clone()),
                precip_total: data.precip_total.clone(),
            },
            None => Observation {
                station: station.to_string(),
                location: None,
                elevation: None,
                date: row.day.clone(),
                temp_max: None,
                temp_avg: None,
                temp_min: None,
                precip_total: None,
            },
        })
        .collect()
}
