use crate::adjust::error::AdjustError;
use crate::export::ExportError;
use crate::scrape::error::{FetchError, ScrapeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnowdaysError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Adjust(#[from] AdjustError),
}
