use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdjustError {
    #[error("adjustment pipeline failed")]
    Pipeline(#[from] PolarsError),
}
