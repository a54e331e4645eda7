//! The flat daily record accumulated by the scrape driver.

/// One scraped day for one station, as exported to the observation table.
///
/// Every field except the station code comes from the page and may be missing:
/// a `None` here becomes a null in the exported table. A row that tripped the
/// fail-entire-row policy carries `None` in all fields but `station`.
/// Temperatures, precipitation and elevation are kept as the raw displayed
/// text; numeric coercion is the adjustment pipeline's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Station code the record was scraped for (e.g. "IBALDE3").
    pub station: String,
    /// Station display name from the page header.
    pub location: Option<String>,
    /// Elevation as displayed by the page, units as provided by the source.
    pub elevation: Option<String>,
    /// Day label of the table row (e.g. "1/15/2023").
    pub date: Option<String>,
    pub temp_max: Option<String>,
    pub temp_avg: Option<String>,
    pub temp_min: Option<String>,
    pub precip_total: Option<String>,
}
