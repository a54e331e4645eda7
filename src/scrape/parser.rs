//! HTML extraction for one station/month history page.
//!
//! The selector strings are an external contract with the dashboard's page
//! schema. When the layout changes extraction degrades to missing values, it
//! never fails the scrape; a new schema version gets a new [`HistoryParser`]
//! implementation rather than edits sprinkled through the driver.

use crate::scrape::error::ScrapeError;
use scraper::{ElementRef, Html, Selector};

const STATION_NAME_SELECTOR: &str = "#inner-content > div.region-content-top > app-dashboard-header > div.dashboard__header.small-12.ng-star-inserted > div > div.station-nav > a";
const ELEVATION_SELECTOR: &str = "#inner-content > div.region-content-top > app-dashboard-header > div.dashboard__header.small-12.ng-star-inserted > div > div.sub-heading > span > strong:nth-child(1)";
const ROW_SELECTOR: &str = "#main-page-content > div > div > div > lib-history > div.history-tabs > lib-history-table > div > div > div > table > tbody > tr";
const DAY_SELECTOR: &str = "td:nth-child(1)";
const TEMP_MAX_SELECTOR: &str = "td:nth-child(2) lib-display-unit > span > span.wu-value.wu-value-to";
const TEMP_AVG_SELECTOR: &str = "td:nth-child(3) lib-display-unit > span > span.wu-value.wu-value-to";
const TEMP_MIN_SELECTOR: &str = "td:nth-child(4) lib-display-unit > span > span.wu-value.wu-value-to";
const PRECIP_TOTAL_SELECTOR: &str = "td:nth-child(16) lib-display-unit > span > span.wu-value.wu-value-to";

/// Everything extracted from one history page.
///
/// The all-`None`, zero-row value doubles as the "no data" sentinel the retry
/// policy hands back after exhausting its budget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPage {
    pub station_name: Option<String>,
    pub elevation: Option<String>,
    pub rows: Vec<DailyRow>,
}

/// One table row: the day label plus its data payload.
///
/// `data` is `None` when any required cell (day, max, avg, min) could not be
/// located — the whole payload is discarded, including cells that did parse.
/// The row itself is never dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRow {
    pub day: Option<String>,
    pub data: Option<RowData>,
}

/// The data cells of a successfully parsed row. A missing precipitation cell
/// alone does not fail the row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowData {
    pub temp_max: String,
    pub temp_avg: String,
    pub temp_min: String,
    pub precip_total: Option<String>,
}

/// Extraction for one page-schema version. Tests substitute a stub document
/// or a stub implementation; the driver only sees this seam.
pub trait HistoryParser {
    fn parse(&self, html: &str) -> Result<ParsedPage, ScrapeError>;
}

/// Parser for the current dashboard table schema.
pub struct DashboardTableParser {
    station_name: Selector,
    elevation: Selector,
    row: Selector,
    day: Selector,
    temp_max: Selector,
    temp_avg: Selector,
    temp_min: Selector,
    precip_total: Selector,
}

impl DashboardTableParser {
    pub fn new() -> Self {
        Self {
            station_name: sel(STATION_NAME_SELECTOR),
            elevation: sel(ELEVATION_SELECTOR),
            row: sel(ROW_SELECTOR),
            day: sel(DAY_SELECTOR),
            temp_max: sel(TEMP_MAX_SELECTOR),
            temp_avg: sel(TEMP_AVG_SELECTOR),
            temp_min: sel(TEMP_MIN_SELECTOR),
            precip_total: sel(PRECIP_TOTAL_SELECTOR),
        }
    }

    fn parse_row(&self, row: ElementRef) -> DailyRow {
        let day = text_of(row, &self.day);
        let temp_max = text_of(row, &self.temp_max);
        let temp_avg = text_of(row, &self.temp_avg);
        let temp_min = text_of(row, &self.temp_min);
        let precip_total = text_of(row, &self.precip_total);

        match (day, temp_max, temp_avg, temp_min) {
            (Some(day), Some(temp_max), Some(temp_avg), Some(temp_min)) => DailyRow {
                day: Some(day),
                data: Some(RowData {
                    temp_max,
                    temp_avg,
                    temp_min,
                    precip_total,
                }),
            },
            (day, ..) => DailyRow { day, data: None },
        }
    }
}

impl Default for DashboardTableParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryParser for DashboardTableParser {
    fn parse(&self, html: &str) -> Result<ParsedPage, ScrapeError> {
        let document = Html::parse_document(html);

        let station_name = document
            .select(&self.station_name)
            .next()
            .map(element_text);
        let elevation = document.select(&self.elevation).next().map(element_text);
        let rows = document
            .select(&self.row)
            .map(|row| self.parse_row(row))
            .collect();

        Ok(ParsedPage {
            station_name,
            elevation,
            rows,
        })
    }
}

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("CSS selector should be valid")
}

fn text_of(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_unit(value: &str) -> String {
        format!(
            "<lib-display-unit><span><span class=\"wu-value wu-value-to\">{value}</span>\
             <span class=\"wu-label\">&nbsp;</span></span></lib-display-unit>"
        )
    }

    /// A 16-cell table row; `None` renders a cell without the value span so
    /// the inner selector misses.
    fn row(day: &str, max: Option<&str>, avg: Option<&str>, min: Option<&str>, precip: Option<&str>) -> String {
        let cell = |value: Option<&str>| match value {
            Some(v) => format!("<td>{}</td>", display_unit(v)),
            None => "<td>--</td>".to_string(),
        };
        let filler: String = (5..16).map(|_| "<td>--</td>").collect();
        format!(
            "<tr><td>{day}</td>{}{}{}{}{}</tr>",
            cell(max),
            cell(avg),
            cell(min),
            filler,
            cell(precip),
        )
    }

    fn page(name: &str, elevation: &str, rows: &[String]) -> String {
        format!(
            "<html><body>\
             <div id=\"inner-content\"><div class=\"region-content-top\"><app-dashboard-header>\
             <div class=\"dashboard__header small-12 ng-star-inserted\"><div>\
             <div class=\"station-nav\"><a href=\"#\">{name}</a></div>\
             <div class=\"sub-heading\"><span><strong>{elevation}</strong> <strong>ft</strong></span></div>\
             </div></div></app-dashboard-header></div></div>\
             <div id=\"main-page-content\"><div><div><div><lib-history>\
             <div class=\"history-tabs\"><lib-history-table><div><div><div>\
             <table><tbody>{}</tbody></table>\
             </div></div></div></lib-history-table></div>\
             </lib-history></div></div></div></div>\
             </body></html>",
            rows.concat()
        )
    }

    #[test]
    fn test_full_page_parses() {
        let html = page(
            "Forecast for Balderschwang",
            "3000",
            &[
                row("1/15/2023", Some("41.0"), Some("33.0"), Some("27.5"), Some("0.1")),
                row("1/16/2023", Some("39.2"), Some("30.1"), Some("25.0"), Some("0.0")),
            ],
        );
        let parsed = DashboardTableParser::new().parse(&html).unwrap();

        assert_eq!(parsed.station_name.as_deref(), Some("Forecast for Balderschwang"));
        assert_eq!(parsed.elevation.as_deref(), Some("3000"));
        assert_eq!(parsed.rows.len(), 2);

        let first = &parsed.rows[0];
        assert_eq!(first.day.as_deref(), Some("1/15/2023"));
        let data = first.data.as_ref().unwrap();
        assert_eq!(data.temp_max, "41.0");
        assert_eq!(data.temp_avg, "33.0");
        assert_eq!(data.temp_min, "27.5");
        assert_eq!(data.precip_total.as_deref(), Some("0.1"));
    }

    #[test]
    fn test_missing_required_cell_fails_entire_row() {
        let html = page(
            "Forecast for Balderschwang",
            "3000",
            &[row("1/15/2023", Some("41.0"), None, Some("27.5"), Some("0.1"))],
        );
        let parsed = DashboardTableParser::new().parse(&html).unwrap();

        assert_eq!(parsed.rows.len(), 1);
        let row = &parsed.rows[0];
        // Day label survives; every data field is discarded, parsed or not.
        assert_eq!(row.day.as_deref(), Some("1/15/2023"));
        assert_eq!(row.data, None);
    }

    #[test]
    fn test_missing_precip_degrades_only_that_field() {
        let html = page(
            "Forecast for Balderschwang",
            "3000",
            &[row("1/15/2023", Some("41.0"), Some("33.0"), Some("27.5"), None)],
        );
        let parsed = DashboardTableParser::new().parse(&html).unwrap();

        let data = parsed.rows[0].data.as_ref().unwrap();
        assert_eq!(data.temp_avg, "33.0");
        assert_eq!(data.precip_total, None);
    }

    #[test]
    fn test_unrecognized_document_degrades_to_empty() {
        let parsed = DashboardTableParser::new()
            .parse("<html><body><p>maintenance</p></body></html>")
            .unwrap();
        assert_eq!(parsed, ParsedPage::default());
    }
}
