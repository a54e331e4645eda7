//! Static scrape configuration: station codes, scrape bounds, and the resort
//! reference table used to enrich observations.
//!
//! The reference elevation is authoritative and only ever enriches scraped
//! records; it is never overwritten by the elevation displayed on the page.

use chrono::NaiveDate;
use polars::prelude::*;

/// Station codes to scrape, in fixed order.
pub const STATION_CODES: [&str; 18] = [
    "IVALTO2",
    "IGARMISC34",
    "IMITTE82",
    "IBALDE3",
    "IOBERA47",
    "IBAYERNR33",
    "IOBERA42",
    "IBERCH21",
    "ILOBAR3",
    "IGANGN11",
    "IRUERA5",
    "ILECH44",
    "ITABRUNI5",
    "ILOURT1",
    "IROURE1",
    "ILESAL6",
    "IVALLEDA13",
    "IMORGE4",
];

/// A named ski resort tied to one station code, with its known elevation in
/// meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resort {
    pub name: &'static str,
    pub station: &'static str,
    pub elevation_m: f64,
}

/// The resort reference table. Stations without an entry here are dropped by
/// the adjustment pipeline's join filter.
pub const RESORTS: [Resort; 16] = [
    Resort { name: "Garmisch-Partenkirchen", station: "IGARMISC34", elevation_m: 2303.0 },
    Resort { name: "Oberstdorf", station: "IMITTE82", elevation_m: 995.0 },
    Resort { name: "Balderschwang", station: "IBALDE3", elevation_m: 1060.0 },
    Resort { name: "Oberammergau", station: "IOBERA47", elevation_m: 834.0 },
    Resort { name: "Reit im Winkl", station: "IBAYERNR33", elevation_m: 2651.0 },
    Resort { name: "Oberaudorf", station: "IOBERA42", elevation_m: 1637.0 },
    Resort { name: "Berchtesgaden", station: "IBERCH21", elevation_m: 1998.0 },
    Resort { name: "Valle Nevado", station: "ILOBAR3", elevation_m: 224.0 },
    Resort { name: "Alpensia (South Korea)", station: "IGANGN11", elevation_m: 20.0 },
    Resort { name: "Andermatt-Sedrun Sport AG", station: "IRUERA5", elevation_m: 5062.0 },
    Resort { name: "Ski Arlberg", station: "ILECH44", elevation_m: 4869.0 },
    Resort { name: "Skirama Dolomiti Adamello Brenta", station: "ITABRUNI5", elevation_m: 2732.0 },
    Resort { name: "Sestriere", station: "IROURE1", elevation_m: 3271.0 },
    Resort { name: "Les 3 Vallées", station: "ILESAL6", elevation_m: 1270.0 },
    Resort { name: "Verbier4Vallées", station: "IVALLEDA13", elevation_m: 2392.0 },
    Resort { name: "Cervinia", station: "IVALTO2", elevation_m: 6722.0 },
];

/// Inclusive scrape bounds: January 2016 through December 2023.
pub fn default_scrape_range() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
    )
}

/// Builds the reference table as a `DataFrame` for the pipeline's left join:
/// columns `ResortName`, `Station`, `resort_elev`.
pub fn reference_frame() -> PolarsResult<DataFrame> {
    df!(
        "ResortName" => RESORTS.iter().map(|r| r.name).collect::<Vec<_>>(),
        "Station" => RESORTS.iter().map(|r| r.station).collect::<Vec<_>>(),
        "resort_elev" => RESORTS.iter().map(|r| r.elevation_m).collect::<Vec<_>>(),
    )
}
