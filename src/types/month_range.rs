//! A descending iterator over the first days of calendar months.

use chrono::{Datelike, Months, NaiveDate};

/// Iterates month-first dates from the end bound's month down to the start
/// bound's month, inclusive on both ends.
///
/// Both bounds are truncated to month granularity, so only year and month of
/// the inputs matter. The iterator is finite and `Copy`, so a range can be
/// restarted by iterating the original value again.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use snowdays::MonthRange;
///
/// let start = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let months: Vec<NaiveDate> = MonthRange::new(start, end).collect();
///
/// assert_eq!(months.len(), 3);
/// assert_eq!(months[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(months[2], NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthRange {
    current: Option<NaiveDate>,
    floor: NaiveDate,
}

impl MonthRange {
    /// Builds the range for `start..=end`. An end before the start month
    /// yields an empty iterator.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let floor = first_of_month(start);
        let top = first_of_month(end);
        Self {
            current: (top >= floor).then_some(top),
            floor,
        }
    }

    /// Number of months the range spans, without consuming it.
    pub fn months_spanned(&self) -> usize {
        match self.current {
            Some(top) => {
                let span = (top.year() - self.floor.year()) * 12
                    + (top.month() as i32 - self.floor.month() as i32);
                span as usize + 1
            }
            None => 0,
        }
    }
}

impl Iterator for MonthRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let date = self.current?;
        self.current = date
            .checked_sub_months(Months::new(1))
            .filter(|prev| *prev >= self.floor);
        Some(date)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::MonthRange;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_range_is_descending_and_inclusive() {
        let range = MonthRange::new(ymd(2016, 1, 1), ymd(2023, 12, 1));
        let months: Vec<NaiveDate> = range.collect();

        assert_eq!(months.len(), 96);
        assert_eq!(months.first(), Some(&ymd(2023, 12, 1)));
        assert_eq!(months.last(), Some(&ymd(2016, 1, 1)));
        assert!(months.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(range.months_spanned(), 96);
    }

    #[test]
    fn test_year_boundary_rolls_back_once() {
        let months: Vec<NaiveDate> = MonthRange::new(ymd(2019, 12, 1), ymd(2020, 1, 1)).collect();
        assert_eq!(months, vec![ymd(2020, 1, 1), ymd(2019, 12, 1)]);
    }

    #[test]
    fn test_bounds_truncate_to_month() {
        let months: Vec<NaiveDate> = MonthRange::new(ymd(2022, 6, 28), ymd(2022, 8, 17)).collect();
        assert_eq!(months, vec![ymd(2022, 8, 1), ymd(2022, 7, 1), ymd(2022, 6, 1)]);
    }

    #[test]
    fn test_single_month() {
        let months: Vec<NaiveDate> = MonthRange::new(ymd(2022, 3, 5), ymd(2022, 3, 25)).collect();
        assert_eq!(months, vec![ymd(2022, 3, 1)]);
    }

    #[test]
    fn test_inverted_bounds_are_empty() {
        let mut range = MonthRange::new(ymd(2022, 4, 1), ymd(2022, 3, 1));
        assert_eq!(range.next(), None);
        assert_eq!(range.months_spanned(), 0);
    }

    #[test]
    fn test_restartable() {
        let range = MonthRange::new(ymd(2021, 1, 1), ymd(2021, 6, 1));
        let first: Vec<NaiveDate> = range.collect();
        let second: Vec<NaiveDate> = range.collect();
        assert_eq!(first, second);
    }
}
