//! Calendar and hydrological years

use chrono::{Datelike, NaiveDate};
use hydro_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A twelve-month year starting on the first day of `start_month`
///
/// A year that does not start in January is labelled by the calendar year in
/// which it ends, so September 2000 to August 2001 is water year 2001.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HydrologicalYear {
    start_month: u32,
}

impl HydrologicalYear {
    /// January to December
    pub const CALENDAR: Self = Self { start_month: 1 };
    /// September to August
    pub const SEPTEMBER: Self = Self { start_month: 9 };
    /// October to September
    pub const OCTOBER: Self = Self { start_month: 10 };

    pub fn starting_in(start_month: u32) -> Result<Self> {
        if !(1..=12).contains(&start_month) {
            return Err(Error::InvalidParameter(format!(
                "month must be in 1..=12, got {start_month}"
            )));
        }
        Ok(Self { start_month })
    }

    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Label of the year containing `date`
    pub fn year_of(&self, date: NaiveDate) -> i32 {
        if self.start_month == 1 || date.month() < self.start_month {
            date.year()
        } else {
            date.year() + 1
        }
    }

    /// First day of the year labelled `year`
    pub fn first_day(&self, year: i32) -> Option<NaiveDate> {
        let start_year = if self.start_month == 1 { year } else { year - 1 };
        NaiveDate::from_ymd_opt(start_year, self.start_month, 1)
    }
}

impl Default for HydrologicalYear {
    fn default() -> Self {
        Self::CALENDAR
    }
}

impl TryFrom<u32> for HydrologicalYear {
    type Error = Error;

    fn try_from(month: u32) -> Result<Self> {
        Self::starting_in(month)
    }
}

impl From<HydrologicalYear> for u32 {
    fn from(year: HydrologicalYear) -> Self {
        year.start_month
    }
}
