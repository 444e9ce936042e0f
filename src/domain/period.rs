use crate::utils::error::{Result, SiteError};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Accepted years for parsed and constructed periods.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// A calendar month, the unit of gallery navigation.
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !YEAR_RANGE.contains(&year) {
            return Err(SiteError::InvalidPeriod {
                label: format!("{}-{:02}", year, month),
            });
        }
        Ok(Self { year, month })
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// 本地時間的當月
    pub fn current() -> Self {
        Self::from_date(&chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// "September 2024"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month_index()], self.year)
    }

    /// "Sep 2024", the form used by the talks table.
    pub fn short_label(&self) -> String {
        format!("{} {}", MONTH_ABBREVS[self.month_index()], self.year)
    }

    /// Label with whitespace removed, used to locate the month's photo.
    pub fn resource_key(&self) -> String {
        resource_key(&self.label())
    }

    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every month from `start` to `end`, both inclusive. Empty when `start > end`.
    pub fn range_inclusive(start: Period, end: Period) -> impl Iterator<Item = Period> {
        // 到 end 為止，不再往後計算
        std::iter::successors(Some(start), move |p| (*p < end).then(|| p.succ()))
            .take_while(move |p| *p <= end)
    }

    fn month_index(&self) -> usize {
        (self.month - 1) as usize
    }
}

pub fn resource_key(label: &str) -> String {
    label.split_whitespace().collect()
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Period {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SiteError::InvalidPeriod {
            label: s.to_string(),
        };

        let mut parts = s.split_whitespace();
        let (Some(name), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let month = MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name))
            .or_else(|| {
                MONTH_ABBREVS
                    .iter()
                    .position(|m| m.eq_ignore_ascii_case(name))
            })
            .ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Period::new(year, month as u32 + 1)
    }
}

impl TryFrom<String> for Period {
    type Error = SiteError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.label()
    }
}
