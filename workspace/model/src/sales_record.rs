use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Calendar month, in fixed calendar order.
///
/// Serialized as the full English name, which is also the form the dataset
/// file and the submission forms use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based calendar index (January = 0, December = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Month at the given calendar index, wrapping modulo 12.
    pub fn from_index(index: usize) -> Month {
        Self::ALL[index % 12]
    }

    /// Full English name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not one of the twelve month names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized month name: {0}")]
pub struct ParseMonthError(pub String);

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL
            .into_iter()
            .find(|month| month.name() == s)
            .ok_or_else(|| ParseMonthError(s.to_string()))
    }
}

/// One row of the sales table.
///
/// Rows are append-only; duplicates for the same product, volume, and period
/// may coexist and queries always operate on the whole matching set.
/// The serde renames fix the CSV header names, in column order:
/// `Year, Month, Product, Base Sales, Volume`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: Month,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Base Sales")]
    pub base_sales: f64,
    #[serde(rename = "Volume")]
    pub volume: String,
}

impl SalesRecord {
    /// Whether this row belongs to the given product/volume pair.
    pub fn matches_pair(&self, product: &str, volume: &str) -> bool {
        self.product == product && self.volume == volume
    }
}
