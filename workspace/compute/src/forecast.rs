use crate::calendar::MonthRef;
use crate::error::{ComputeError, Result};
use model::SalesRecord;
use tracing::debug;

/// Arithmetic mean of `base_sales` over every record matching the
/// product/volume pair and any of the given periods.
///
/// The matching set may exceed the number of periods when duplicate rows
/// exist; all of them enter the average. An empty matching set is an error,
/// never a NaN.
pub fn predict(
    records: &[SalesRecord],
    product: &str,
    volume: &str,
    periods: &[MonthRef],
) -> Result<f64> {
    let matching: Vec<f64> = records
        .iter()
        .filter(|record| {
            record.matches_pair(product, volume)
                && periods
                    .iter()
                    .any(|period| period.month == record.month && period.year == record.year)
        })
        .map(|record| record.base_sales)
        .collect();

    if matching.is_empty() {
        return Err(ComputeError::NoMatchingRecords {
            product: product.to_string(),
            volume: volume.to_string(),
        });
    }

    let mean = matching.iter().sum::<f64>() / matching.len() as f64;
    debug!(product, volume, samples = matching.len(), mean, "Computed prediction");
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Month;

    fn record(year: i32, month: Month, product: &str, base_sales: f64, volume: &str) -> SalesRecord {
        SalesRecord {
            year,
            month,
            product: product.to_string(),
            base_sales,
            volume: volume.to_string(),
        }
    }

    fn january_lookback() -> Vec<MonthRef> {
        vec![
            MonthRef::new(Month::October, 2023),
            MonthRef::new(Month::November, 2023),
            MonthRef::new(Month::December, 2023),
        ]
    }

    #[test]
    fn mean_of_three_prior_months() {
        let records = vec![
            record(2023, Month::October, "Soap", 100.0, "500g"),
            record(2023, Month::November, "Soap", 200.0, "500g"),
            record(2023, Month::December, "Soap", 300.0, "500g"),
        ];
        let mean = predict(&records, "Soap", "500g", &january_lookback()).unwrap();
        assert_eq!(mean, 200.0);
    }

    #[test]
    fn duplicates_all_enter_the_average() {
        let records = vec![
            record(2023, Month::October, "Soap", 100.0, "500g"),
            record(2023, Month::October, "Soap", 300.0, "500g"),
            record(2023, Month::November, "Soap", 200.0, "500g"),
            record(2023, Month::December, "Soap", 200.0, "500g"),
        ];
        let mean = predict(&records, "Soap", "500g", &january_lookback()).unwrap();
        assert_eq!(mean, 200.0);
    }

    #[test]
    fn rows_outside_the_periods_are_ignored() {
        let records = vec![
            record(2023, Month::September, "Soap", 9000.0, "500g"),
            record(2023, Month::October, "Soap", 100.0, "500g"),
            record(2023, Month::November, "Soap", 200.0, "500g"),
            record(2023, Month::December, "Soap", 300.0, "500g"),
            record(2024, Month::October, "Soap", 9000.0, "500g"),
        ];
        let mean = predict(&records, "Soap", "500g", &january_lookback()).unwrap();
        assert_eq!(mean, 200.0);
    }

    #[test]
    fn empty_matching_set_is_an_error_not_nan() {
        let records = vec![record(2023, Month::October, "Soap", 100.0, "250g")];
        let err = predict(&records, "Soap", "500g", &january_lookback()).unwrap_err();
        assert!(matches!(err, ComputeError::NoMatchingRecords { .. }));
    }
}
