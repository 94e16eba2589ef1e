use crate::calendar::MonthRef;
use model::SalesRecord;

/// Periods from `required` that have no record matching all four fields
/// (product, volume, month, year) exactly, in input order.
///
/// Read-only; an empty result means the prediction can proceed.
pub fn missing_periods(
    records: &[SalesRecord],
    product: &str,
    volume: &str,
    required: &[MonthRef],
) -> Vec<MonthRef> {
    required
        .iter()
        .copied()
        .filter(|period| {
            !records.iter().any(|record| {
                record.matches_pair(product, volume)
                    && record.month == period.month
                    && record.year == period.year
            })
        })
        .collect()
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
    fn empty_when_all_periods_present() {
        let records = vec![
            record(2023, Month::October, "Soap", 100.0, "500g"),
            record(2023, Month::November, "Soap", 200.0, "500g"),
            record(2023, Month::December, "Soap", 300.0, "500g"),
        ];
        assert!(missing_periods(&records, "Soap", "500g", &january_lookback()).is_empty());
    }

    #[test]
    fn reports_missing_periods_in_input_order() {
        let records = vec![record(2023, Month::November, "Soap", 200.0, "500g")];
        let missing = missing_periods(&records, "Soap", "500g", &january_lookback());
        assert_eq!(
            missing,
            vec![
                MonthRef::new(Month::October, 2023),
                MonthRef::new(Month::December, 2023),
            ]
        );
    }

    #[test]
    fn wrong_year_does_not_count_as_present() {
        let records = vec![
            record(2024, Month::October, "Soap", 100.0, "500g"),
            record(2023, Month::November, "Soap", 200.0, "500g"),
            record(2023, Month::December, "Soap", 300.0, "500g"),
        ];
        let missing = missing_periods(&records, "Soap", "500g", &january_lookback());
        assert_eq!(missing, vec![MonthRef::new(Month::October, 2023)]);
    }

    #[test]
    fn match_is_exact_on_product_and_volume() {
        let records = vec![
            record(2023, Month::October, "Soap", 100.0, "250g"),
            record(2023, Month::November, "soap", 200.0, "500g"),
            record(2023, Month::December, "Soap", 300.0, "500g"),
        ];
        let missing = missing_periods(&records, "Soap", "500g", &january_lookback());
        assert_eq!(
            missing,
            vec![
                MonthRef::new(Month::October, 2023),
                MonthRef::new(Month::November, 2023),
            ]
        );
    }
}
