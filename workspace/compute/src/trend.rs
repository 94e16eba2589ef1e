use model::SalesRecord;

/// One charted point of a product/volume sales history.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    /// X-axis label, `"{year} {month}"`.
    pub label: String,
    pub base_sales: f64,
}

/// Full history for the product/volume pair, sorted chronologically.
///
/// The sort key is `(year, calendar month index)`, never the lexical month
/// name.
pub fn trend_series(records: &[SalesRecord], product: &str, volume: &str) -> Vec<TrendPoint> {
    let mut history: Vec<&SalesRecord> = records
        .iter()
        .filter(|record| record.matches_pair(product, volume))
        .collect();
    history.sort_by_key(|record| (record.year, record.month.index()));

    history
        .into_iter()
        .map(|record| TrendPoint {
            label: format!("{} {}", record.year, record.month),
            base_sales: record.base_sales,
        })
        .collect()
}
