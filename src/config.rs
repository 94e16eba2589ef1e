use crate::schemas::AppState;
use anyhow::Result;
use model::SalesStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Year window predictions and submissions operate in.
///
/// The original dataset covers a two-year window; the pair is configuration
/// rather than hardcoded literals, defaulting to 2024/2023.
#[derive(Debug, Clone, Copy)]
pub struct ForecastConfig {
    /// The only year predictions are served for.
    pub forecast_year: i32,
    /// December submissions are recorded under this year.
    pub prior_year: i32,
}

impl ForecastConfig {
    pub fn new(forecast_year: i32) -> Self {
        Self {
            forecast_year,
            prior_year: forecast_year - 1,
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self::new(2024)
    }
}

/// Initialize application configuration and state
pub fn initialize_app_state(dataset_path: &str, config: ForecastConfig) -> Result<AppState> {
    tracing::info!("Loading sales dataset: {}", dataset_path);
    let store = SalesStore::load_or_init(dataset_path)?;

    Ok(AppState {
        store: Arc::new(RwLock::new(store)),
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prior_year_is_derived_from_forecast_year() {
        let config = ForecastConfig::new(2024);
        assert_eq!(config.forecast_year, 2024);
        assert_eq!(config.prior_year, 2023);

        let config = ForecastConfig::new(2030);
        assert_eq!(config.prior_year, 2029);
    }

    #[test]
    fn default_matches_the_dataset_window() {
        let config = ForecastConfig::default();
        assert_eq!(config.forecast_year, 2024);
        assert_eq!(config.prior_year, 2023);
    }
}
