#[cfg(test)]
pub mod test_utils {
    use crate::config::ForecastConfig;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use model::{Month, SalesRecord, SalesStore};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::RwLock;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create application state backed by a fresh dataset file in a temp
    /// directory. The TempDir must outlive the test, so it is returned
    /// alongside the state.
    pub fn setup_test_state() -> (AppState, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("sales_dataset.csv");
        let store = SalesStore::load_or_init(&path).expect("Failed to initialize dataset");

        let state = AppState {
            store: Arc::new(RwLock::new(store)),
            config: ForecastConfig::default(),
        };
        (state, dir)
    }

    /// Shorthand for building test records.
    pub fn record(
        year: i32,
        month: Month,
        product: &str,
        base_sales: f64,
        volume: &str,
    ) -> SalesRecord {
        SalesRecord {
            year,
            month,
            product: product.to_string(),
            base_sales,
            volume: volume.to_string(),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> (Router, TempDir) {
        let _ = init_test_tracing();

        let (state, dir) = setup_test_state();
        (create_router(state), dir)
    }

    /// Create axum app for testing, pre-seeded with records.
    pub async fn setup_test_app_with_records(records: Vec<SalesRecord>) -> (Router, TempDir) {
        let _ = init_test_tracing();

        let (state, dir) = setup_test_state();
        {
            let mut store = state.store.write().await;
            for record in records {
                store.append(record).expect("Failed to seed record");
            }
        }
        (create_router(state), dir)
    }
}
