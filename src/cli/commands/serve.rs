use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{ForecastConfig, initialize_app_state};
use crate::router::create_router;

pub async fn serve(dataset_path: &str, bind_address: &str, forecast_year: i32) -> Result<()> {
    trace!("Entering serve function");
    info!("Salescast application starting up");
    debug!("Dataset path: {}", dataset_path);
    debug!("Bind address: {}", bind_address);
    debug!("Forecast year: {}", forecast_year);

    // Initialize application state
    let state = match initialize_app_state(dataset_path, ForecastConfig::new(forecast_year)) {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Salescast server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
