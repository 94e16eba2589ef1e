use crate::config::ForecastConfig;
use model::SalesStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Dataset store guarding the CSV-backed sales table
    pub store: Arc<RwLock<SalesStore>>,
    /// Year window for predictions and submissions
    pub config: ForecastConfig,
}

/// Form payload for `POST /predict`.
///
/// Fields are optional so that an absent field renders the shared
/// "All fields are required." message instead of a form rejection.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PredictForm {
    pub product: Option<String>,
    pub volume: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Form payload for `POST /submit_data`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubmitDataForm {
    pub product: Option<String>,
    pub volume: Option<String>,
    pub month: Option<String>,
    pub base_sales: Option<String>,
}

/// Query parameters pre-filling the add-data form.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AddDataParams {
    pub product: Option<String>,
    pub volume: Option<String>,
    pub month: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Number of records currently in the dataset
    pub records: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::home::home,
        crate::handlers::predict::predict,
        crate::handlers::add_data::add_data,
        crate::handlers::submit_data::submit_data,
    ),
    components(
        schemas(
            PredictForm,
            SubmitDataForm,
            AddDataParams,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Server-rendered pages"),
        (name = "forecast", description = "Prediction and data submission"),
    ),
    info(
        title = "Salescast",
        description = "Sales history tracker with a three-month-average forecast and trend charts",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
