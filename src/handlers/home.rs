use axum::{extract::State, http::StatusCode, response::Html};
use model::Month;
use tracing::{debug, instrument};

use crate::schemas::AppState;
use crate::views::{HomePage, render_page};

/// Home page with the prediction form, populated with the product and
/// volume labels known to the dataset.
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "Prediction form with known products and volumes", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let store = state.store.read().await;
    let products = store.products();
    let volumes = store.volumes();
    debug!(
        products = products.len(),
        volumes = volumes.len(),
        "Rendering home page"
    );

    let page = HomePage {
        products,
        volumes,
        months: Month::ALL.iter().map(|month| month.name()).collect(),
        forecast_year: state.config.forecast_year,
    };
    render_page(&page)
}
