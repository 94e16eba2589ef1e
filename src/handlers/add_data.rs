use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use model::Month;
use tracing::instrument;

use crate::schemas::{AddDataParams, AppState};
use crate::views::{AddDataPage, MonthOption, render_page};

/// Data-entry form, pre-filled from query parameters when the prediction
/// flow redirects here for a missing month.
#[utoipa::path(
    get,
    path = "/add_data",
    tag = "forecast",
    params(
        ("product" = Option<String>, Query, description = "Pre-filled product label"),
        ("volume" = Option<String>, Query, description = "Pre-filled volume label"),
        ("month" = Option<String>, Query, description = "Pre-filled month name"),
    ),
    responses(
        (status = 200, description = "Data-entry form", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn add_data(
    Query(params): Query<AddDataParams>,
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    let store = state.store.read().await;
    let preselected = params.month.unwrap_or_default();

    let page = AddDataPage {
        product: params.product.unwrap_or_default(),
        volume: params.volume.unwrap_or_default(),
        products: store.products(),
        volumes: store.volumes(),
        months: Month::ALL
            .iter()
            .map(|month| MonthOption {
                name: month.name(),
                selected: month.name() == preselected,
            })
            .collect(),
    };
    render_page(&page)
}
