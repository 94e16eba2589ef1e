use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Response,
};
use model::{Month, SalesRecord};
use tracing::{error, info, instrument, warn};

use crate::helpers::forms::non_empty;
use crate::schemas::{AppState, SubmitDataForm};
use crate::views::message_page;

/// Handle submission of new sales data.
///
/// Appends one record and rewrites the dataset file before responding.
/// Validation failures never mutate stored data.
#[utoipa::path(
    post,
    path = "/submit_data",
    tag = "forecast",
    request_body(content = SubmitDataForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation or validation message", body = String, content_type = "text/html"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn submit_data(
    State(state): State<AppState>,
    Form(form): Form<SubmitDataForm>,
) -> Result<Response, StatusCode> {
    let (product, volume, month_name, base_sales_raw) = match (
        non_empty(form.product),
        non_empty(form.volume),
        non_empty(form.month),
        non_empty(form.base_sales),
    ) {
        (Some(product), Some(volume), Some(month), Some(base_sales)) => {
            (product, volume, month, base_sales)
        }
        _ => {
            warn!("Submission with missing fields");
            return message_page("All fields are required.");
        }
    };

    let base_sales: f64 = match base_sales_raw.parse() {
        Ok(value) => value,
        Err(_) => return message_page("Base Sales must be a valid number."),
    };

    let month: Month = match month_name.parse() {
        Ok(month) => month,
        Err(_) => return message_page(format!("Invalid month '{month_name}'.")),
    };

    // December belongs to the prior year of the two-year dataset window.
    let year = if month == Month::December {
        state.config.prior_year
    } else {
        state.config.forecast_year
    };

    let record = SalesRecord {
        year,
        month,
        product: product.clone(),
        base_sales,
        volume: volume.clone(),
    };

    let mut store = state.store.write().await;
    if let Err(e) = store.append(record) {
        error!("Failed to persist sales record: {}", e);
        return message_page(format!("Error: {e}"));
    }
    drop(store);

    info!(%product, %volume, %month, year, base_sales, "Sales record stored");
    message_page(format!(
        "Sales data for {month} {year} added successfully. You can now proceed with the prediction."
    ))
}
