use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use compute::{LOOKBACK_MONTHS, MonthRef, availability, calendar, forecast, trend};
use model::Month;
use tracing::{debug, info, instrument, warn};

use crate::helpers::chart::trend_chart_html;
use crate::helpers::forms::non_empty;
use crate::schemas::{AppState, PredictForm};
use crate::views::{ResultPage, message_page, render_page};

/// Predict sales for the requested month and show the historical trend.
///
/// The three months preceding the target must all have data for the
/// product/volume pair; otherwise the request redirects to the data-entry
/// form, pre-filled with the chronologically earliest missing month.
#[utoipa::path(
    post,
    path = "/predict",
    tag = "forecast",
    request_body(content = PredictForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Prediction result or validation message", body = String, content_type = "text/html"),
        (status = 303, description = "Redirect to the add-data form when prior months are missing"),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument(skip(state))]
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Result<Response, StatusCode> {
    let (product, volume, month_name, year_raw) = match (
        non_empty(form.product),
        non_empty(form.volume),
        non_empty(form.month),
        non_empty(form.year),
    ) {
        (Some(product), Some(volume), Some(month), Some(year)) => (product, volume, month, year),
        _ => {
            warn!("Prediction request with missing fields");
            return message_page("All fields are required.");
        }
    };

    let year: i32 = match year_raw.parse() {
        Ok(year) => year,
        Err(_) => return message_page("Year must be a valid number."),
    };

    let month: Month = match month_name.parse() {
        Ok(month) => month,
        Err(_) => return message_page(format!("Invalid month '{month_name}'.")),
    };

    if year != state.config.forecast_year {
        debug!(year, "Prediction requested outside the supported year");
        return message_page(format!(
            "Prediction is only available for {}.",
            state.config.forecast_year
        ));
    }

    let required = calendar::lookback(MonthRef::new(month, year), LOOKBACK_MONTHS);

    let store = state.store.read().await;
    let missing = availability::missing_periods(store.records(), &product, &volume, &required);
    if let Some(first_missing) = missing.first() {
        info!(%first_missing, %product, %volume, "Prior data missing, redirecting to data entry");
        let target = format!(
            "/add_data?product={}&volume={}&month={}",
            urlencoding::encode(&product),
            urlencoding::encode(&volume),
            first_missing.month
        );
        return Ok(Redirect::to(&target).into_response());
    }

    let mean = match forecast::predict(store.records(), &product, &volume, &required) {
        Ok(mean) => mean,
        Err(e) => {
            warn!("Prediction failed despite availability check: {}", e);
            return message_page(format!("Error: {e}"));
        }
    };

    let series = trend::trend_series(store.records(), &product, &volume);
    let chart_html = trend_chart_html(&series, &product, &volume);

    info!(%product, %volume, %month, year, mean, "Prediction computed");
    let page = ResultPage {
        prediction: format!(
            "Predicted sales for {product} ({volume}) in {month} {year}: {mean:.2}."
        ),
        chart_html,
    };
    Ok(render_page(&page)?.into_response())
}
