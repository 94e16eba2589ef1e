use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

/// Home page with the prediction form.
#[derive(Template, Debug)]
#[template(path = "home.html")]
pub struct HomePage {
    pub products: Vec<String>,
    pub volumes: Vec<String>,
    pub months: Vec<&'static str>,
    pub forecast_year: i32,
}

/// One entry of the month dropdown, with the pre-selection resolved ahead
/// of rendering.
#[derive(Debug)]
pub struct MonthOption {
    pub name: &'static str,
    pub selected: bool,
}

/// Data-entry form, optionally pre-filled from query parameters.
#[derive(Template, Debug)]
#[template(path = "add_data.html")]
pub struct AddDataPage {
    pub product: String,
    pub volume: String,
    pub products: Vec<String>,
    pub volumes: Vec<String>,
    pub months: Vec<MonthOption>,
}

/// Shared result page for predictions, confirmations, and errors.
#[derive(Template, Debug)]
#[template(path = "result.html")]
pub struct ResultPage {
    pub prediction: String,
    /// Inline chart markup; empty when there is nothing to chart.
    pub chart_html: String,
}

impl ResultPage {
    /// A result page carrying only a text message (errors, confirmations).
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            prediction: text.into(),
            chart_html: String::new(),
        }
    }
}

/// Render a template to an HTML response, logging render failures.
pub fn render_page<T: Template>(page: &T) -> Result<Html<String>, StatusCode> {
    match page.render() {
        Ok(body) => Ok(Html(body)),
        Err(e) => {
            error!("Failed to render template: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Result page with only a message, as a full response.
pub fn message_page(text: impl Into<String>) -> Result<Response, StatusCode> {
    Ok(render_page(&ResultPage::message(text))?.into_response())
}
