//! Show routes

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, Response},
    routing::get,
    Form, Router,
};
use tracing::{error, warn};

use super::{html, read_form};
use crate::db::shows as show_db;
use crate::forms::ShowForm;
use crate::services::build_show_listings;
use crate::ui::pages::home_page;
use crate::ui::shows::{show_form_page, show_list_page};
use crate::ui::Notice;
use crate::{ApiResult, AppState};

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let rows = show_db::list_shows(&state.db).await?;
    Ok(Html(show_list_page(&build_show_listings(rows))))
}

/// GET /shows/create
pub async fn create_show_form(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render_form(&state, &ShowForm::default(), None).await.map(Html)
}

/// POST /shows/create
///
/// Malformed input and references to missing records re-render the form
/// with 422; nothing is written in either case.
pub async fn create_show_submission(
    State(state): State<AppState>,
    payload: Result<Form<ShowForm>, FormRejection>,
) -> ApiResult<Response> {
    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => {
            let page = render_form(&state, &ShowForm::default(), Some(&notice)).await?;
            return Ok(html(status, page));
        }
    };

    let show = match form.validate() {
        Ok(show) => show,
        Err(err) => {
            warn!(error = %err, "Show form rejected");
            let notice = Notice::error(format!("Show could not be listed: {}", err));
            let page = render_form(&state, &form, Some(&notice)).await?;
            return Ok(html(StatusCode::UNPROCESSABLE_ENTITY, page));
        }
    };

    match show_db::create_show(&state.db, &show).await {
        Ok(_) => {
            let notice = Notice::success("Show was successfully listed!");
            Ok(html(StatusCode::OK, home_page(Some(&notice))))
        }
        Err(err) if err.is_user_error() => {
            warn!(error = %err, "Show booking rejected");
            let notice = Notice::error(format!("Show could not be listed: {}", err));
            let page = render_form(&state, &form, Some(&notice)).await?;
            Ok(html(StatusCode::UNPROCESSABLE_ENTITY, page))
        }
        Err(err) => {
            error!(error = %err, "Failed to create show");
            let notice = Notice::error("An error occurred. Show could not be listed.");
            Ok(html(StatusCode::INTERNAL_SERVER_ERROR, home_page(Some(&notice))))
        }
    }
}

async fn render_form(
    state: &AppState,
    form: &ShowForm,
    notice: Option<&Notice>,
) -> ApiResult<String> {
    let venues = show_db::venue_choices(&state.db).await?;
    let artists = show_db::artist_choices(&state.db).await?;
    Ok(show_form_page(form, &venues, &artists, notice))
}

/// Build show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route(
            "/shows/create",
            get(create_show_form).post(create_show_submission),
        )
}
