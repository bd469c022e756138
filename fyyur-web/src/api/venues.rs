//! Venue routes
//!
//! Listing, search and detail pages, plus create, edit and delete
//! submissions.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{Html, Response},
    routing::{get, post},
    Form, Router,
};
use fyyur_common::time;
use tracing::{error, info, warn};

use super::{html, parse_id, read_form};
use crate::db::venues as venue_db;
use crate::forms::{SearchForm, VenueForm};
use crate::models::SearchResults;
use crate::services::{build_venue_detail, group_by_area};
use crate::ui::pages::home_page;
use crate::ui::venues::{venue_detail_page, venue_form_page, venue_list_page, venue_search_page};
use crate::ui::{FormMode, Notice};
use crate::{ApiError, ApiResult, AppState};

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let rows = venue_db::list_venues_with_upcoming(&state.db, time::now()).await?;
    Ok(Html(venue_list_page(&group_by_area(rows))))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    payload: Result<Form<SearchForm>, FormRejection>,
) -> ApiResult<Response> {
    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => return Ok(html(status, home_page(Some(&notice)))),
    };
    let data = venue_db::search_venues(&state.db, &form.search_term, time::now()).await?;
    let results = SearchResults::new(form.search_term, data);
    info!(term = %results.search_term, count = results.count, "Venue search");
    Ok(html(StatusCode::OK, venue_search_page(&results)))
}

/// GET /venues/{id}
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> ApiResult<Html<String>> {
    let venue_id = parse_id("Venue", &venue_id)?;
    Ok(Html(render_detail(&state, venue_id, None).await?))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(venue_form_page(&VenueForm::default(), FormMode::Create, None))
}

/// POST /venues/create
pub async fn create_venue_submission(
    State(state): State<AppState>,
    payload: Result<Form<VenueForm>, FormRejection>,
) -> Response {
    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => {
            return html(
                status,
                venue_form_page(&VenueForm::default(), FormMode::Create, Some(&notice)),
            )
        }
    };

    let venue = match form.validate() {
        Ok(venue) => venue,
        Err(err) => {
            warn!(error = %err, "Venue form rejected");
            let notice = Notice::error(format!("Venue could not be listed: {}", err));
            return html(
                StatusCode::UNPROCESSABLE_ENTITY,
                venue_form_page(&form, FormMode::Create, Some(&notice)),
            );
        }
    };

    match venue_db::create_venue(&state.db, &venue).await {
        Ok(_) => {
            let notice = Notice::success(format!("Venue {} was successfully listed!", venue.name));
            html(StatusCode::OK, home_page(Some(&notice)))
        }
        Err(err) => {
            error!(error = %err, name = %venue.name, "Failed to create venue");
            let notice = Notice::error(format!(
                "An error occurred. Venue {} could not be listed.",
                venue.name
            ));
            html(StatusCode::INTERNAL_SERVER_ERROR, home_page(Some(&notice)))
        }
    }
}

/// GET /venues/{id}/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> ApiResult<Html<String>> {
    let venue_id = parse_id("Venue", &venue_id)?;
    let venue = venue_db::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Venue {}", venue_id)))?;

    Ok(Html(venue_form_page(
        &VenueForm::from(&venue),
        FormMode::Edit(venue_id),
        None,
    )))
}

/// POST /venues/{id}/edit
pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    payload: Result<Form<VenueForm>, FormRejection>,
) -> ApiResult<Response> {
    let venue_id = parse_id("Venue", &venue_id)?;
    let mode = FormMode::Edit(venue_id);

    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => {
            return Ok(html(
                status,
                venue_form_page(&VenueForm::default(), mode, Some(&notice)),
            ))
        }
    };

    let venue = match form.validate() {
        Ok(venue) => venue,
        Err(err) => {
            warn!(venue_id, error = %err, "Venue edit rejected");
            let notice = Notice::error(format!("Venue was not updated: {}", err));
            return Ok(html(
                StatusCode::UNPROCESSABLE_ENTITY,
                venue_form_page(&form, mode, Some(&notice)),
            ));
        }
    };

    match venue_db::update_venue(&state.db, venue_id, &venue).await {
        Ok(()) => {
            let notice = Notice::success(format!("Venue {} was successfully updated!", venue.name));
            Ok(html(
                StatusCode::OK,
                render_detail(&state, venue_id, Some(&notice)).await?,
            ))
        }
        Err(err) if err.is_user_error() => Err(err.into()),
        Err(err) => {
            error!(venue_id, error = %err, "Failed to update venue");
            let notice = Notice::error(format!(
                "An error occurred. Venue {} was not updated.",
                venue.name
            ));
            Ok(html(
                StatusCode::INTERNAL_SERVER_ERROR,
                venue_form_page(&form, mode, Some(&notice)),
            ))
        }
    }
}

/// DELETE /venues/{id}
///
/// Removes the venue and its shows, then renders the home page with the
/// outcome.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> ApiResult<Response> {
    let venue_id = parse_id("Venue", &venue_id)?;

    let response = match venue_db::delete_venue(&state.db, venue_id).await {
        Ok(name) => {
            let notice = Notice::success(format!("Venue {} was successfully deleted.", name));
            html(StatusCode::OK, home_page(Some(&notice)))
        }
        Err(fyyur_common::Error::NotFound(_)) => {
            warn!(venue_id, "Delete of unknown venue");
            let notice = Notice::error(format!("Venue {} does not exist.", venue_id));
            html(StatusCode::NOT_FOUND, home_page(Some(&notice)))
        }
        Err(err) => {
            error!(venue_id, error = %err, "Failed to delete venue");
            let notice = Notice::error(format!(
                "An error occurred. Venue {} could not be deleted.",
                venue_id
            ));
            html(StatusCode::INTERNAL_SERVER_ERROR, home_page(Some(&notice)))
        }
    };

    Ok(response)
}

async fn render_detail(
    state: &AppState,
    venue_id: i64,
    notice: Option<&Notice>,
) -> ApiResult<String> {
    let venue = venue_db::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Venue {}", venue_id)))?;
    let shows = venue_db::list_venue_shows(&state.db, venue_id).await?;

    let detail = build_venue_detail(venue, shows, time::now());
    Ok(venue_detail_page(&detail, notice))
}

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route(
            "/venues/create",
            get(create_venue_form).post(create_venue_submission),
        )
        .route("/venues/:venue_id", get(show_venue).delete(delete_venue))
        .route(
            "/venues/:venue_id/edit",
            get(edit_venue_form).post(edit_venue_submission),
        )
}
