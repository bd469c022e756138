//! Artist routes

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
use crate::db::artists as artist_db;
use crate::forms::{ArtistForm, SearchForm};
use crate::models::SearchResults;
use crate::services::build_artist_detail;
use crate::ui::artists::{artist_detail_page, artist_form_page, artist_list_page, artist_search_page};
use crate::ui::pages::home_page;
use crate::ui::{FormMode, Notice};
use crate::{ApiError, ApiResult, AppState};

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let artists = artist_db::list_artists(&state.db, time::now()).await?;
    Ok(Html(artist_list_page(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    payload: Result<Form<SearchForm>, FormRejection>,
) -> ApiResult<Response> {
    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => return Ok(html(status, home_page(Some(&notice)))),
    };
    let data = artist_db::search_artists(&state.db, &form.search_term, time::now()).await?;
    let results = SearchResults::new(form.search_term, data);
    info!(term = %results.search_term, count = results.count, "Artist search");
    Ok(html(StatusCode::OK, artist_search_page(&results)))
}

/// GET /artists/{id}
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> ApiResult<Html<String>> {
    let artist_id = parse_id("Artist", &artist_id)?;
    Ok(Html(render_detail(&state, artist_id, None).await?))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(artist_form_page(&ArtistForm::default(), FormMode::Create, None))
}

/// POST /artists/create
pub async fn create_artist_submission(
    State(state): State<AppState>,
    payload: Result<Form<ArtistForm>, FormRejection>,
) -> Response {
    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => {
            return html(
                status,
                artist_form_page(&ArtistForm::default(), FormMode::Create, Some(&notice)),
            )
        }
    };

    let artist = match form.validate() {
        Ok(artist) => artist,
        Err(err) => {
            warn!(error = %err, "Artist form rejected");
            let notice = Notice::error(format!("Artist could not be listed: {}", err));
            return html(
                StatusCode::UNPROCESSABLE_ENTITY,
                artist_form_page(&form, FormMode::Create, Some(&notice)),
            );
        }
    };

    match artist_db::create_artist(&state.db, &artist).await {
        Ok(_) => {
            let notice =
                Notice::success(format!("Artist {} was successfully listed!", artist.name));
            html(StatusCode::OK, home_page(Some(&notice)))
        }
        Err(err) => {
            error!(error = %err, name = %artist.name, "Failed to create artist");
            let notice = Notice::error(format!(
                "An error occurred. Artist {} could not be listed.",
                artist.name
            ));
            html(StatusCode::INTERNAL_SERVER_ERROR, home_page(Some(&notice)))
        }
    }
}

/// GET /artists/{id}/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> ApiResult<Html<String>> {
    let artist_id = parse_id("Artist", &artist_id)?;
    let artist = artist_db::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artist {}", artist_id)))?;

    Ok(Html(artist_form_page(
        &ArtistForm::from(&artist),
        FormMode::Edit(artist_id),
        None,
    )))
}

/// POST /artists/{id}/edit
pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    payload: Result<Form<ArtistForm>, FormRejection>,
) -> ApiResult<Response> {
    let artist_id = parse_id("Artist", &artist_id)?;
    let mode = FormMode::Edit(artist_id);

    let form = match read_form(payload) {
        Ok(form) => form,
        Err((status, notice)) => {
            return Ok(html(
                status,
                artist_form_page(&ArtistForm::default(), mode, Some(&notice)),
            ))
        }
    };

    let artist = match form.validate() {
        Ok(artist) => artist,
        Err(err) => {
            warn!(artist_id, error = %err, "Artist edit rejected");
            let notice = Notice::error(format!("Artist was not updated: {}", err));
            return Ok(html(
                StatusCode::UNPROCESSABLE_ENTITY,
                artist_form_page(&form, mode, Some(&notice)),
            ));
        }
    };

    match artist_db::update_artist(&state.db, artist_id, &artist).await {
        Ok(()) => {
            let notice =
                Notice::success(format!("Artist {} was successfully updated!", artist.name));
            Ok(html(
                StatusCode::OK,
                render_detail(&state, artist_id, Some(&notice)).await?,
            ))
        }
        Err(err) if err.is_user_error() => Err(err.into()),
        Err(err) => {
            error!(artist_id, error = %err, "Failed to update artist");
            let notice = Notice::error(format!(
                "An error occurred. Artist {} was not updated.",
                artist.name
            ));
            Ok(html(
                StatusCode::INTERNAL_SERVER_ERROR,
                artist_form_page(&form, mode, Some(&notice)),
            ))
        }
    }
}

async fn render_detail(
    state: &AppState,
    artist_id: i64,
    notice: Option<&Notice>,
) -> ApiResult<String> {
    let artist = artist_db::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artist {}", artist_id)))?;
    let shows = artist_db::list_artist_shows(&state.db, artist_id).await?;

    let detail = build_artist_detail(artist, shows, time::now());
    Ok(artist_detail_page(&detail, notice))
}

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route(
            "/artists/create",
            get(create_artist_form).post(create_artist_submission),
        )
        .route("/artists/:artist_id", get(show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(edit_artist_form).post(edit_artist_submission),
        )
}
