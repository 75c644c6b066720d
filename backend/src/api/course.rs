use crate::models::{CatalogEntry, CourseSummary, ErrorResponse, FavoriteResponse};
use crate::services::catalog_service;
use crate::AppState;
use log::info;
use rocket::serde::json::Json;
use rocket::{get, post, State};

#[get("/")]
pub async fn list_courses(state: &State<AppState>) -> Json<Vec<CourseSummary>> {
    let summaries = state.catalog.summaries();
    info!("Listing {} courses.", summaries.len());
    Json(summaries)
}

#[get("/<slug>")]
pub async fn get_course(
    state: &State<AppState>,
    slug: &str,
) -> Result<Json<CatalogEntry>, ErrorResponse> {
    let favorites = state.favorites.read().await;
    match state
        .catalog
        .course_payload(slug, &favorites, &state.public_url)
    {
        Some(entry) => Ok(Json(entry)),
        None => {
            log::warn!("Requested unknown course: {slug}");
            Err(ErrorResponse::course_not_found(slug))
        }
    }
}

#[post("/<slug>/favorite")]
pub async fn toggle_favorite(
    state: &State<AppState>,
    slug: &str,
) -> Result<Json<FavoriteResponse>, ErrorResponse> {
    if !state.catalog.contains(slug) {
        return Err(ErrorResponse::course_not_found(slug));
    }

    let mut favorites = state.favorites.write().await;
    let favorited = catalog_service::toggle_favorite(&mut favorites, slug);
    info!("Course {slug} favorited: {favorited}");

    Ok(Json(FavoriteResponse {
        slug: slug.to_string(),
        favorited,
    }))
}
