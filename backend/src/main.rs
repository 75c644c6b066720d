#[macro_use]
extern crate rocket;

mod api;
mod config;
mod models;
mod services;

use crate::config::{create_app_state, create_cors, init_logger, load_environment};
use crate::services::catalog_service::Catalog;
use rocket::{Build, Rocket};
use std::collections::HashSet;
use tokio::sync::RwLock;

pub struct AppState {
    pub catalog: Catalog,
    pub favorites: RwLock<HashSet<String>>,
    pub public_url: String,
}

impl AppState {
    pub fn new(catalog: Catalog, public_url: String) -> Self {
        let favorites = RwLock::new(catalog.initial_favorites());
        Self {
            catalog,
            favorites,
            public_url,
        }
    }
}

#[get("/")]
fn index() -> &'static str {
    "Course collection backend"
}

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![index])
        .mount(
            "/courses",
            routes![api::list_courses, api::get_course, api::toggle_favorite],
        )
        .mount("/analytics", routes![api::track_event])
}

#[launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    let state = match create_app_state() {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to initialise backend: {e:?}");
            std::process::exit(1);
        }
    };
    let cors = match create_cors() {
        Ok(cors) => cors,
        Err(e) => {
            log::error!("{e:?}");
            std::process::exit(1);
        }
    };

    build_rocket(state).attach(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogEntry, CourseSummary, FavoriteResponse};
    use rocket::http::{ContentType, Status};
    use rocket::local::blocking::Client;
    use serde_json::{json, Value};

    fn client() -> Client {
        let entries: Vec<CatalogEntry> = serde_json::from_value(json!([
            {
                "course": {
                    "slug": "practical-git",
                    "title": "Practical Git",
                    "path": "/courses/practical-git",
                    "download_url": "https://example.com/git.zip"
                },
                "lessons": [{"slug": "init", "title": "git init", "path": "/lessons/init"}]
            },
            {
                "course": {
                    "slug": "cloudflare-workers",
                    "title": "Cloudflare Workers",
                    "path": "/playlists/cloudflare-workers",
                    "favorited": true,
                    "toggle_favorite_url": "https://api.example.com/fav/cf"
                }
            }
        ]))
        .unwrap();
        let catalog = Catalog::from_entries(entries).unwrap();
        let state = AppState::new(catalog, "http://localhost:8000".to_string());
        Client::tracked(build_rocket(state)).expect("valid rocket instance")
    }

    #[test]
    fn lists_courses() {
        let client = client();
        let response = client.get("/courses").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let courses: Vec<CourseSummary> = response.into_json().unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].slug, "practical-git");
    }

    #[test]
    fn returns_course_payload_with_pass_through_fields() {
        let client = client();
        let response = client.get("/courses/practical-git").dispatch();
        assert_eq!(response.status(), Status::Ok);

        let payload: Value = response.into_json().unwrap();
        assert_eq!(payload["course"]["download_url"], "https://example.com/git.zip");
        assert_eq!(payload["course"]["favorited"], false);
        assert_eq!(
            payload["course"]["toggle_favorite_url"],
            "http://localhost:8000/courses/practical-git/favorite"
        );
        assert_eq!(payload["lessons"][0]["slug"], "init");
    }

    #[test]
    fn unknown_course_is_404() {
        let client = client();
        let response = client.get("/courses/nope").dispatch();
        assert_eq!(response.status(), Status::NotFound);

        let body: Value = response.into_json().unwrap();
        assert_eq!(body["error"], "not_found");
        assert_eq!(
            client.post("/courses/nope/favorite").dispatch().status(),
            Status::NotFound
        );
    }

    #[test]
    fn favorite_toggle_round_trip() {
        let client = client();

        let toggled: FavoriteResponse = client
            .post("/courses/practical-git/favorite")
            .dispatch()
            .into_json()
            .unwrap();
        assert!(toggled.favorited);

        let payload: Value = client
            .get("/courses/practical-git")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(payload["course"]["favorited"], true);

        let toggled: FavoriteResponse = client
            .post("/courses/practical-git/favorite")
            .dispatch()
            .into_json()
            .unwrap();
        assert!(!toggled.favorited);
    }

    #[test]
    fn catalog_favorites_and_toggle_urls_are_kept() {
        let client = client();
        let payload: Value = client
            .get("/courses/cloudflare-workers")
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(payload["course"]["favorited"], true);
        assert_eq!(
            payload["course"]["toggle_favorite_url"],
            "https://api.example.com/fav/cf"
        );
        assert_eq!(payload["lessons"], json!([]));
    }

    #[test]
    fn analytics_accepts_named_events() {
        let client = client();
        let response = client
            .post("/analytics")
            .header(ContentType::JSON)
            .body(r#"{"event": "clicked add bookmark", "properties": {"course": "practical-git"}}"#)
            .dispatch();
        assert_eq!(response.status(), Status::Ok);

        let response = client
            .post("/analytics")
            .header(ContentType::JSON)
            .body(r#"{"event": "  "}"#)
            .dispatch();
        assert_eq!(response.status(), Status::BadRequest);
    }
}
