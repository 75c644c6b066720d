use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use serde_json::{Map, Value};
use std::io::Cursor;

/// A course as stored in the catalog. Only the fields the backend acts on
/// are typed, everything else is passed through to the frontend untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub favorited: bool,
    pub toggle_favorite_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub course: CourseRecord,
    #[serde(default)]
    pub lessons: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CourseSummary {
    pub slug: String,
    pub title: String,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FavoriteResponse {
    pub slug: String,
    pub favorited: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub event: String,
    #[serde(default)]
    pub properties: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsAck {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip)]
    pub status: Status,
}

impl ErrorResponse {
    pub fn course_not_found(slug: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("No course with slug '{slug}'"),
            status: Status::NotFound,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.into(),
            status: Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
