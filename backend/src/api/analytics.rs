use crate::models::{AnalyticsAck, AnalyticsEvent, ErrorResponse};
use log::info;
use rocket::post;
use rocket::serde::json::Json;

/// Sink for the frontend's click tracking. Events are only logged.
#[post("/", data = "<event>")]
pub async fn track_event(event: Json<AnalyticsEvent>) -> Result<Json<AnalyticsAck>, ErrorResponse> {
    if event.event.trim().is_empty() {
        return Err(ErrorResponse::bad_request("Event name must not be empty"));
    }

    info!("analytics: {} {}", event.event, event.properties);
    Ok(Json(AnalyticsAck { success: true }))
}
