use crate::env_variable_utils::BACKEND_URL;
use crate::models::{CoursePayload, CourseSummary, ErrorResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {e}"));
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    // Try to parse as structured error response first
    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(error_response) => Err(error_response.message),
        Err(_) => Err(format!("Request failed: HTTP {status} - {text}")),
    }
}

pub async fn fetch_catalog() -> Result<Vec<CourseSummary>, String> {
    let url = format!("{}/courses", &*BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;

    read_json(response).await
}

pub async fn fetch_course(slug: &str) -> Result<CoursePayload, String> {
    let url = format!("{}/courses/{}", &*BACKEND_URL, urlencoding::encode(slug));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to connect to backend: {e}"))?;

    read_json(response).await
}

/// Fires the bookmark toggle and forgets about it. The caller has already
/// flipped its local state, so failures are only logged.
pub fn toggle_favorite(toggle_url: String) {
    wasm_bindgen_futures::spawn_local(async move {
        match Request::post(&toggle_url).send().await {
            Ok(response) if !response.ok() => {
                log::warn!("Bookmark toggle failed: HTTP {}", response.status())
            }
            Err(e) => log::warn!("Bookmark toggle failed: {e}"),
            _ => {}
        }
    });
}
