use crate::env_variable_utils::{is_analytics_enabled, BACKEND_URL};
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TrackEvent {
    pub event: String,
    pub properties: Value,
}

/// Records a user interaction. Delivery is fire-and-forget.
pub fn track(event: impl Into<String>, properties: Value) {
    let event = TrackEvent {
        event: event.into(),
        properties,
    };
    log::info!("track: {} {}", event.event, event.properties);

    if !is_analytics_enabled() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let url = format!("{}/analytics", &*BACKEND_URL);
        let request = match Request::post(&url).json(&event) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("Failed to encode analytics event: {e}");
                return;
            }
        };
        match request.send().await {
            Ok(response) if !response.ok() => {
                log::warn!("Analytics sink rejected event: HTTP {}", response.status())
            }
            Err(e) => log::warn!("Failed to send analytics event: {e}"),
            _ => {}
        }
    });
}
