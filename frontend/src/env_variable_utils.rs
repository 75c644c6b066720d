use lazy_static::lazy_static;
use wasm_bindgen::JsValue;
use web_sys::window;

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
    pub static ref DEPLOYMENT_URL: String = get_deployment_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &JsValue::from_str("ENV_CONFIG")).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &JsValue::from_str(key)).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

fn get_flag(key: &str) -> bool {
    get_env_var(key)
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}

pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL").unwrap_or_else(|| "http://localhost:8000".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "egghead course collections".to_string())
}

/// Public origin of the site, used to build canonical URLs.
pub fn get_deployment_url() -> String {
    get_env_var("DEPLOYMENT_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "https://egghead.io".to_string())
}

/// Base for generated social preview images; the course slug is appended.
pub fn get_og_image_base_url() -> String {
    get_env_var("OG_IMAGE_BASE_URL")
        .unwrap_or_else(|| "https://og-image-react-egghead.vercel.app/playlists".to_string())
}

pub fn is_analytics_enabled() -> bool {
    get_flag("ANALYTICS_ENABLED")
}

pub fn is_debug_mode() -> bool {
    get_flag("DEBUG_MODE")
}
