use crate::services::catalog_service::{load_catalog, Catalog};
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use lazy_static::lazy_static;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use url::Url;

lazy_static! {
    pub static ref CATALOG_PATH: String =
        env::var("CATALOG_PATH").unwrap_or_else(|_| "data/catalog.json".to_string());
    pub static ref PUBLIC_URL: String =
        env::var("PUBLIC_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    pub static ref FRONTEND_ORIGIN: String =
        env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:8080".to_string());
}

pub fn init_logger() {
    Builder::new().filter_level(LevelFilter::Info).init();
    info!("Starting Rocket backend...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

/// Normalises the externally visible base URL used in generated links.
pub fn parse_public_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow::anyhow!("PUBLIC_URL must be http(s), got {raw}"));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

pub fn create_app_state() -> Result<AppState> {
    let public_url = parse_public_url(&PUBLIC_URL)?;
    info!("Loading course catalog from: {}", &*CATALOG_PATH);
    let catalog: Catalog = load_catalog(&CATALOG_PATH)?;
    info!("Loaded {} courses.", catalog.len());

    Ok(AppState::new(catalog, public_url))
}

pub fn create_cors() -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[FRONTEND_ORIGIN.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_is_normalised() {
        assert_eq!(
            parse_public_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert_eq!(
            parse_public_url("http://localhost:8000").unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn public_url_must_be_http() {
        assert!(parse_public_url("ftp://example.com").is_err());
        assert!(parse_public_url("not a url").is_err());
    }
}
