use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::{convert_entries, generate, GeneratedFragments};
use crate::models::{ConvertedEntry, TargetFormat};
use crate::settings::Settings;

/// Query parameters for fragment generation
#[derive(Deserialize, Debug, Default, Clone)]
pub struct FragmentQuery {
    /// Subscription URLs to convert (pipe separated)
    pub url: Option<String>,
    /// Target format
    pub target: Option<String>,
    /// Provider refresh interval in seconds
    pub interval: Option<u32>,
}

/// JSON response body for the structured endpoint
#[derive(Serialize, Debug)]
pub struct FragmentsResponse {
    pub target: &'static str,
    pub entries: Vec<ConvertedEntry>,
    pub fragments: GeneratedFragments,
}

fn run_generation(
    req: &HttpRequest,
    query: &FragmentQuery,
) -> Result<FragmentsResponse, HttpResponse> {
    let global = Settings::current();

    let target_token = query
        .target
        .clone()
        .unwrap_or_else(|| global.default_target.clone());
    let target = match TargetFormat::from_str(&target_token) {
        Some(target) => target,
        None => return Err(HttpResponse::BadRequest().body("Invalid target parameter")),
    };

    let urls: Vec<String> = match query.url.as_deref() {
        Some(url) => url.split('|').map(|s| s.to_owned()).collect(),
        None => return Err(HttpResponse::BadRequest().body("Missing url parameter")),
    };

    // Rewritten URLs point back at the host serving this request
    let connection_info = req.connection_info();
    let origin = format!("{}://{}", connection_info.scheme(), connection_info.host());

    let mut config = global.fragment_config();
    if let Some(interval) = query.interval {
        config.refresh_interval = interval;
    }

    let entries = convert_entries(&urls, &origin, target);
    let fragments = generate(&entries, target, &config);

    Ok(FragmentsResponse {
        target: target.as_str(),
        entries,
        fragments,
    })
}

/// Handler returning the combined fragment as plain text
pub async fn fragments_handler(req: HttpRequest, query: web::Query<FragmentQuery>) -> HttpResponse {
    debug!("Received fragments request: {:?}", query);

    match run_generation(&req, &query) {
        Ok(response) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(response.fragments.combined),
        Err(response) => response,
    }
}

/// Handler returning entries and fragments as JSON
pub async fn fragments_json_handler(
    req: HttpRequest,
    query: web::Query<FragmentQuery>,
) -> HttpResponse {
    debug!("Received fragments JSON request: {:?}", query);

    match run_generation(&req, &query) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(response) => response,
    }
}

/// Register the API endpoints with Actix Web
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/fragments", web::get().to(fragments_handler))
        .route("/api/fragments/json", web::get().to(fragments_json_handler));
}
