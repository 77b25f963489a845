use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_FIXTURES: &str = "./fixtures/realtime";

#[derive(Debug, Deserialize)]
struct RealtimeQuery {
    id: String,
    direction_id: u8,
}

struct Fixtures {
    dir: PathBuf,
}

impl Fixtures {
    /// Fixture file for a route direction; ids are restricted to a safe charset
    fn path_for(&self, query: &RealtimeQuery) -> Option<PathBuf> {
        let safe = !query.id.is_empty()
            && query
                .id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe || query.direction_id > 1 {
            return None;
        }
        Some(self.dir.join(format!("{}-{}.json", query.id, query.direction_id)))
    }
}

fn read_fixture(path: &Path) -> serde_json::Value {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|body| serde_json::from_str(&body).map_err(|e| e.to_string()));

    match parsed {
        Ok(value) => value,
        Err(e) => {
            log::warn!("No realtime fixture at {}: {e}", path.display());
            serde_json::json!({})
        }
    }
}

#[get("/schedules/line_api/realtime")]
async fn realtime(fixtures: web::Data<Fixtures>, query: web::Query<RealtimeQuery>) -> HttpResponse {
    let body = fixtures
        .path_for(&query)
        .map_or_else(|| serde_json::json!({}), |path| read_fixture(&path));
    HttpResponse::Ok().json(body)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let fixtures_dir = env::var("REALTIME_FIXTURES").unwrap_or_else(|_| DEFAULT_FIXTURES.to_string());

    log::info!("Starting server on 0.0.0.0:{port}, realtime fixtures in {fixtures_dir}");

    let fixtures = web::Data::new(Fixtures {
        dir: PathBuf::from(fixtures_dir),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(fixtures.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(realtime)
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
