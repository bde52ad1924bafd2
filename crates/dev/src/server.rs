//! Preview server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use rand::Rng;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use atoll_common::{ProjectLayout, LISTEN_BANNER};

use crate::render;

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Root of the scaffolded project to serve.
    pub project_dir: PathBuf,

    /// Port to listen on; 0 picks an ephemeral port.
    pub port: u16,
}

struct DevState {
    styled: bool,
    static_dir: PathBuf,
}

const JOKES: &[&str] = &[
    "Why do Java developers often wear glasses? They can't C#.",
    "A SQL query walks into a bar, goes up to two tables and says: can I join you?",
    "Wasn't hard to crack Forrest Gump's password. 1forrest1.",
    "I love pressing the F5 key. It's refreshing.",
    "Called IT support and a chap from Australia came to fix my network connection. I asked: Do you come from a LAN down under?",
    "There are 10 types of people in the world. Those who understand binary and those who don't.",
    "Why are assembly programmers often wet? They work below C level.",
    "My favourite computer based band is the Black IPs.",
    "What programme do you use to predict the music tastes of former US presidential candidates? An Al Gore Rhythm.",
    "An SEO expert walked into a bar, pub, inn, tavern, hostelry, public house.",
];

/// Build the preview router for a validated project.
pub fn router(layout: &ProjectLayout) -> Router {
    let state = Arc::new(DevState {
        styled: layout.has_styling(),
        static_dir: layout.static_dir(),
    });

    Router::new()
        .route("/", get(index_handler))
        .route("/api/joke", get(joke_handler))
        .route("/:name", get(greet_handler))
        .fallback_service(ServeDir::new(layout.static_dir()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<Arc<DevState>>) -> Html<String> {
    Html(render::index_page(state.styled))
}

/// Dynamic greeting route. Static assets shadow it: `/logo.svg` must serve
/// the project's file, not greet "logo.svg".
async fn greet_handler(
    State(state): State<Arc<DevState>>,
    Path(name): Path<String>,
) -> Response {
    let candidate = state.static_dir.join(&name);
    if candidate.is_file() {
        return match tokio::fs::read(&candidate).await {
            Ok(bytes) => {
                ([(header::CONTENT_TYPE, content_type(&name))], bytes).into_response()
            }
            Err(_) => StatusCode::NOT_FOUND.into_response(),
        };
    }
    Html(render::greet_page(&name)).into_response()
}

async fn joke_handler() -> &'static str {
    let index = rand::thread_rng().gen_range(0..JOKES.len());
    JOKES[index]
}

fn content_type(path: &str) -> &'static str {
    if path.ends_with(".js") {
        "application/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".html") {
        "text/html"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".ico") {
        "image/x-icon"
    } else {
        "application/octet-stream"
    }
}

/// Validate the project, bind, announce readiness on stdout, and serve.
pub async fn serve(cfg: DevServerConfig) -> anyhow::Result<()> {
    let layout = ProjectLayout::new(&cfg.project_dir);
    layout.validate()?;

    info!(
        project = %layout.root().display(),
        styled = layout.has_styling(),
        "serving project"
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    // The readiness signal watched by callers; logs stay on stderr.
    println!("{LISTEN_BANNER}{local_addr}");

    axum::serve(listener, router(&layout)).await?;
    Ok(())
}
