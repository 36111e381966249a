use anyhow::{Context, Result};
use std::time::Duration;

use tracing::{error, info};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{log_requests, metrics::metrics_handler, state::*, ServerConfig};
use crate::library::{
    BookRequest, BookResponse, DeleteBookResponse, LibraryError, ListBooksResponse,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

#[derive(Serialize)]
struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        let status = match self {
            LibraryError::AlreadyExists(_) => StatusCode::CONFLICT,
            LibraryError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code(),
        };
        (status, Json(body)).into_response()
    }
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

async fn create_book(
    State(library): State<GuardedLibraryService>,
    Json(body): Json<BookRequest>,
) -> Result<impl IntoResponse, LibraryError> {
    let book = library.create_book(body.book)?;
    Ok((StatusCode::CREATED, Json(BookResponse { book })))
}

async fn get_book(
    State(library): State<GuardedLibraryService>,
    Path(id): Path<i32>,
) -> Result<Json<BookResponse>, LibraryError> {
    let book = library.get_book(id)?;
    Ok(Json(BookResponse { book }))
}

async fn update_book(
    State(library): State<GuardedLibraryService>,
    Json(body): Json<BookRequest>,
) -> Result<Json<BookResponse>, LibraryError> {
    let book = library.update_book(body.book)?;
    Ok(Json(BookResponse { book }))
}

async fn delete_book(
    State(library): State<GuardedLibraryService>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteBookResponse>, LibraryError> {
    let success = library.delete_book(id)?;
    Ok(Json(DeleteBookResponse { success }))
}

async fn list_books(
    State(library): State<GuardedLibraryService>,
) -> Result<Json<ListBooksResponse>, LibraryError> {
    let books = library.list_books()?;
    Ok(Json(ListBooksResponse { books }))
}

pub fn make_app(config: ServerConfig, library: GuardedLibraryService) -> Router {
    let state = ServerState::new(config, library);

    let book_routes: Router = Router::new()
        .route("/", get(list_books).post(create_book).put(update_book))
        .route("/{id}", get(get_book).delete(delete_book))
        .with_state(state.clone());

    Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/v1/books", book_routes)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

pub fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}

pub async fn run_server(config: ServerConfig, library: GuardedLibraryService) -> Result<()> {
    let address = format!("{}:{}", config.host, config.port);
    let metrics_address = format!("{}:{}", config.host, config.metrics_port);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to listen on {}", address))?;
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_address)
        .await
        .with_context(|| format!("Failed to listen on {}", metrics_address))?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(metrics_listener, make_metrics_app()).await {
            error!("Metrics server failed: {}", e);
        }
    });

    let app = make_app(config, library);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
