//! REST Route Handlers
//!
//! Every row of the operation table becomes a GET route. Query-string values
//! (and path segments such as `:query`) are coerced against the row's schema
//! before dispatch.

use crate::error::ApiError;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Map, Value};
use sleepwell_core::{OperationDescriptor, SleepService, OPERATIONS};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SleepService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: Arc<SleepService>) -> Self {
        Self {
            service,
            started_at: Instant::now(),
        }
    }
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let store = state.service.store();

    let mut endpoints = Map::new();
    endpoints.insert("health".to_string(), json!("/health"));
    for descriptor in OPERATIONS {
        endpoints.insert(descriptor.rpc_method.to_string(), json!(descriptor.rest_path));
    }

    Json(json!({
        "name": "sleepwell-quotes",
        "version": sleepwell_core::VERSION,
        "description": "Sleep quotes, tips and bedtime routines",
        "status": "running",
        "total_quotes": store.len(),
        "categories": store.categories(),
        "endpoints": endpoints,
        "operations": state.service.describe_operations(),
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": state.service.timestamp(),
        "quotes_loaded": state.service.store().len(),
        "uptime_seconds": state.started_at.elapsed().as_secs(),
    }))
}

/// Fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("no such endpoint, see / for the list of routes")
}

/// Rewrites bare 405 responses from the method routers into the JSON error body
pub async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = ApiError::method_not_allowed("only GET is supported on this route")
        .into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

type PathSegments = Result<Path<HashMap<String, String>>, PathRejection>;
type QueryPairs = Result<Query<HashMap<String, String>>, QueryRejection>;

/// Routes for every operation in the table
pub fn operation_routes() -> Router<AppState> {
    let mut router = Router::new();

    for descriptor in OPERATIONS {
        router = if descriptor.rest_path.contains(':') {
            router.route(
                descriptor.rest_path,
                get(
                    move |State(state): State<AppState>,
                          segments: PathSegments,
                          query: QueryPairs| async move {
                        run_with_path(&state, descriptor, segments, query)
                    },
                ),
            )
        } else {
            router.route(
                descriptor.rest_path,
                get(
                    move |State(state): State<AppState>, query: QueryPairs| async move {
                        run_with_query(&state, descriptor, query)
                    },
                ),
            )
        };
    }

    router
}

fn run_with_path(
    state: &AppState,
    descriptor: &'static OperationDescriptor,
    segments: PathSegments,
    query: QueryPairs,
) -> Result<Json<Value>, ApiError> {
    let Path(segments) = segments?;
    let Query(query) = query?;
    // Path segments win over query keys of the same name
    run(state, descriptor, query.into_iter().chain(segments))
}

fn run_with_query(
    state: &AppState,
    descriptor: &'static OperationDescriptor,
    query: QueryPairs,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    run(state, descriptor, query)
}

fn run<I>(
    state: &AppState,
    descriptor: &'static OperationDescriptor,
    pairs: I,
) -> Result<Json<Value>, ApiError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let started = Instant::now();

    let result = descriptor
        .coerce_and_validate(pairs)
        .and_then(|params| state.service.dispatch(descriptor.operation, params));

    match result {
        Ok(value) => {
            debug!(
                transport = "rest",
                path = descriptor.rest_path,
                operation = ?descriptor.operation,
                elapsed_us = started.elapsed().as_micros() as u64,
                "REST request completed"
            );
            Ok(Json(value))
        }
        Err(e) => {
            warn!(
                transport = "rest",
                path = descriptor.rest_path,
                operation = ?descriptor.operation,
                error = %e,
                "REST request rejected"
            );
            Err(e.into())
        }
    }
}
