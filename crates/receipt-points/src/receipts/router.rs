use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Receipt, ReceiptId};
use super::service::ReceiptService;
use super::store::PointsStore;

#[derive(Debug, Serialize)]
pub(crate) struct ProcessReceiptResponse {
    pub(crate) id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReceiptPointsResponse {
    pub(crate) points: u64,
}

/// Router builder exposing the receipt processing and points endpoints.
/// Malformed request bodies are rejected by the `Json` extractor before the
/// engine runs.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: PointsStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:receipt_id/points", get(points_handler::<S>))
        .with_state(service)
}

pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    axum::Json(receipt): axum::Json<Receipt>,
) -> Response
where
    S: PointsStore + 'static,
{
    match service.process(&receipt) {
        Ok((id, _points)) => {
            let body = ProcessReceiptResponse { id: id.0 };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    S: PointsStore + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.points(&id) {
        Ok(Some(points)) => {
            let body = ReceiptPointsResponse { points };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "error": "no receipt found for that id",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
