//! Order API Handlers
//!
//! Thin transport adapter: maps requests to engine calls and engine results
//! to status codes. The status-update and cancel endpoints answer with
//! plain-text bodies; their wording is part of the API contract.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{OrderItemCreate, OrderStatus};
use crate::orders::OrderResponse;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct StatusFilter {
    status: Option<OrderStatus>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    status: OrderStatus,
}

/// POST /api/orders — create an order from a list of item specs
pub async fn create(
    State(state): State<ServerState>,
    Json(items): Json<Vec<OrderItemCreate>>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let order = state.orders.create_order(items).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/:id — 404 with empty body when absent
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    match state.orders.get_order(&id).await? {
        Some(order) => Ok(Json(order).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// GET /api/orders?status= — all orders, or only those matching the filter
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = state.orders.list_orders(filter.status).await?;
    Ok(Json(orders))
}

/// PUT /api/orders/:id/status?status= — unconditional status overwrite
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(update): Query<StatusUpdate>,
) -> AppResult<Response> {
    let updated = state.orders.update_status(&id, update.status).await?;
    Ok(if updated {
        (
            StatusCode::OK,
            format!("Order updated to {}", update.status),
        )
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, "Order not found").into_response()
    })
}

/// POST /api/orders/:id/cancel — guarded PENDING → CANCELED transition
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let canceled = state.orders.cancel_order(&id).await?;
    Ok(if canceled {
        (StatusCode::OK, "Order canceled successfully").into_response()
    } else {
        (
            StatusCode::CONFLICT,
            "Cannot cancel this order (not pending or not found)",
        )
            .into_response()
    })
}
