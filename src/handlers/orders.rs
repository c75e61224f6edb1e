use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::order::Order;
use crate::errors::AppError;
use crate::AppOrderService;

// ── Envelopes ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderEnvelope {
    pub data: Order,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListEnvelope {
    pub data: Vec<Order>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Every stored order", body = OrderListEnvelope),
    ),
    tag = "orders"
)]
pub async fn list_orders(service: web::Data<AppOrderService>) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders()?;
    Ok(HttpResponse::Ok().json(OrderListEnvelope { data: orders }))
}

/// POST /orders
///
/// Requires `deliverTo`, `mobileNumber` and a non-empty `dishes` list whose
/// quantities are positive integers. The status defaults to `pending`.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderEnvelope,
    responses(
        (status = 201, description = "Order created", body = OrderEnvelope),
        (status = 400, description = "Missing or invalid field"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let order = service.create_order(&body)?;
    Ok(HttpResponse::Created().json(OrderEnvelope { data: order }))
}

/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderEnvelope),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = service.get_order(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(OrderEnvelope { data: order }))
}

/// PUT /orders/{order_id}
///
/// Replaces every field, status included. Delivered orders are rejected.
#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id"),
    ),
    request_body = OrderEnvelope,
    responses(
        (status = 200, description = "Order updated", body = OrderEnvelope),
        (status = 400, description = "Invalid field, id mismatch, or order already delivered"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let order = service.update_order(&path.into_inner(), &body)?;
    Ok(HttpResponse::Ok().json(OrderEnvelope { data: order }))
}

/// DELETE /orders/{order_id}
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_order(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
