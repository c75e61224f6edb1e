use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::dish::Dish;
use crate::errors::AppError;
use crate::AppDishService;

// ── Envelopes ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct DishEnvelope {
    pub data: Dish,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DishListEnvelope {
    pub data: Vec<Dish>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /dishes
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "Every stored dish", body = DishListEnvelope),
    ),
    tag = "dishes"
)]
pub async fn list_dishes(service: web::Data<AppDishService>) -> Result<HttpResponse, AppError> {
    let dishes = service.list_dishes()?;
    Ok(HttpResponse::Ok().json(DishListEnvelope { data: dishes }))
}

/// POST /dishes
///
/// Requires a truthy `name`, `description`, `price` and `image_url`; `price`
/// must be an integer greater than 0. A client-supplied `id` is ignored.
#[utoipa::path(
    post,
    path = "/dishes",
    request_body = DishEnvelope,
    responses(
        (status = 201, description = "Dish created", body = DishEnvelope),
        (status = 400, description = "Missing or invalid field"),
    ),
    tag = "dishes"
)]
pub async fn create_dish(
    service: web::Data<AppDishService>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let dish = service.create_dish(&body)?;
    Ok(HttpResponse::Created().json(DishEnvelope { data: dish }))
}

/// GET /dishes/{dish_id}
#[utoipa::path(
    get,
    path = "/dishes/{dish_id}",
    params(
        ("dish_id" = String, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, description = "Dish found", body = DishEnvelope),
        (status = 404, description = "Dish not found"),
    ),
    tag = "dishes"
)]
pub async fn get_dish(
    service: web::Data<AppDishService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let dish = service.get_dish(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(DishEnvelope { data: dish }))
}

/// PUT /dishes/{dish_id}
///
/// Replaces every field of the dish. A body `id`, when present, must match
/// the route.
#[utoipa::path(
    put,
    path = "/dishes/{dish_id}",
    params(
        ("dish_id" = String, Path, description = "Dish id"),
    ),
    request_body = DishEnvelope,
    responses(
        (status = 200, description = "Dish updated", body = DishEnvelope),
        (status = 400, description = "Missing or invalid field, or id mismatch"),
        (status = 404, description = "Dish not found"),
    ),
    tag = "dishes"
)]
pub async fn update_dish(
    service: web::Data<AppDishService>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let dish = service.update_dish(&path.into_inner(), &body)?;
    Ok(HttpResponse::Ok().json(DishEnvelope { data: dish }))
}
