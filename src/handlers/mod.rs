pub mod dishes;
pub mod orders;

use actix_web::{HttpRequest, HttpResponse};
use utoipa::OpenApi;

use crate::errors::AppError;

/// Fallback for a known path hit with an unsupported verb.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "{} not allowed for {}",
        req.method(),
        req.uri()
    )))
}

/// Fallback for any path no resource claims.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("Path not found: {}", req.uri())))
}

/// Rejects bodies that are not valid JSON before any validator runs.
pub fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
}

#[derive(OpenApi)]
#[openapi(
    paths(
        dishes::list_dishes,
        dishes::create_dish,
        dishes::get_dish,
        dishes::update_dish,
        orders::list_orders,
        orders::create_order,
        orders::get_order,
        orders::update_order,
        orders::delete_order,
    ),
    components(schemas(
        crate::domain::dish::Dish,
        crate::domain::order::Order,
        crate::domain::order::OrderLine,
        crate::domain::order::OrderStatus,
        dishes::DishEnvelope,
        dishes::DishListEnvelope,
        orders::OrderEnvelope,
        orders::OrderListEnvelope,
    )),
    tags(
        (name = "dishes", description = "Menu dishes"),
        (name = "orders", description = "Customer orders and their status lifecycle"),
    )
)]
pub struct ApiDoc;
