pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::dish_service::DishService;
use application::order_service::OrderService;
use domain::dish::Dish;
use domain::order::Order;
use infrastructure::memory_store::InMemoryStore;
use infrastructure::seed::load_seed;

pub use config::{Config, ConfigError};

pub type AppDishService = DishService<Arc<InMemoryStore<Dish>>>;
pub type AppOrderService = OrderService<InMemoryStore<Order>>;

/// Shared services handed to every worker.
#[derive(Clone)]
pub struct AppState {
    dishes: web::Data<AppDishService>,
    orders: web::Data<AppOrderService>,
}

impl AppState {
    /// Builds empty stores, then loads any configured seed files (dishes
    /// first, so seeded orders can reference seeded dishes).
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let dish_store = Arc::new(InMemoryStore::<Dish>::new());
        let dishes = DishService::new(dish_store.clone());
        let mut orders = OrderService::new(InMemoryStore::new());
        if config.verify_dish_references {
            orders = orders.verify_dish_references(dish_store);
        }

        if let Some(path) = &config.dishes_seed {
            load_seed(path, |entry| dishes.import_dish(entry))?;
        }
        if let Some(path) = &config.orders_seed {
            load_seed(path, |entry| orders.import_order(entry))?;
        }

        Ok(Self {
            dishes: web::Data::new(dishes),
            orders: web::Data::new(orders),
        })
    }

    /// Registers services, routes and fallbacks on an actix `App`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        use handlers::{dishes, method_not_allowed, orders};

        cfg.app_data(self.dishes.clone())
            .app_data(self.orders.clone())
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error))
            .service(
                web::resource("/dishes")
                    .route(web::get().to(dishes::list_dishes))
                    .route(web::post().to(dishes::create_dish))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/dishes/{dish_id}")
                    .route(web::get().to(dishes::get_dish))
                    .route(web::put().to(dishes::update_dish))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/orders")
                    .route(web::get().to(orders::list_orders))
                    .route(web::post().to(orders::create_order))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/orders/{order_id}")
                    .route(web::get().to(orders::get_order))
                    .route(web::put().to(orders::update_order))
                    .route(web::delete().to(orders::delete_order))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", handlers::ApiDoc::openapi()),
            )
            .default_service(web::route().to(handlers::not_found));
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind((host.to_string(), port))?
    .run())
}
